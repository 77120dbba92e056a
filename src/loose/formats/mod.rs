//! Output formats for tokens and blocks
//!
//!     - `treeviz`: human-readable tree of a block's terms
//!     - `json` / `yaml`: serde serialization of tokens and blocks
//!
//! Serialization errors surface as [`FormatError`].

pub mod treeviz;

use serde::Serialize;
use std::fmt;

use crate::loose::ast::Block;
use crate::loose::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "treeviz" => Ok(OutputFormat::Treeviz),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors that can occur while rendering output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnknownFormat(String),
    /// The format exists but cannot render this kind of value
    Unsupported { format: String, what: String },
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "Unknown format: {}", name),
            FormatError::Unsupported { format, what } => {
                write!(f, "Format '{}' cannot render {}", format, what)
            }
            FormatError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|e| FormatError::Serialization(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    serde_yaml::to_string(value).map_err(|e| FormatError::Serialization(e.to_string()))
}

/// Render a token list: one `line:column kind "text"` line per token, or serde output.
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(tokens.iter().map(|t| format!("{}\n", t)).collect()),
        OutputFormat::Treeviz => Err(FormatError::Unsupported {
            format: "treeviz".to_string(),
            what: "tokens".to_string(),
        }),
        OutputFormat::Json => to_json(tokens),
        OutputFormat::Yaml => to_yaml(tokens),
    }
}

/// Render a parsed block as a treeviz tree or serde output.
pub fn format_block(block: &Block, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Treeviz => Ok(treeviz::to_treeviz_str(block)),
        OutputFormat::Text => Err(FormatError::Unsupported {
            format: "text".to_string(),
            what: "blocks".to_string(),
        }),
        OutputFormat::Json => to_json(block),
        OutputFormat::Yaml => to_yaml(block),
    }
}
