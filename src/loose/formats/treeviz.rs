//! Treeviz formatter for blocks
//!
//! One line per term, nesting shown with box-drawing connectors. Root terms are listed
//! in block order; under each term come the terms its indexed inputs point at.
//!
//! Format:
//! <prefix><connector> <icon> $<block_index> <label>[  ⚠ <parse error>]
//!
//! The label is the term's format with surrounding trivia trimmed, truncated to 30 chars.
//!
//! Icons
//!     Block: ⧉
//!     FunctionCall: ƒ
//!     Identifier: ◦
//!     Infix: ⊕

use crate::loose::ast::{Block, Term, TermType};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(term_type: TermType) -> &'static str {
    match term_type {
        TermType::FunctionCall => "ƒ",
        TermType::Identifier => "◦",
        TermType::Infix => "⊕",
    }
}

fn label(term: &Term) -> String {
    let flattened = term.format.trim().replace('\n', "↵");
    truncate(&flattened, 30)
}

fn format_term(
    block: &Block,
    term: &Term,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    output.push_str(&format!(
        "{}{} {} ${} {}",
        prefix,
        connector,
        get_icon(term.term_type),
        term.block_index,
        label(term)
    ));
    if let Some(error) = &term.parse_error {
        output.push_str(&format!("  ⚠ {}", error));
    }
    output.push('\n');

    let children: Vec<&Term> = term
        .inputs
        .iter()
        .filter_map(|input| block.resolve(input))
        .collect();
    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_term(block, child, &child_prefix, i, children.len()));
    }

    output
}

pub fn to_treeviz_str(block: &Block) -> String {
    let roots = block.roots();
    let mut output = format!("⧉ {} terms\n", block.len());
    for (i, root) in roots.iter().enumerate() {
        output.push_str(&format_term(block, root, "", i, roots.len()));
    }
    output
}
