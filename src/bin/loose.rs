//! Command-line interface for loose-parser
//! This binary dumps what the lexer and parser make of a source file, for debugging.
//!
//! Usage:
//!   loose tokens `<path>` [--line `<n>`] [--format text|json|yaml]  - Dump tokens, optionally of one line
//!   loose parse `<path>` [--format treeviz|json|yaml]              - Dump the parsed block

use clap::{value_parser, Arg, Command};

use loose_parser::loose::formats::{format_block, format_tokens, OutputFormat};
use loose_parser::loose::lexing::tokenize;
use loose_parser::loose::parsing::parse_source;
use loose_parser::loose::token::tokens_on_line;

fn main() {
    let matches = Command::new("loose")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect how source text is tokenized and parsed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Dump the tokens of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("line")
                        .long("line")
                        .short('l')
                        .help("Only dump the tokens of this 1-based line")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text', 'json' or 'yaml')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Dump the parsed terms of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('treeviz', 'json' or 'yaml')")
                        .default_value("treeviz"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = required(tokens_matches, "path");
            let format = required(tokens_matches, "format");
            let line = tokens_matches.get_one::<usize>("line").copied();
            handle_tokens_command(path, line, format);
        }
        Some(("parse", parse_matches)) => {
            let path = required(parse_matches, "path");
            let format = required(parse_matches, "format");
            handle_parse_command(path, format);
        }
        _ => unreachable!(),
    }
}

fn required<'m>(matches: &'m clap::ArgMatches, name: &str) -> &'m str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(&format!("missing argument: {}", name)))
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("reading file {}: {}", path, e)))
}

fn output_format(name: &str) -> OutputFormat {
    OutputFormat::from_name(name).unwrap_or_else(|e| fail(&e.to_string()))
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, line: Option<usize>, format: &str) {
    let format = output_format(format);
    let source = read_source(path);
    let tokens = tokenize(&source);

    let selected = match line {
        Some(0) => fail("line numbers start at 1"),
        Some(line) => tokens_on_line(&tokens, line - 1),
        None => &tokens[..],
    };

    let output = format_tokens(selected, format).unwrap_or_else(|e| fail(&e.to_string()));
    print!("{}", output);
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let format = output_format(format);
    let source = read_source(path);

    let block = parse_source(&source).unwrap_or_else(|e| fail(&format!("{}: {}", path, e)));

    let output = format_block(&block, format).unwrap_or_else(|e| fail(&e.to_string()));
    print!("{}", output);
}
