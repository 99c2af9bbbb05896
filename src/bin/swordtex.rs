//! Command-line interface for swordtex
//! This binary drives each parser over files for inspection and scripting.
//!
//! Usage:
//!   swordtex parse `<path>` [--payload]        - Parse a markup document to JSON
//!   swordtex refs `<path>` [--payload]         - Extract citations from free text
//!   swordtex xrefs `<path>` [--payload]        - Parse a cross-reference dump
//!   swordtex links `<path>` [--source <side>]  - Parse a lexicon pair dump
//!   swordtex key `<reference>`                 - Print the canonical lookup key
//!   swordtex info                              - Show the effective configuration

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use swordtex::config::{Loader, SwordtexConfig};
use swordtex::crosslinks;
use swordtex::crossref;
use swordtex::markup::parser::parse_document;
use swordtex::payload;
use swordtex::reference;
use swordtex::strongs::Lexicon;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("swordtex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting SWORD markup and study-aid text formats")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a markup document into a JSON node sequence")
                .arg(path_arg("Path to the markup file"))
                .arg(payload_arg()),
        )
        .subcommand(
            Command::new("refs")
                .about("Extract scripture citations from free text")
                .arg(path_arg("Path to the text file"))
                .arg(payload_arg()),
        )
        .subcommand(
            Command::new("xrefs")
                .about("Parse a cross-reference dump into a citation list")
                .arg(path_arg("Path to the dump file"))
                .arg(payload_arg()),
        )
        .subcommand(
            Command::new("links")
                .about("Parse a lexicon pair dump into a pair table")
                .arg(path_arg("Path to the dump file"))
                .arg(payload_arg())
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("Source namespace: 'hebrew' or 'greek' (default from configuration)"),
                ),
        )
        .subcommand(
            Command::new("key")
                .about("Canonicalize a reference into its lookup key")
                .arg(
                    Arg::new("reference")
                        .help("Reference text, e.g. 'John 3:16'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("info").about("Show the effective configuration"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", sub)) => {
            let text = read_text(sub, Some("result"));
            print_json(&parse_document(&text));
        }
        Some(("refs", sub)) => {
            let text = read_text(sub, Some("result"));
            print_json(&reference::extract_citations(&text));
        }
        Some(("xrefs", sub)) => {
            let text = read_text(sub, Some("raw_html"));
            print_json(&crossref::parse_cross_references(&text));
        }
        Some(("links", sub)) => {
            let config = load_config(sub);
            let source = match sub.get_one::<String>("source") {
                Some(side) => parse_source(side),
                None => config.lexicon.default_source.lexicon(),
            };
            let text = read_text(sub, Some("raw_html"));
            print_json(&crosslinks::parse_pairs(&text, source));
        }
        Some(("key", sub)) => {
            let raw = sub
                .get_one::<String>("reference")
                .expect("reference is required");
            println!("{}", reference::lookup_key(raw));
        }
        Some(("info", sub)) => {
            handle_info_command(&load_config(sub));
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn path_arg(help: &str) -> Arg {
    Arg::new("path").help(help.to_string()).required(true).index(1)
}

fn payload_arg() -> Arg {
    Arg::new("payload")
        .long("payload")
        .action(ArgAction::SetTrue)
        .help("Treat the file as a JSON API payload and extract its text field")
}

fn load_config(matches: &ArgMatches) -> SwordtexConfig {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Read the input file; with --payload, extract the given text field from
/// its JSON envelope first
fn read_text(matches: &ArgMatches, payload_field: Option<&str>) -> String {
    let path = matches.get_one::<String>("path").expect("path is required");
    let raw = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });
    if !matches.get_flag("payload") {
        return raw;
    }
    let field = payload_field.expect("payload flag only on payload-backed commands");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Failed to parse {} as JSON: {}", path, e);
        std::process::exit(1);
    });
    payload::text_field(&value, field)
        .unwrap_or_else(|e| {
            eprintln!("Payload error: {}", e);
            std::process::exit(1);
        })
        .to_string()
}

fn parse_source(side: &str) -> Lexicon {
    match side.to_ascii_lowercase().as_str() {
        "hebrew" => Lexicon::Hebrew,
        "greek" => Lexicon::Greek,
        other => {
            eprintln!("Unknown source namespace '{}'", other);
            eprintln!("Available namespaces: hebrew, greek");
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    let formatted = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

fn handle_info_command(config: &SwordtexConfig) {
    println!("api:");
    println!("  base_url: {}", config.api.base_url);
    println!("  default_module: {}", config.api.default_module);
    println!("  locale: {}", config.api.locale);
    println!("  option_filters: {}", config.api.option_filters);
    println!("lexicon:");
    println!("  hebrew_module: {}", config.lexicon.hebrew_module);
    println!("  greek_module: {}", config.lexicon.greek_module);
    println!(
        "  default_source: {}",
        config.lexicon.default_source.lexicon()
    );
}
