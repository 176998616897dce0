//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use crate::logging::LogLevel;

/// Shape document file (positional, "-" for stdin).
pub fn shape_path_arg() -> Arg {
    Arg::new("shape_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Shape document file (use \"-\" for stdin)")
}

/// Inline shape document (-e/--expr).
pub fn shape_text_arg() -> Arg {
    Arg::new("shape_text")
        .short('e')
        .long("expr")
        .value_name("JSON")
        .conflicts_with("shape_path")
        .help("Inline shape document")
}

/// Catalog file (positional, required).
pub fn catalog_path_arg() -> Arg {
    Arg::new("catalog_path")
        .value_name("CATALOG")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Catalog JSON file (use \"-\" for stdin)")
}

/// Declaring type (--type).
pub fn type_name_arg() -> Arg {
    Arg::new("type_name")
        .short('t')
        .long("type")
        .value_name("NAME")
        .required(true)
        .help("Declaring type, by simple or full name")
}

/// Single member to print (--member).
pub fn member_name_arg() -> Arg {
    Arg::new("member_name")
        .short('m')
        .long("member")
        .value_name("NAME")
        .help("Print only this member")
}

/// Namespace-qualified names (--full-names).
pub fn full_names_arg() -> Arg {
    Arg::new("full_names")
        .long("full-names")
        .action(ArgAction::SetTrue)
        .help("Use namespace-qualified type names")
}

/// Framework names instead of C# keywords (--no-aliases).
pub fn no_aliases_arg() -> Arg {
    Arg::new("no_aliases")
        .long("no-aliases")
        .action(ArgAction::SetTrue)
        .help("Spell primitives by framework name (Int32 instead of int)")
}

/// Log verbosity (--log-level), available on every subcommand.
pub fn log_level_arg() -> Arg {
    Arg::new("log_level")
        .long("log-level")
        .value_name("LEVEL")
        .value_parser(value_parser!(LogLevel))
        .global(true)
        .help("Log verbosity (overrides TYNAME_LOG)")
}
