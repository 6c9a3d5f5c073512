//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Registry snapshot to extract from (positional).
pub fn snapshot_path_arg() -> Arg {
    Arg::new("snapshot_path")
        .value_name("SNAPSHOT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Registry snapshot (JSON)")
}

/// Report to validate (positional).
pub fn report_path_arg() -> Arg {
    Arg::new("report_path")
        .value_name("REPORT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Report file to validate")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the report to a file instead of stdout")
}

/// Namespace stripped from kind names (--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .long("namespace")
        .value_name("NS")
        .help("Namespace stripped from kind names [default: minecraft]")
}

/// Entity kind that is never instantiated (--player).
pub fn player_arg() -> Arg {
    Arg::new("player")
        .long("player")
        .value_name("KIND")
        .help("Entity kind to skip [default: minecraft:player]")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for phase summaries, -vv for skipped kinds)")
}
