//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("mcschema")
        .about("Extract a typed block and entity schema from a registry snapshot")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(extract_command())
        .subcommand(check_command())
}

/// Walk a snapshot and write the report.
pub fn extract_command() -> Command {
    Command::new("extract")
        .about("Write the schema report of a registry snapshot")
        .override_usage(
            "\
  mcschema extract <SNAPSHOT>
  mcschema extract <SNAPSHOT> -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  mcschema extract registry.json              # report to stdout
  mcschema extract registry.json -o data.txt  # report to a file
  mcschema extract modded.json --namespace create --player create:avatar"#,
        )
        .arg(snapshot_path_arg())
        .arg(output_file_arg())
        .arg(namespace_arg())
        .arg(player_arg())
        .arg(strict_arg().help("Exit with failure if extraction reported errors"))
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Validate a report.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a schema report")
        .after_help(
            r#"EXAMPLES:
  mcschema check data.txt           # fail on errors
  mcschema check data.txt --strict  # fail on warnings too"#,
        )
        .arg(report_path_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
