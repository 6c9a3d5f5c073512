//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::extract::ExtractArgs;

pub struct ExtractParams {
    pub snapshot_path: PathBuf,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub player: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
    pub verbosity: u8,
}

impl ExtractParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            snapshot_path: required_path(m, "snapshot_path"),
            output: m.get_one::<PathBuf>("output").cloned(),
            namespace: m.get_one::<String>("namespace").cloned(),
            player: m.get_one::<String>("player").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            verbosity: m.get_count("verbose"),
        }
    }
}

impl From<ExtractParams> for ExtractArgs {
    fn from(p: ExtractParams) -> Self {
        Self {
            snapshot_path: p.snapshot_path,
            output: p.output,
            namespace: p.namespace,
            player: p.player,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub report_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
    pub verbosity: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            report_path: required_path(m, "report_path"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            verbosity: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            report_path: p.report_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .expect("clap enforces required positionals")
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
