mod cli;
mod commands;

use cli::{CheckParams, ExtractParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("extract", m)) => {
            let params = ExtractParams::from_matches(m);
            init_logging(params.verbosity);
            commands::extract::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            init_logging(params.verbosity);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
