use std::fs;
use std::path::PathBuf;

use mcschema_lib::{check, parse};

pub struct CheckArgs {
    pub report_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = fs::read_to_string(&args.report_path).unwrap_or_else(|e| {
        eprintln!(
            "error: cannot read report '{}': {}",
            args.report_path.display(),
            e
        );
        std::process::exit(1);
    });

    let report = parse(&source).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let diagnostics = check(&report);
    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        !diagnostics.has_errors()
    };

    if !is_valid {
        let path = args.report_path.display().to_string();
        eprint!(
            "{}",
            diagnostics
                .printer()
                .source(&source)
                .path(&path)
                .colored(args.color)
                .render()
        );
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
