use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use mcschema_core::{Identifier, Snapshot};
use mcschema_lib::{ExtractConfig, extract_snapshot};
use tempfile::NamedTempFile;

pub struct ExtractArgs {
    pub snapshot_path: PathBuf,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub player: Option<String>,
    pub strict: bool,
    pub color: bool,
}

impl ExtractArgs {
    fn config(&self) -> ExtractConfig {
        let mut config = ExtractConfig::new();
        if let Some(namespace) = &self.namespace {
            config = config.namespace(namespace.as_str());
        }
        if let Some(player) = &self.player {
            config = config.player_kind(Identifier::parse(player));
        }
        config
    }
}

pub fn run(args: ExtractArgs) {
    let json = fs::read_to_string(&args.snapshot_path).unwrap_or_else(|e| {
        eprintln!(
            "error: cannot read snapshot '{}': {}",
            args.snapshot_path.display(),
            e
        );
        std::process::exit(1);
    });

    let snapshot = Snapshot::from_json(&json).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let extraction = extract_snapshot(&snapshot, &args.config());

    // The report is written whole, before any diagnostic is printed.
    let written = match &args.output {
        Some(path) => write_atomically(path, |w| extraction.write_report(w)),
        None => extraction.write_report(&mut io::stdout().lock()),
    };
    if let Err(e) = written {
        eprintln!("error: cannot write report: {}", e);
        std::process::exit(1);
    }

    let diagnostics = extraction.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.printer().colored(args.color).render());
    }

    if args.strict && diagnostics.has_errors() {
        std::process::exit(1);
    }
}

/// Write to a temporary sibling of `path` and rename it into place once
/// `write` succeeds. On failure the temporary file is removed and `path` is
/// left untouched.
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<NamedTempFile>) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut out = BufWriter::new(NamedTempFile::new_in(dir)?);
    write(&mut out)?;
    let file = out.into_inner().map_err(io::IntoInnerError::into_error)?;
    file.persist(path)?;
    Ok(())
}
