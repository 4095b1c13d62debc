//! `jsondescent` CLI: reads one document from a file, parses it, and prints
//! the kind of the top-level value followed by the value itself.
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use jsondescent::{ParseError, Value};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jsondescent", version, about)]
struct Cli {
    /// Document to parse.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Print the compact rendering instead of the debug tree.
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{}: {source}", .path.display())]
    Parse { path: PathBuf, source: ParseError },
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Parse { .. } => 1,
            CliError::Read { .. } => 2,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli.path) {
        Ok(value) => {
            print_value(&value, cli.compact);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(path: &Path) -> Result<Value, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read document");

    jsondescent::parse(&source).map_err(|source| CliError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn print_value(value: &Value, compact: bool) {
    let mut out = io::stdout().lock();
    let written = if compact {
        writeln!(out, "{}\n{value}", value.type_name())
    } else {
        writeln!(out, "{}\n{value:#?}", value.type_name())
    };
    if let Err(err) = written {
        if err.kind() != io::ErrorKind::BrokenPipe {
            tracing::warn!(error = %err, "failed to write output");
        }
    }
}
