//! create-desktop-shortcuts - create desktop shortcuts from a JSON options document.
//!
//! The document uses the same keys as the library (`windows`, `linux`, `osx`,
//! `onlyCurrentOS`, `verbose`). It is read from a file, or from stdin when the
//! path is `-` or omitted.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "create-desktop-shortcuts")]
#[command(about = "Create Windows, Linux and macOS desktop shortcuts")]
struct Args {
    /// JSON options file ("-" reads stdin)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Create every described shortcut, not only the one for this OS
    #[arg(long)]
    all_platforms: bool,

    /// Suppress diagnostics on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Set up logging
    let default_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let raw = read_document(args.options.as_deref())?;
    let options = prepare_options(&raw, &args)?;
    debug!("Options document: {}", options);

    if desktop_shortcuts::create_desktop_shortcuts(options) {
        info!("Shortcuts created");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read options from stdin")?;
            Ok(buffer)
        }
    }
}

/// Parse the document and apply the command line overrides.
fn prepare_options(raw: &str, args: &Args) -> Result<Value> {
    let mut options: Value =
        serde_json::from_str(raw).context("Options are not valid JSON")?;

    let Some(map) = options.as_object_mut() else {
        bail!("Options must be a JSON object");
    };

    if args.all_platforms {
        map.insert("onlyCurrentOS".to_string(), Value::Bool(false));
    }
    if args.quiet {
        map.insert("verbose".to_string(), Value::Bool(false));
    }

    Ok(options)
}
