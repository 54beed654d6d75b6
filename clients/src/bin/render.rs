//! `obo-render` — Loads an ontology model from JSON and writes it as an
//! OBO 1.4 document.
//!
//! **Input:** a JSON object matching `obo_ontology::Ontology`, read from
//! `--input` (or `OBO_RENDER_INPUT`); `-` reads standard input.
//!
//! **Output:** the rendered document, written to `--out` (or
//! `OBO_RENDER_OUT`), standard output when neither is given.
//!
//! **Usage:**
//! ```
//! obo-render [--input <path>] [--out <path>] [--log-level <level>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use obo_ontology::Ontology;
use tracing_subscriber::EnvFilter;

/// Render an ontology model as an OBO document.
#[derive(Parser)]
#[command(name = "obo-render", about = "Render a JSON ontology model as an OBO 1.4 document")]
struct Args {
    /// JSON model to read; `-` reads standard input.
    #[arg(long, env = "OBO_RENDER_INPUT", default_value = "-")]
    input: PathBuf,

    /// File to write the document to; standard output when omitted.
    #[arg(long, env = "OBO_RENDER_OUT")]
    out: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level: {level}"))?;
    // Logs go to stderr; stdout may carry the document.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read model from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write document to stdout")
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let raw = read_input(&args.input)?;
    let ontology: Ontology = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse model from {}", args.input.display()))?;
    tracing::debug!(
        terms = ontology.terms.len(),
        typedefs = ontology.relationships.len(),
        "loaded model"
    );

    let text = obo_ontology::to_obo(&ontology).context("Failed to render ontology")?;
    write_output(args.out.as_deref(), &text)?;

    tracing::info!(
        terms = ontology.terms.len(),
        typedefs = ontology.relationships.len(),
        bytes = text.len(),
        "render complete"
    );
    Ok(())
}
