//! Classify a local TXT/PDF document and print the report as JSON.
//!
//! Usage: classify_file <path> [--format text|pdf]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use fomc_stance_classifier::{loader, Classifier, DocumentFormat, LexiconSet};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let mut path: Option<PathBuf> = None;
    let mut format: Option<DocumentFormat> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                let v = args.next().context("--format needs a value (text|pdf)")?;
                format = Some(v.parse()?);
            }
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            other => bail!("unexpected argument: {other}"),
        }
    }
    let Some(path) = path else {
        bail!("usage: classify_file <path> [--format text|pdf]");
    };

    let text = match format {
        Some(f) => loader::load_path_as(&path, f)?,
        None => loader::load_path(&path)?,
    };

    let classifier = Classifier::new(LexiconSet::load_default()?);
    let report = classifier.analyze(&text)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
