//! One-shot exporter binary
//!
//! Runs the export against the current directory: finds the `*_client`
//! tree, resolves every manifest and writes `sources/mods.yaml` and
//! `sources/server-mods.txt`. Takes no arguments; `RUST_LOG` controls
//! log verbosity.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use modlist::{ExportConfig, Exporter};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let exporter =
        Exporter::new(ExportConfig::default()).context("failed to set up the exporter")?;
    let summary = exporter
        .run(Path::new("."))
        .await
        .context("export failed")?;

    info!(
        "wrote {} of {} manifests ({} skipped)",
        summary.exported, summary.discovered, summary.skipped
    );
    Ok(())
}
