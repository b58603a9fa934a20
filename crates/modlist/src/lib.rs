//! Modlist Export Library
//!
//! This library converts a packwiz-style client directory into two derived
//! artifacts: a YAML mapping of mod metadata (`sources/mods.yaml`) and a
//! plain list of server-side mod names (`sources/server-mods.txt`).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use modlist::{ExportConfig, Exporter};
//!
//! # async fn example() -> modlist::Result<()> {
//! // Create an exporter with the default layout (looks for a `*_client`
//! // directory under the given root).
//! let exporter = Exporter::new(ExportConfig::default())?;
//!
//! // Run the export against the current directory
//! let summary = exporter.run(std::path::Path::new(".")).await?;
//!
//! println!(
//!     "exported {} of {} manifests ({} skipped)",
//!     summary.exported, summary.discovered, summary.skipped
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Manifest discovery**: finds `*.pw.toml` manifests under the client
//!   content directories (`mods`, `shaderpacks`, `resourcepacks`)
//! - **Two resolution paths**: GitHub release URLs are resolved by pure URL
//!   parsing; everything else resolves through one Modrinth project lookup
//! - **Per-manifest fault isolation**: a manifest that fails to parse or
//!   resolve is logged and skipped, the rest of the run continues
//! - **Ordered output**: the YAML mapping preserves discovery order, so
//!   reruns over unchanged input are byte-identical

pub mod exporter;

// Re-export commonly used types for convenience
pub use exporter::{
    ExportConfig, ExportError, ExportSummary, Exporter, FileOperation,
    GithubSource, ManifestRecord, ModEntry, ModList, ModrinthApi,
    ModrinthSource, ResolvedSource, Result, Side,
};
