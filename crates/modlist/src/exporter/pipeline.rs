//! Main entry point for the exporter
//!
//! The call chain flows as follows:
//!
//! User Code
//! ↓
//! Exporter (this file)
//! ↓
//! discover:: functions (discover.rs)
//! ↓
//! ManifestRecord (manifest.rs) → ResolvedSource (sources/)
//! ↓
//! output::write_outputs (output.rs)

use std::path::Path;

use tracing::{debug, info, warn};

use crate::exporter::config::ExportConfig;
use crate::exporter::core::{ModEntry, ModList, Result, Side};
use crate::exporter::manifest::ManifestRecord;
use crate::exporter::sources::{ModrinthApi, ResolvedSource};
use crate::exporter::{discover, output};

/// Counts reported by one export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Manifest files found under the client directory
    pub discovered: usize,
    /// Entries written to the output mapping
    pub exported: usize,
    /// Manifests dropped by a parse or resolution failure
    pub skipped: usize,
}

/// One-shot exporter from a packwiz client tree to the two output files.
///
/// Each manifest is processed to completion before the next begins; a
/// manifest that fails to parse or resolve is logged and skipped without
/// affecting the rest of the run.
pub struct Exporter {
    config: ExportConfig,
    api: ModrinthApi,
}

impl Exporter {
    /// Create an exporter with its own registry client
    pub fn new(config: ExportConfig) -> Result<Self> {
        let api = ModrinthApi::new(&config)?;
        Ok(Self { config, api })
    }

    /// Create an exporter around an existing registry client
    pub fn with_api(config: ExportConfig, api: ModrinthApi) -> Self {
        Self { config, api }
    }

    /// Run the full pipeline against `root`.
    ///
    /// Fails without writing anything if no client directory exists;
    /// otherwise always writes both artifacts, containing every manifest
    /// that made it through.
    pub async fn run(&self, root: &Path) -> Result<ExportSummary> {
        let client_dir = discover::find_client_dir(root, &self.config)?;
        let manifests = discover::find_manifests(&client_dir, &self.config)?;
        info!(
            "exporting {} manifests from {}",
            manifests.len(),
            client_dir.display()
        );

        let mut modlist = ModList::new();
        let mut skipped = 0usize;

        for path in &manifests {
            match self.export_one(path).await {
                Ok((name, entry)) => {
                    debug!("exported '{}' -> {}", name, entry.link);
                    modlist.insert(name, entry);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("failed to process {}: {}", path.display(), e);
                    skipped += 1;
                }
            }
        }

        output::write_outputs(&modlist, root, &self.config).await?;

        let summary = ExportSummary {
            discovered: manifests.len(),
            exported: modlist.len(),
            skipped,
        };
        info!(
            "export finished: {} exported, {} skipped",
            summary.exported, summary.skipped
        );
        Ok(summary)
    }

    /// Parse and resolve a single manifest
    async fn export_one(&self, path: &Path) -> Result<(String, ModEntry)> {
        let record = ManifestRecord::from_path(path, &self.config.manifest_suffix)?;

        let side = if self
            .config
            .client_only_overrides
            .iter()
            .any(|name| *name == record.name)
        {
            debug!("forcing side=client for '{}'", record.name);
            Side::Client
        } else {
            record.side
        };

        let source = ResolvedSource::resolve(&record, &self.api, &self.config).await?;
        Ok((record.name, source.into_entry(side, &self.config)))
    }
}
