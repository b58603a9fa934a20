//! Link resolution
//!
//! Each manifest resolves through exactly one of two paths, chosen by the
//! host of its download URL: GitHub release URLs are taken apart
//! structurally, everything else goes through one Modrinth project lookup.

use tracing::debug;

// Individual resolution path modules
pub mod github;
pub mod modrinth;

pub use github::GithubSource;
pub use modrinth::{ModrinthApi, ModrinthSource};

use crate::exporter::config::ExportConfig;
use crate::exporter::core::{ExportError, ModEntry, Result, Side};
use crate::exporter::manifest::ManifestRecord;

/// Structured representation of where a mod's canonical link comes from.
///
/// The two variants are mutually exclusive per record: a `Hosted` entry
/// never carries a project id, a `Registry` entry always does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// Resolved from a GitHub release URL, no lookup needed
    Hosted(GithubSource),
    /// Resolved through the Modrinth project endpoint
    Registry(ModrinthSource),
}

impl ResolvedSource {
    /// Resolve one manifest record, issuing a registry lookup when the
    /// download URL does not point at a GitHub release.
    pub async fn resolve(
        record: &ManifestRecord,
        api: &ModrinthApi,
        config: &ExportConfig,
    ) -> Result<Self> {
        if github::is_release_host(&record.download_url, &config.github_host) {
            let source = GithubSource::parse(&record.download_url)?;
            debug!("resolved '{}' as {}", record.name, source.description());
            return Ok(ResolvedSource::Hosted(source));
        }

        let (Some(project_id), Some(version_id)) = (&record.project_id, &record.version_id) else {
            return Err(ExportError::MissingRegistryIds {
                name: record.name.clone(),
            });
        };

        let slug = api.project_slug(project_id).await?;
        let source = ModrinthSource {
            project_id: project_id.clone(),
            version_id: version_id.clone(),
            slug,
        };
        debug!("resolved '{}' as {}", record.name, source.description());
        Ok(ResolvedSource::Registry(source))
    }

    /// Fold this source into the output entry for the given side
    pub fn into_entry(self, side: Side, config: &ExportConfig) -> ModEntry {
        match self {
            ResolvedSource::Hosted(github) => ModEntry {
                link: format!(
                    "https://{}/{}/{}",
                    config.github_host, github.owner, github.repo
                ),
                project_id: None,
                version_id: github.tag,
                side,
            },
            ResolvedSource::Registry(modrinth) => ModEntry {
                link: format!("{}/mod/{}", config.modrinth_site_base, modrinth.slug),
                project_id: Some(modrinth.project_id),
                version_id: modrinth.version_id,
                side,
            },
        }
    }
}
