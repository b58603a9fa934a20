//! Packwiz manifest parser
//!
//! Reads one `*.pw.toml` file into a [`ManifestRecord`]. Only the fields
//! the export pipeline needs are extracted; everything else in the
//! manifest (hashes, filenames, pins) is ignored.

use std::path::Path;

use serde::Deserialize;

use crate::exporter::core::{ExportError, Result, Side};

/// Raw manifest structure as it appears on disk
#[derive(Debug, Deserialize)]
struct PwManifest {
    #[serde(default)]
    side: Option<String>,
    #[serde(default)]
    update: Option<UpdateSection>,
    #[serde(default)]
    download: Option<DownloadSection>,
}

#[derive(Debug, Deserialize)]
struct UpdateSection {
    #[serde(default)]
    modrinth: Option<ModrinthUpdate>,
}

#[derive(Debug, Deserialize)]
struct ModrinthUpdate {
    #[serde(rename = "mod-id", default)]
    mod_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DownloadSection {
    #[serde(default)]
    url: Option<String>,
}

/// The fields of one manifest the pipeline acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Mod name, derived from the filename with the manifest suffix stripped
    pub name: String,
    pub side: Side,
    /// Modrinth project id, when the manifest declares an update source
    pub project_id: Option<String>,
    /// Modrinth version id, when the manifest declares an update source
    pub version_id: Option<String>,
    /// Declared download URL; empty when absent
    pub download_url: String,
}

impl ManifestRecord {
    /// Read and parse one manifest file
    pub fn from_path(path: &Path, manifest_suffix: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ExportError::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str(&text, path, manifest_suffix)
    }

    fn from_str(text: &str, path: &Path, manifest_suffix: &str) -> Result<Self> {
        let raw: PwManifest = toml::from_str(text).map_err(|e| ExportError::ManifestParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let name = file_name
            .strip_suffix(manifest_suffix)
            .unwrap_or(file_name)
            .to_string();

        let modrinth = raw.update.and_then(|update| update.modrinth);

        Ok(Self {
            name,
            side: raw.side.as_deref().map_or(Side::Unknown, Side::parse),
            project_id: modrinth.as_ref().and_then(|m| m.mod_id.clone()),
            version_id: modrinth.as_ref().and_then(|m| m.version.clone()),
            download_url: raw
                .download
                .and_then(|download| download.url)
                .unwrap_or_default(),
        })
    }
}
