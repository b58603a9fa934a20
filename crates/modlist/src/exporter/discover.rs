//! Manifest discovery
//!
//! Locates the client asset directory under the pack root and enumerates
//! the manifest files inside its content subdirectories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::exporter::config::ExportConfig;
use crate::exporter::core::{ExportError, FileOperation, Result};

/// Find the client asset directory: the first immediate child of `root`
/// that is a directory and whose name ends with the configured suffix.
pub fn find_client_dir(root: &Path, config: &ExportConfig) -> Result<PathBuf> {
    let entries = fs::read_dir(root).map_err(|e| ExportError::FileSystem {
        path: root.to_path_buf(),
        operation: FileOperation::ReadDir,
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ExportError::FileSystem {
            path: root.to_path_buf(),
            operation: FileOperation::ReadDir,
            source: e,
        })?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(&config.client_dir_suffix) && path.is_dir() {
            debug!("found client directory: {}", path.display());
            return Ok(path);
        }
    }

    Err(ExportError::ClientDirNotFound {
        root: root.to_path_buf(),
        suffix: config.client_dir_suffix.clone(),
    })
}

/// Enumerate manifest files under the content subdirectories of `client_dir`.
///
/// Subdirectories are visited in configured order; within each, files are
/// sorted by name so the discovery order is stable across runs. A missing
/// subdirectory contributes no files.
pub fn find_manifests(client_dir: &Path, config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    for subdir in &config.content_dirs {
        let dir = client_dir.join(subdir);
        if !dir.is_dir() {
            debug!("skipping missing content directory: {}", dir.display());
            continue;
        }

        let entries = fs::read_dir(&dir).map_err(|e| ExportError::FileSystem {
            path: dir.clone(),
            operation: FileOperation::ReadDir,
            source: e,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(&config.manifest_suffix))
            })
            .collect();
        files.sort();

        debug!("found {} manifests in {}", files.len(), dir.display());
        manifests.extend(files);
    }

    Ok(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_directory_with_client_suffix() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("overrides")).unwrap();
        fs::create_dir(root.path().join("fabulous_client")).unwrap();

        let config = ExportConfig::default();
        let found = find_client_dir(root.path(), &config).unwrap();
        assert_eq!(found, root.path().join("fabulous_client"));
    }

    #[test]
    fn suffix_match_on_a_file_does_not_count() {
        let root = tempdir().unwrap();
        touch(&root.path().join("notes_client"));

        let config = ExportConfig::default();
        let err = find_client_dir(root.path(), &config).unwrap_err();
        assert!(matches!(err, ExportError::ClientDirNotFound { .. }));
    }

    #[test]
    fn missing_client_dir_is_an_error() {
        let root = tempdir().unwrap();
        let config = ExportConfig::default();
        let err = find_client_dir(root.path(), &config).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn manifests_are_sorted_within_each_content_dir() {
        let root = tempdir().unwrap();
        let client = root.path().join("pack_client");
        fs::create_dir_all(client.join("mods")).unwrap();
        fs::create_dir_all(client.join("resourcepacks")).unwrap();

        touch(&client.join("mods/zeta.pw.toml"));
        touch(&client.join("mods/alpha.pw.toml"));
        touch(&client.join("mods/alpha.jar"));
        touch(&client.join("resourcepacks/icons.pw.toml"));

        let config = ExportConfig::default();
        let manifests = find_manifests(&client, &config).unwrap();
        let names: Vec<_> = manifests
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        // mods dir first (sorted), then resourcepacks; the jar is ignored
        assert_eq!(
            names,
            ["alpha.pw.toml", "zeta.pw.toml", "icons.pw.toml"]
        );
    }

    #[test]
    fn missing_subdirectory_contributes_no_files() {
        let root = tempdir().unwrap();
        let client = root.path().join("pack_client");
        fs::create_dir_all(client.join("mods")).unwrap();
        touch(&client.join("mods/solo.pw.toml"));

        let config = ExportConfig::default();
        let manifests = find_manifests(&client, &config).unwrap();
        assert_eq!(manifests.len(), 1);
    }
}
