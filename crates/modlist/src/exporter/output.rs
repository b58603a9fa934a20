//! Output writer
//!
//! Serializes the assembled mod list into the two artifacts. Both files
//! are replaced wholesale on every run.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::exporter::config::ExportConfig;
use crate::exporter::core::{ExportError, FileOperation, ModList, Result};

/// Write `mods.yaml` and `server-mods.txt` under `<root>/<output_dir>/`,
/// creating the output directory if needed.
pub async fn write_outputs(modlist: &ModList, root: &Path, config: &ExportConfig) -> Result<()> {
    let out_dir = root.join(&config.output_dir);
    fs::create_dir_all(&out_dir)
        .await
        .map_err(|e| ExportError::FileSystem {
            path: out_dir.clone(),
            operation: FileOperation::CreateDir,
            source: e,
        })?;

    let yaml = serde_yaml::to_string(modlist).map_err(|e| ExportError::Serialize { source: e })?;
    let yaml_path = config.mods_yaml_path(root);
    fs::write(&yaml_path, yaml)
        .await
        .map_err(|e| ExportError::FileSystem {
            path: yaml_path.clone(),
            operation: FileOperation::Write,
            source: e,
        })?;
    debug!("wrote {} entries to {}", modlist.len(), yaml_path.display());

    let mut server_list = String::new();
    for name in modlist.server_mod_names() {
        server_list.push_str(name);
        server_list.push('\n');
    }
    let txt_path = config.server_mods_path(root);
    fs::write(&txt_path, server_list)
        .await
        .map_err(|e| ExportError::FileSystem {
            path: txt_path.clone(),
            operation: FileOperation::Write,
            source: e,
        })?;
    debug!("wrote server mod list to {}", txt_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::core::{ModEntry, Side};
    use tempfile::tempdir;

    fn entry(link: &str, side: Side) -> ModEntry {
        ModEntry {
            link: link.to_string(),
            project_id: None,
            version_id: "v1".to_string(),
            side,
        }
    }

    #[tokio::test]
    async fn writes_both_artifacts_under_the_output_dir() {
        let root = tempdir().unwrap();
        let config = ExportConfig::default();

        let mut list = ModList::new();
        list.insert("alpha".to_string(), entry("https://github.com/a/a", Side::Both));
        list.insert("beta".to_string(), entry("https://github.com/b/b", Side::Client));

        write_outputs(&list, root.path(), &config).await.unwrap();

        let yaml = std::fs::read_to_string(config.mods_yaml_path(root.path())).unwrap();
        assert!(yaml.contains("alpha:"));
        assert!(yaml.contains("link: https://github.com/b/b"));

        let txt = std::fs::read_to_string(config.server_mods_path(root.path())).unwrap();
        assert_eq!(txt, "alpha\n");
    }

    #[tokio::test]
    async fn reruns_overwrite_instead_of_appending() {
        let root = tempdir().unwrap();
        let config = ExportConfig::default();

        let mut big = ModList::new();
        big.insert("one".to_string(), entry("https://github.com/x/1", Side::Server));
        big.insert("two".to_string(), entry("https://github.com/x/2", Side::Server));
        write_outputs(&big, root.path(), &config).await.unwrap();

        let mut small = ModList::new();
        small.insert("one".to_string(), entry("https://github.com/x/1", Side::Server));
        write_outputs(&small, root.path(), &config).await.unwrap();

        let txt = std::fs::read_to_string(config.server_mods_path(root.path())).unwrap();
        assert_eq!(txt, "one\n");
        let yaml = std::fs::read_to_string(config.mods_yaml_path(root.path())).unwrap();
        assert!(!yaml.contains("two:"));
    }

    #[tokio::test]
    async fn empty_list_still_produces_both_files() {
        let root = tempdir().unwrap();
        let config = ExportConfig::default();

        write_outputs(&ModList::new(), root.path(), &config)
            .await
            .unwrap();

        assert!(config.mods_yaml_path(root.path()).is_file());
        let txt = std::fs::read_to_string(config.server_mods_path(root.path())).unwrap();
        assert_eq!(txt, "");
    }
}
