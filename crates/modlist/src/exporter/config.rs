//! Configuration for the export pipeline

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for an export run.
///
/// All values have fixed defaults matching the expected pack layout; there
/// is no external configuration surface.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Suffix marking the client asset directory under the scanned root
    pub client_dir_suffix: String,
    /// Filename suffix of per-mod manifests
    pub manifest_suffix: String,
    /// Content subdirectories scanned for manifests, in output order
    pub content_dirs: Vec<String>,
    /// Output directory, relative to the scanned root
    pub output_dir: PathBuf,
    /// Filename of the YAML mapping artifact
    pub mods_yaml_name: String,
    /// Filename of the server mod list artifact
    pub server_mods_name: String,
    /// Base URL of the Modrinth API
    pub modrinth_api_base: String,
    /// Base URL of the Modrinth website, used to build project links
    pub modrinth_site_base: String,
    /// Host whose download URLs take the release-URL resolution path
    pub github_host: String,
    /// Mod names forced to `side = client` regardless of their manifest
    pub client_only_overrides: Vec<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ExportConfig {
    /// Path of the YAML mapping artifact under the given root
    pub fn mods_yaml_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.mods_yaml_name)
    }

    /// Path of the server mod list artifact under the given root
    pub fn server_mods_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.server_mods_name)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            client_dir_suffix: "_client".to_string(),
            manifest_suffix: ".pw.toml".to_string(),
            content_dirs: vec![
                "mods".to_string(),
                "shaderpacks".to_string(),
                "resourcepacks".to_string(),
            ],
            output_dir: PathBuf::from("sources"),
            mods_yaml_name: "mods.yaml".to_string(),
            server_mods_name: "server-mods.txt".to_string(),
            modrinth_api_base: "https://api.modrinth.com".to_string(),
            modrinth_site_base: "https://modrinth.com".to_string(),
            github_host: "github.com".to_string(),
            // mod-loading-screen declares side "both" but is client-only
            client_only_overrides: vec!["mod-loading-screen".to_string()],
            user_agent: "modlist/0.1.0".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_are_rooted() {
        let config = ExportConfig::default();
        let root = Path::new("/pack");
        assert_eq!(
            config.mods_yaml_path(root),
            PathBuf::from("/pack/sources/mods.yaml")
        );
        assert_eq!(
            config.server_mods_path(root),
            PathBuf::from("/pack/sources/server-mods.txt")
        );
    }

    #[test]
    fn content_dirs_keep_scan_order() {
        let config = ExportConfig::default();
        assert_eq!(config.content_dirs, ["mods", "shaderpacks", "resourcepacks"]);
    }
}
