//! GitHub release URL resolution
//!
//! A release download URL looks like
//! `https://github.com/<owner>/<repo>/releases/download/<tag>/<asset>`.
//! The owner and repository are the two segments before `releases`, the
//! version tag is the segment after `download`. No network access.

use url::Url;

use crate::exporter::core::{ExportError, Result};

/// A download URL resolved to its repository and release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSource {
    pub owner: String,
    pub repo: String,
    pub tag: String,
}

/// Whether `download_url` is hosted on the given host (or a subdomain of it)
pub fn is_release_host(download_url: &str, host: &str) -> bool {
    let Ok(url) = Url::parse(download_url) else {
        return false;
    };
    match url.host_str() {
        Some(url_host) => {
            url_host == host || url_host.ends_with(&format!(".{host}"))
        }
        None => false,
    }
}

impl GithubSource {
    /// Parse a release download URL into its owner, repo and tag
    pub fn parse(download_url: &str) -> Result<Self> {
        let url = Url::parse(download_url).map_err(|e| ExportError::ReleaseUrl {
            url: download_url.to_string(),
            reason: e.to_string(),
        })?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|part| !part.is_empty()).collect())
            .unwrap_or_default();

        let structural_error = |reason: &str| ExportError::ReleaseUrl {
            url: download_url.to_string(),
            reason: reason.to_string(),
        };

        let releases = segments
            .iter()
            .position(|s| *s == "releases")
            .ok_or_else(|| structural_error("no 'releases' path segment"))?;
        let download = segments
            .iter()
            .position(|s| *s == "download")
            .ok_or_else(|| structural_error("no 'download' path segment"))?;

        if releases < 2 {
            return Err(structural_error("no owner/repo segments before 'releases'"));
        }
        let tag = segments
            .get(download + 1)
            .ok_or_else(|| structural_error("no tag segment after 'download'"))?;

        Ok(Self {
            owner: segments[releases - 2].to_string(),
            repo: segments[releases - 1].to_string(),
            tag: (*tag).to_string(),
        })
    }

    /// Human-readable description for logging
    pub fn description(&self) -> String {
        format!("GitHub release {}/{} @ {}", self.owner, self.repo, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_standard_release_url() {
        let source = GithubSource::parse(
            "https://github.com/acme/widget/releases/download/v2.1/widget.jar",
        )
        .unwrap();

        assert_eq!(source.owner, "acme");
        assert_eq!(source.repo, "widget");
        assert_eq!(source.tag, "v2.1");
    }

    #[test]
    fn url_without_release_segments_is_rejected() {
        let err =
            GithubSource::parse("https://github.com/acme/widget/raw/main/widget.jar").unwrap_err();
        assert!(matches!(err, ExportError::ReleaseUrl { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn url_with_releases_but_no_download_is_rejected() {
        let err = GithubSource::parse("https://github.com/acme/widget/releases/tag/v2.1")
            .unwrap_err();
        assert!(matches!(err, ExportError::ReleaseUrl { .. }));
    }

    #[test]
    fn truncated_url_missing_the_tag_is_rejected() {
        let err =
            GithubSource::parse("https://github.com/acme/widget/releases/download").unwrap_err();
        assert!(matches!(err, ExportError::ReleaseUrl { .. }));
    }

    #[test]
    fn owner_and_repo_are_taken_relative_to_the_releases_segment() {
        // unusual but well-formed: extra leading segment
        let source = GithubSource::parse(
            "https://github.com/mirror/acme/widget/releases/download/v1/x.jar",
        )
        .unwrap();
        assert_eq!(source.owner, "acme");
        assert_eq!(source.repo, "widget");
        assert_eq!(source.tag, "v1");
    }

    #[test]
    fn host_check_matches_exact_host_and_subdomains() {
        assert!(is_release_host(
            "https://github.com/acme/widget/releases/download/v2.1/widget.jar",
            "github.com"
        ));
        assert!(is_release_host(
            "https://objects.github.com/some/asset",
            "github.com"
        ));
        assert!(!is_release_host(
            "https://cdn.modrinth.com/data/abc/widget.jar",
            "github.com"
        ));
        assert!(!is_release_host(
            "https://notgithub.com/acme/widget.jar",
            "github.com"
        ));
        assert!(!is_release_host("", "github.com"));
        assert!(!is_release_host("not a url", "github.com"));
    }
}
