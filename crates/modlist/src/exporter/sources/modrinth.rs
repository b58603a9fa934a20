//! Modrinth registry lookup
//!
//! Resolves a project id to its public slug via one `GET /v2/project/{id}`
//! call, so entries can link to the project page instead of a CDN URL.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::exporter::config::ExportConfig;
use crate::exporter::core::{ExportError, Result};

/// A record resolved through the registry: both ids from the manifest plus
/// the slug the registry answered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModrinthSource {
    pub project_id: String,
    pub version_id: String,
    pub slug: String,
}

impl ModrinthSource {
    /// Human-readable description for logging
    pub fn description(&self) -> String {
        format!("Modrinth project {} ({})", self.slug, self.project_id)
    }
}

/// Subset of the project response the exporter needs
#[derive(Debug, Clone, Deserialize)]
struct ProjectResponse {
    slug: String,
}

/// Minimal Modrinth API client
#[derive(Debug, Clone)]
pub struct ModrinthApi {
    client: Client,
    base_url: String,
}

impl ModrinthApi {
    /// Create a client with the configured user agent, timeout and API base
    pub fn new(config: &ExportConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExportError::HttpClient { source: e })?;

        Ok(Self {
            client,
            base_url: config.modrinth_api_base.clone(),
        })
    }

    /// Point the client at a different API base (used by tests)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up the public slug of a project
    pub async fn project_slug(&self, project_id: &str) -> Result<String> {
        let url = format!("{}/v2/project/{}", self.base_url, project_id);
        debug!("looking up project: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ExportError::Http {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ExportError::RegistryStatus {
                url,
                status: response.status(),
            });
        }

        let body = response.text().await.map_err(|e| ExportError::Http {
            url: url.clone(),
            source: e,
        })?;

        let project: ProjectResponse =
            serde_json::from_str(&body).map_err(|e| ExportError::RegistryBody {
                url,
                source: e,
            })?;

        debug!("project {} has slug '{}'", project_id, project.slug);
        Ok(project.slug)
    }
}
