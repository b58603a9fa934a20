//! Error types for the export pipeline with context about where they occurred

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while exporting a client directory
#[derive(Error, Debug)]
pub enum ExportError {
    /// No `*_client` directory under the scanned root
    #[error("no directory matching '*{suffix}' found under '{root}'")]
    ClientDirNotFound { root: PathBuf, suffix: String },

    /// File system I/O errors with file context
    #[error("file operation failed on '{path}' while {operation}")]
    FileSystem {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    /// A manifest file could not be read
    #[error("failed to read manifest '{path}'")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest file was not valid TOML or did not match the expected shape
    #[error("failed to parse manifest '{path}'")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A GitHub download URL did not have the expected release path shape
    #[error("could not extract release info from '{url}': {reason}")]
    ReleaseUrl { url: String, reason: String },

    /// A registry-path record is missing its project or version id
    #[error("manifest '{name}' has no Modrinth project/version ids")]
    MissingRegistryIds { name: String },

    /// Failed to construct the HTTP client
    #[error("failed to build HTTP client")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    /// Transport-level failure talking to the registry
    #[error("HTTP request to '{url}' failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The registry answered with a non-success status
    #[error("registry returned status {status} for '{url}'")]
    RegistryStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The registry response body could not be decoded
    #[error("could not decode registry response from '{url}'")]
    RegistryBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The assembled mod list could not be serialized
    #[error("failed to serialize mod list")]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },
}

/// Types of file operations for error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    ReadDir,
    Write,
    CreateDir,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::ReadDir => write!(f, "listing"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::CreateDir => write!(f, "creating directory"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Whether this error aborts the whole run.
    ///
    /// Fatal errors occur outside the per-manifest boundary: the client
    /// directory scan, output serialization and output writes. Everything
    /// else fails a single manifest, which is logged and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExportError::ClientDirNotFound { .. }
                | ExportError::FileSystem { .. }
                | ExportError::HttpClient { .. }
                | ExportError::Serialize { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ExportError::ClientDirNotFound { .. } => "discovery",
            ExportError::FileSystem { .. } => "file_system",
            ExportError::ManifestRead { .. } => "manifest_read",
            ExportError::ManifestParse { .. } => "manifest_parse",
            ExportError::ReleaseUrl { .. } => "release_url",
            ExportError::MissingRegistryIds { .. } => "missing_registry_ids",
            ExportError::HttpClient { .. } => "http_client",
            ExportError::Http { .. } => "http_request",
            ExportError::RegistryStatus { .. } => "registry_status",
            ExportError::RegistryBody { .. } => "registry_body",
            ExportError::Serialize { .. } => "serialize",
        }
    }
}
