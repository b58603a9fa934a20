//! Core types shared across the export pipeline

pub mod error;

pub use error::{ExportError, FileOperation, Result};

use serde::{Deserialize, Serialize, Serializer};

/// Deployment target of a mod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Client,
    Server,
    Both,
    Unknown,
}

impl Side {
    /// Parse a manifest `side` value; anything unrecognized maps to `Unknown`
    pub fn parse(value: &str) -> Self {
        match value {
            "client" => Side::Client,
            "server" => Side::Server,
            "both" => Side::Both,
            _ => Side::Unknown,
        }
    }

    /// Whether a mod with this side belongs in the server mod list
    pub fn is_server_side(self) -> bool {
        matches!(self, Side::Server | Side::Both)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Client => write!(f, "client"),
            Side::Server => write!(f, "server"),
            Side::Both => write!(f, "both"),
            Side::Unknown => write!(f, "unknown"),
        }
    }
}

/// One resolved mod as it appears in the YAML mapping.
///
/// `project_id` is present exactly for registry-resolved entries; entries
/// resolved from a release URL carry only the link and version tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModEntry {
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub version_id: String,
    pub side: Side,
}

/// Ordered mapping from mod name to resolved entry.
///
/// Insertion order is discovery order and is preserved through
/// serialization; inserting an existing name replaces its entry in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModList {
    entries: Vec<(String, ModEntry)>,
}

impl ModList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, entry: ModEntry) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((name, entry)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ModEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Names of all entries whose side is `server` or `both`, in list order
    pub fn server_mod_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.side.is_server_side())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl Serialize for ModList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(name, entry)| (name, entry)))
    }
}
