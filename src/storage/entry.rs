use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// Reference to a located file or directory.
///
/// Handles are transient: they describe where an entry was found at the time
/// of the call and are not kept in sync with the filesystem afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryHandle {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl EntryHandle {
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Metadata snapshot for a single entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryMetadata {
    pub size: u64,
    pub kind: EntryKind,
    pub modified: Option<DateTime<Utc>>,
}
