use crate::error::Result;
use crate::storage::entry::{EntryHandle, EntryMetadata};
use async_trait::async_trait;
use std::path::Path;

/// Native file-access abstraction for testability and flexibility.
///
/// Entry-addressed operations take a `(base, relative)` pair; an empty
/// relative path addresses `base` itself. Content operations take the full
/// path of an already-located entry.
#[async_trait]
pub trait FileAccess: Send + Sync {
    /// Locate a file, failing with `NotFound` if absent or not a file
    async fn check_file(&self, base: &Path, path: &str) -> Result<EntryHandle>;

    /// Locate a directory, failing with `NotFound` if absent or not a directory
    async fn check_dir(&self, base: &Path, path: &str) -> Result<EntryHandle>;

    /// Create a directory entry under `base`.
    ///
    /// `replace = true` reuses an existing directory; `replace = false` fails
    /// with `AlreadyExists` when the entry is present.
    async fn create_dir(&self, base: &Path, name: &str, replace: bool) -> Result<EntryHandle>;

    /// Create a file entry under `base`, same `replace` semantics as
    /// `create_dir`. Reusing an existing file does not truncate it.
    async fn create_file(&self, base: &Path, name: &str, replace: bool) -> Result<EntryHandle>;

    /// List the immediate children of a directory
    async fn list_dir(&self, dir: &Path) -> Result<Vec<EntryHandle>>;

    /// Get entry metadata (size, kind, modified time)
    async fn metadata(&self, path: &Path) -> Result<EntryMetadata>;

    /// Delete a file
    async fn remove_file(&self, base: &Path, path: &str) -> Result<()>;

    /// Delete a directory and everything beneath it
    async fn remove_recursively(&self, base: &Path, path: &str) -> Result<()>;

    /// Read entire file contents
    async fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write data to a file, truncating any previous contents
    async fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// Available bytes on the device storage
    async fn free_space(&self) -> Result<u64>;
}
