use crate::error::{MobileFsError, Result};
use crate::storage::entry::{EntryHandle, EntryKind, EntryMetadata};
use crate::storage::traits::FileAccess;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file access implementation using tokio::fs
#[derive(Clone, Default)]
pub struct TokioFileAccess;

fn join_rel(base: &Path, path: &str) -> PathBuf {
    if path.is_empty() {
        base.to_path_buf()
    } else {
        base.join(path)
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn map_io(op: &'static str, path: &Path, err: std::io::Error) -> MobileFsError {
    let display = path.display().to_string();
    match err.kind() {
        ErrorKind::NotFound => MobileFsError::not_found(display),
        ErrorKind::AlreadyExists => MobileFsError::already_exists(display),
        _ => MobileFsError::native(op, display, err),
    }
}

#[async_trait]
impl FileAccess for TokioFileAccess {
    async fn check_file(&self, base: &Path, path: &str) -> Result<EntryHandle> {
        let target = join_rel(base, path);
        let meta = tokio::fs::metadata(&target)
            .await
            .map_err(|e| map_io("check_file", &target, e))?;
        if !meta.is_file() {
            return Err(MobileFsError::not_found(target.display().to_string()));
        }
        Ok(EntryHandle::file(entry_name(&target), target))
    }

    async fn check_dir(&self, base: &Path, path: &str) -> Result<EntryHandle> {
        let target = join_rel(base, path);
        let meta = tokio::fs::metadata(&target)
            .await
            .map_err(|e| map_io("check_dir", &target, e))?;
        if !meta.is_dir() {
            return Err(MobileFsError::not_found(target.display().to_string()));
        }
        Ok(EntryHandle::directory(entry_name(&target), target))
    }

    async fn create_dir(&self, base: &Path, name: &str, replace: bool) -> Result<EntryHandle> {
        let target = join_rel(base, name);
        match tokio::fs::create_dir(&target).await {
            Ok(()) => Ok(EntryHandle::directory(entry_name(&target), target)),
            // reuse only if the existing entry really is a directory
            Err(e) if e.kind() == ErrorKind::AlreadyExists && replace => {
                self.check_dir(&target, "").await
            }
            Err(e) => Err(map_io("create_dir", &target, e)),
        }
    }

    async fn create_file(&self, base: &Path, name: &str, replace: bool) -> Result<EntryHandle> {
        let target = join_rel(base, name);
        let mut options = tokio::fs::OpenOptions::new();
        options.write(true);
        if replace {
            options.create(true);
        } else {
            options.create_new(true);
        }
        options
            .open(&target)
            .await
            .map_err(|e| map_io("create_file", &target, e))?;
        Ok(EntryHandle::file(entry_name(&target), target))
    }

    async fn list_dir(&self, dir: &Path) -> Result<Vec<EntryHandle>> {
        let mut reader = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| map_io("list_dir", dir, e))?;
        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| map_io("list_dir", dir, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| map_io("list_dir", &entry.path(), e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let handle = if file_type.is_dir() {
                EntryHandle::directory(name, entry.path())
            } else {
                EntryHandle::file(name, entry.path())
            };
            entries.push(handle);
        }
        Ok(entries)
    }

    async fn metadata(&self, path: &Path) -> Result<EntryMetadata> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| map_io("metadata", path, e))?;
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Ok(EntryMetadata {
            size: meta.len(),
            kind,
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
        })
    }

    async fn remove_file(&self, base: &Path, path: &str) -> Result<()> {
        let target = join_rel(base, path);
        tokio::fs::remove_file(&target)
            .await
            .map_err(|e| map_io("remove_file", &target, e))
    }

    async fn remove_recursively(&self, base: &Path, path: &str) -> Result<()> {
        let target = join_rel(base, path);
        tokio::fs::remove_dir_all(&target)
            .await
            .map_err(|e| map_io("remove_recursively", &target, e))
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| map_io("read", path, e))
    }

    async fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        tokio::fs::write(path, data)
            .await
            .map_err(|e| map_io("write", path, e))
    }

    #[cfg(unix)]
    async fn free_space(&self) -> Result<u64> {
        let handle = tokio::task::spawn_blocking(|| unsafe {
            let mut stats: libc::statvfs = std::mem::zeroed();
            if libc::statvfs(c"/".as_ptr(), &mut stats) != 0 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(stats.f_bavail as u64 * stats.f_frsize as u64)
        });
        match handle.await {
            Ok(Ok(bytes)) => Ok(bytes),
            Ok(Err(e)) => Err(MobileFsError::native("free_space", "/", e)),
            Err(e) => Err(MobileFsError::native(
                "free_space",
                "/",
                std::io::Error::other(e),
            )),
        }
    }

    #[cfg(not(unix))]
    async fn free_space(&self) -> Result<u64> {
        Err(MobileFsError::PlatformUnsupported)
    }
}
