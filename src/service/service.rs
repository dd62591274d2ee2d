use crate::error::{MobileFsError, Result};
use crate::platform::{HostEnv, NativeHost};
use crate::service::format::{FileData, ReadFormat};
use crate::service::{create, paths, size};
use crate::storage::{EntryHandle, EntryKind, FileAccess, TokioFileAccess};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error};

/// App-private storage facade.
///
/// The platform storage root is resolved once on first use and memoized;
/// every relative-path operation is anchored at that root. External-file
/// operations take absolute paths and bypass root resolution.
pub struct FileService {
    host: Arc<dyn HostEnv>,
    fs: Arc<dyn FileAccess>,
    root: OnceCell<PathBuf>,
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileService {
    /// Service over the native host and tokio-backed file access
    pub fn new() -> Self {
        Self::with_backend(Arc::new(NativeHost::default()), Arc::new(TokioFileAccess))
    }

    /// Service over injected host and file-access collaborators
    pub fn with_backend(host: Arc<dyn HostEnv>, fs: Arc<dyn FileAccess>) -> Self {
        Self {
            host,
            fs,
            root: OnceCell::new(),
        }
    }

    /// Resolve and memoize the storage root.
    ///
    /// Concurrent callers share a single in-flight resolution. A failed
    /// resolution leaves the service uninitialized, so a later call retries
    /// once the host reports a supported OS.
    pub async fn init(&self) -> Result<&Path> {
        self.root
            .get_or_try_init(|| async {
                self.host.wait_ready().await?;
                let Some(os) = self.host.os() else {
                    error!("error getting device OS");
                    return Err(MobileFsError::PlatformUnsupported);
                };
                let root = self.host.storage_dir(os);
                debug!("fs initialized for {}: {}", os, root.display());
                Ok(root)
            })
            .await
            .map(|root| root.as_path())
    }

    /// Locate a file under the storage root
    pub async fn get_file(&self, path: &str) -> Result<EntryHandle> {
        let root = self.init().await?;
        paths::segments(path)?;
        debug!("get file: {}", path);
        log_fail("get_file", path, self.fs.check_file(root, path).await)
    }

    /// Locate a directory under the storage root
    pub async fn get_dir(&self, path: &str) -> Result<EntryHandle> {
        let root = self.init().await?;
        paths::segments(path)?;
        debug!("get directory: {}", path);
        log_fail("get_dir", path, self.fs.check_dir(root, path).await)
    }

    /// Create a directory under the root, creating missing ancestors.
    ///
    /// `fail_if_exists` governs only the leaf segment.
    pub async fn create_dir(&self, path: &str, fail_if_exists: bool) -> Result<EntryHandle> {
        let root = self.init().await?;
        create::create_path(
            self.fs.as_ref(),
            root,
            path,
            EntryKind::Directory,
            fail_if_exists,
        )
        .await
    }

    /// Create a file under the root, creating missing ancestor directories
    pub async fn create_file(&self, path: &str, fail_if_exists: bool) -> Result<EntryHandle> {
        let root = self.init().await?;
        create::create_path(self.fs.as_ref(), root, path, EntryKind::File, fail_if_exists).await
    }

    /// Remove a directory and all of its contents
    pub async fn remove_dir(&self, path: &str) -> Result<()> {
        let root = self.init().await?;
        paths::segments(path)?;
        debug!("remove directory: {}", path);
        log_fail(
            "remove_dir",
            path,
            self.fs.remove_recursively(root, path).await,
        )
    }

    /// Remove a file under the root
    pub async fn remove_file(&self, path: &str) -> Result<()> {
        let root = self.init().await?;
        paths::segments(path)?;
        debug!("remove file: {}", path);
        log_fail("remove_file", path, self.fs.remove_file(root, path).await)
    }

    /// Immediate entries of a directory, non-recursive
    pub async fn get_directory_contents(&self, path: &str) -> Result<Vec<EntryHandle>> {
        debug!("get contents of dir: {}", path);
        let dir = self.get_dir(path).await?;
        log_fail(
            "get_directory_contents",
            path,
            self.fs.list_dir(&dir.path).await,
        )
    }

    /// Total byte size of a directory tree
    pub async fn get_directory_size(&self, path: &str) -> Result<u64> {
        debug!("get size of dir: {}", path);
        let dir = self.get_dir(path).await?;
        log_fail(
            "get_directory_size",
            path,
            size::entry_size(self.fs.as_ref(), &dir).await,
        )
    }

    /// Byte size of a single file
    pub async fn get_file_size(&self, path: &str) -> Result<u64> {
        debug!("get size of file: {}", path);
        let file = self.get_file(path).await?;
        log_fail(
            "get_file_size",
            path,
            size::entry_size(self.fs.as_ref(), &file).await,
        )
    }

    /// Available bytes on device storage; independent of the storage root
    pub async fn calculate_free_space(&self) -> Result<u64> {
        self.fs.free_space().await
    }

    /// Decode percent-encoded characters in a file name
    pub fn normalize_file_name(&self, name: &str) -> String {
        paths::normalize_file_name(name)
    }

    /// Read a file under the root in the requested representation
    pub async fn read_file(&self, path: &str, format: ReadFormat) -> Result<FileData> {
        let root = self.init().await?;
        paths::segments(path)?;
        debug!("read file {} with format {:?}", path, format);
        let target = root.join(path);
        let bytes = log_fail("read_file", path, self.fs.read(&target).await)?;
        Ok(match format {
            ReadFormat::Text => FileData::Text(String::from_utf8_lossy(&bytes).into_owned()),
            ReadFormat::DataUrl => {
                let mime = mime_guess::from_path(&target).first_or_octet_stream();
                FileData::DataUrl(format!("data:{};base64,{}", mime, BASE64.encode(&bytes)))
            }
            ReadFormat::BinaryString => {
                FileData::Binary(bytes.iter().map(|&b| b as char).collect())
            }
            ReadFormat::ArrayBuffer => FileData::Buffer(Bytes::from(bytes)),
        })
    }

    /// Write data to a file under the root, replacing previous contents
    pub async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let root = self.init().await?;
        paths::segments(path)?;
        debug!("write file: {}", path);
        log_fail("write_file", path, self.fs.write(&root.join(path), data).await)
    }

    /// Locate a file by absolute path, outside the storage root
    pub async fn get_external_file(&self, full_path: &str) -> Result<EntryHandle> {
        debug!("get external file: {}", full_path);
        log_fail(
            "get_external_file",
            full_path,
            self.fs.check_file(Path::new(full_path), "").await,
        )
    }

    /// Remove a file by absolute path, outside the storage root
    pub async fn remove_external_file(&self, full_path: &str) -> Result<()> {
        let (dir, name) = paths::split_external(full_path)?;
        debug!("remove external file: {}", full_path);
        log_fail(
            "remove_external_file",
            full_path,
            self.fs.remove_file(Path::new(dir), name).await,
        )
    }
}

fn log_fail<T>(op: &'static str, path: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        error!("{} failed for {}: {}", op, path, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OsFamily;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::time::Duration;

    fn scratch_dir(tag: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "mobilefs_service_{}_{}_{}",
            tag,
            std::process::id(),
            n
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    struct TestHost {
        os: Mutex<Option<OsFamily>>,
        root: PathBuf,
        ready_waits: AtomicUsize,
    }

    impl TestHost {
        fn new(os: Option<OsFamily>, root: PathBuf) -> Arc<Self> {
            Arc::new(Self {
                os: Mutex::new(os),
                root,
                ready_waits: AtomicUsize::new(0),
            })
        }

        fn set_os(&self, os: OsFamily) {
            *self.os.lock().unwrap() = Some(os);
        }
    }

    #[async_trait]
    impl HostEnv for TestHost {
        async fn wait_ready(&self) -> Result<()> {
            self.ready_waits.fetch_add(1, Ordering::SeqCst);
            // widen the race window for the coalescing test
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(())
        }

        fn os(&self) -> Option<OsFamily> {
            *self.os.lock().unwrap()
        }

        fn storage_dir(&self, _os: OsFamily) -> PathBuf {
            self.root.clone()
        }
    }

    fn test_service(tag: &str) -> (FileService, Arc<TestHost>, PathBuf) {
        let root = scratch_dir(tag);
        let host = TestHost::new(Some(OsFamily::Android), root.clone());
        let service = FileService::with_backend(host.clone(), Arc::new(TokioFileAccess));
        (service, host, root)
    }

    #[tokio::test]
    async fn test_concurrent_init_shares_one_resolution() {
        let (service, host, root) = test_service("init");

        let results = futures_util::future::join_all((0..8).map(|_| service.init())).await;
        for result in results {
            assert_eq!(result.unwrap(), root.as_path());
        }
        assert_eq!(host.ready_waits.load(Ordering::SeqCst), 1);

        // memoized: no further readiness waits
        service.init().await.unwrap();
        assert_eq!(host.ready_waits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_init_is_retryable() {
        let root = scratch_dir("retry");
        let host = TestHost::new(None, root.clone());
        let service = FileService::with_backend(host.clone(), Arc::new(TokioFileAccess));

        let err = service.init().await.unwrap_err();
        assert!(matches!(err, MobileFsError::PlatformUnsupported));

        host.set_os(OsFamily::Ios);
        assert_eq!(service.init().await.unwrap(), root.as_path());
    }

    #[tokio::test]
    async fn test_create_then_get_directory() {
        let (service, _host, root) = test_service("create_get");

        let created = service.create_dir("a/b/c", false).await.unwrap();
        assert_eq!(created.path, root.join("a/b/c"));

        let found = service.get_dir("a/b/c").await.unwrap();
        assert_eq!(found.path, created.path);

        let err = service.get_file("a/b/missing.txt").await.unwrap_err();
        assert!(matches!(err, MobileFsError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_directory_contents_and_sizes() {
        let (service, _host, _root) = test_service("contents");

        service.create_dir("data", false).await.unwrap();
        service.create_file("data/a.bin", false).await.unwrap();
        service.write_file("data/a.bin", &[0u8; 10]).await.unwrap();
        service.create_file("data/sub/b.bin", false).await.unwrap();
        service.write_file("data/sub/b.bin", &[0u8; 7]).await.unwrap();

        let mut names: Vec<String> = service
            .get_directory_contents("data")
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        names.sort();
        assert_eq!(names, ["a.bin", "sub"]);

        assert_eq!(service.get_directory_size("data").await.unwrap(), 17);
        assert_eq!(service.get_file_size("data/a.bin").await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_remove_operations() {
        let (service, _host, root) = test_service("remove");

        service.create_file("tmp/junk.txt", false).await.unwrap();
        service.remove_file("tmp/junk.txt").await.unwrap();
        assert!(!root.join("tmp/junk.txt").exists());

        service.create_file("tmp/more/stuff.txt", false).await.unwrap();
        service.remove_dir("tmp").await.unwrap();
        assert!(!root.join("tmp").exists());
    }

    #[tokio::test]
    async fn test_read_file_text_and_data_url() {
        let (service, _host, _root) = test_service("read_text");

        service.create_file("note.txt", false).await.unwrap();
        service.write_file("note.txt", b"hi").await.unwrap();

        let text = service.read_file("note.txt", ReadFormat::Text).await.unwrap();
        assert_eq!(text, FileData::Text("hi".to_string()));

        let url = service
            .read_file("note.txt", ReadFormat::DataUrl)
            .await
            .unwrap();
        assert_eq!(url, FileData::DataUrl("data:text/plain;base64,aGk=".to_string()));
    }

    #[tokio::test]
    async fn test_read_file_binary_and_buffer() {
        let (service, _host, _root) = test_service("read_bin");

        service.create_file("blob.bin", false).await.unwrap();
        service.write_file("blob.bin", &[0xff, 0x00, 0x41]).await.unwrap();

        let binary = service
            .read_file("blob.bin", ReadFormat::BinaryString)
            .await
            .unwrap();
        assert_eq!(binary, FileData::Binary("\u{ff}\u{0}A".to_string()));

        let buffer = service
            .read_file("blob.bin", ReadFormat::ArrayBuffer)
            .await
            .unwrap();
        assert_eq!(buffer, FileData::Buffer(Bytes::from_static(&[0xff, 0x00, 0x41])));
    }

    #[tokio::test]
    async fn test_write_truncates_previous_contents() {
        let (service, _host, _root) = test_service("truncate");

        service.create_file("log.txt", false).await.unwrap();
        service.write_file("log.txt", b"a longer first payload").await.unwrap();
        service.write_file("log.txt", b"short").await.unwrap();

        let text = service.read_file("log.txt", ReadFormat::Text).await.unwrap();
        assert_eq!(text, FileData::Text("short".to_string()));
    }

    #[tokio::test]
    async fn test_external_file_operations_bypass_root() {
        let (service, _host, _root) = test_service("external");

        // lives outside the service root entirely
        let outside = scratch_dir("external_target");
        let file_path = outside.join("report.txt");
        std::fs::write(&file_path, b"data").unwrap();
        let full_path = file_path.display().to_string();

        let handle = service.get_external_file(&full_path).await.unwrap();
        assert_eq!(handle.path, file_path);

        service.remove_external_file(&full_path).await.unwrap();
        assert!(!file_path.exists());
        assert!(matches!(
            service.get_external_file(&full_path).await.unwrap_err(),
            MobileFsError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_relative_ops_reject_invalid_paths() {
        let (service, _host, _root) = test_service("invalid");

        assert!(matches!(
            service.get_file("").await.unwrap_err(),
            MobileFsError::InvalidPath { .. }
        ));
        assert!(matches!(
            service.create_dir("/abs", false).await.unwrap_err(),
            MobileFsError::InvalidPath { .. }
        ));
        assert!(matches!(
            service.write_file("dir/", b"x").await.unwrap_err(),
            MobileFsError::InvalidPath { .. }
        ));
    }

    #[tokio::test]
    async fn test_normalize_file_name_via_service() {
        let (service, _host, _root) = test_service("normalize");
        assert_eq!(service.normalize_file_name("a%20b.txt"), "a b.txt");
    }
}
