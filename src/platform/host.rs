use crate::error::Result;
use crate::platform::OsFamily;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Host environment abstraction: readiness, platform identity and the
/// per-platform storage-root convention. Kept behind a trait so tests can
/// stand in a fake host.
#[async_trait]
pub trait HostEnv: Send + Sync {
    /// Resolves once the host is ready for native file calls
    async fn wait_ready(&self) -> Result<()>;

    /// Report which OS family the app runs on, `None` if undetected
    fn os(&self) -> Option<OsFamily>;

    /// App-private storage root for the given OS family
    fn storage_dir(&self, os: OsFamily) -> PathBuf;
}

/// Default host backed by compile-time target detection.
///
/// `MOBILEFS_OS` overrides detection (useful on development machines that
/// are neither Android nor iOS).
#[derive(Clone)]
pub struct NativeHost {
    app_id: String,
}

impl NativeHost {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }
}

impl Default for NativeHost {
    fn default() -> Self {
        Self::new("mobilefs")
    }
}

#[async_trait]
impl HostEnv for NativeHost {
    async fn wait_ready(&self) -> Result<()> {
        // Native file APIs need no bring-up; process start is the signal.
        Ok(())
    }

    fn os(&self) -> Option<OsFamily> {
        if let Ok(value) = std::env::var("MOBILEFS_OS") {
            return match value.to_ascii_lowercase().as_str() {
                "android" => Some(OsFamily::Android),
                "ios" => Some(OsFamily::Ios),
                _ => None,
            };
        }
        if cfg!(target_os = "android") {
            Some(OsFamily::Android)
        } else if cfg!(target_os = "ios") {
            Some(OsFamily::Ios)
        } else {
            None
        }
    }

    fn storage_dir(&self, os: OsFamily) -> PathBuf {
        match os {
            // externalApplicationStorageDirectory convention
            OsFamily::Android => {
                let external = std::env::var("EXTERNAL_STORAGE")
                    .unwrap_or_else(|_| "/storage/emulated/0".to_string());
                Path::new(&external)
                    .join("Android/data")
                    .join(&self.app_id)
                    .join("files")
            }
            // app sandbox Documents directory
            OsFamily::Ios => {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/".to_string());
                Path::new(&home).join("Documents")
            }
        }
    }
}
