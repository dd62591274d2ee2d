pub mod error;
pub mod platform;
pub mod prelude;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use error::{MobileFsError, Result};
pub use platform::{HostEnv, NativeHost, OsFamily};
pub use service::{FileData, FileService, ReadFormat, normalize_file_name};
pub use storage::{EntryHandle, EntryKind, EntryMetadata, FileAccess, TokioFileAccess};

#[cfg(feature = "cli")]
pub mod cli;
