//! Prelude module for convenient imports
//!
//! Use `use mobilefs_rs::prelude::*;` to import commonly used types

// Service
pub use crate::service::{FileData, FileService, ReadFormat, normalize_file_name};

// Platform
pub use crate::platform::{HostEnv, NativeHost, OsFamily};

// Storage
pub use crate::storage::{EntryHandle, EntryKind, EntryMetadata, FileAccess, TokioFileAccess};

// Error handling
pub use crate::error::{MobileFsError, Result};
