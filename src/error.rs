use thiserror::Error;

/// Errors that can occur when using the storage service
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MobileFsError {
    // ============================================================================
    // I/O and System Errors
    // ============================================================================
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("{op} failed for {path}: {source}")]
    Native {
        op: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============================================================================
    // Platform Errors
    // ============================================================================
    #[error("platform is not supported or could not be detected")]
    PlatformUnsupported,

    // ============================================================================
    // Entry Errors
    // ============================================================================
    #[error("entry already exists: {path}")]
    AlreadyExists { path: String },

    #[error("entry not found: {path}")]
    NotFound { path: String },

    #[error("invalid path: {message}")]
    InvalidPath { message: String },
}

impl MobileFsError {
    /// Create an already-exists error for a path
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a not-found error for a path
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an invalid-path error with a message
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: msg.into(),
        }
    }

    /// Wrap a platform I/O failure with operation and path context
    pub fn native(op: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Native {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MobileFsError>;
