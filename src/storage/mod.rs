pub mod entry;
pub mod tokio_fs;
pub mod traits;

pub use entry::{EntryHandle, EntryKind, EntryMetadata};
pub use tokio_fs::TokioFileAccess;
pub use traits::FileAccess;
