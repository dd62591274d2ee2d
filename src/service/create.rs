use crate::error::{MobileFsError, Result};
use crate::service::paths;
use crate::storage::{EntryHandle, EntryKind, FileAccess};
use std::path::Path;
use tracing::{debug, error};

/// Create `path` under `base` one segment at a time, left to right.
///
/// Intermediate segments are always create-or-reuse; only the leaf honors
/// `fail_if_exists`. The first failing segment aborts the chain and its error
/// propagates unchanged; intermediates created before the failure remain.
pub(crate) async fn create_path(
    fs: &dyn FileAccess,
    base: &Path,
    path: &str,
    kind: EntryKind,
    fail_if_exists: bool,
) -> Result<EntryHandle> {
    let segments = paths::segments(path)?;
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(MobileFsError::invalid_path(path));
    };

    let mut dir = base.to_path_buf();
    for parent in parents {
        debug!("create dir {} in {}", parent, dir.display());
        let handle = match fs.create_dir(&dir, parent, true).await {
            Ok(handle) => handle,
            Err(e) => {
                error!("error creating directory {} in {}", parent, dir.display());
                return Err(e);
            }
        };
        dir = handle.path;
    }

    let replace = !fail_if_exists;
    match kind {
        EntryKind::Directory => {
            debug!("create dir {} in {}", leaf, dir.display());
            fs.create_dir(&dir, leaf, replace).await
        }
        EntryKind::File => {
            debug!("create file {} in {}", leaf, dir.display());
            fs.create_file(&dir, leaf, replace).await
        }
    }
}
