use crate::error::Result;
use crate::storage::{EntryHandle, EntryKind, FileAccess};
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, try_join_all};

/// Total byte size of an entry.
///
/// Directories fan out over their children and join all results; a failing
/// child fails the whole computation, never a partial sum.
pub(crate) fn entry_size<'a>(
    fs: &'a dyn FileAccess,
    entry: &'a EntryHandle,
) -> BoxFuture<'a, Result<u64>> {
    async move {
        match entry.kind {
            EntryKind::File => Ok(fs.metadata(&entry.path).await?.size),
            EntryKind::Directory => {
                let children = fs.list_dir(&entry.path).await?;
                let sizes =
                    try_join_all(children.iter().map(|child| entry_size(fs, child))).await?;
                Ok(sizes.into_iter().sum())
            }
        }
    }
    .boxed()
}
