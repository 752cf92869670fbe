use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::{CatalogStore, StorageBackend};
use tracing::debug;

/// Removes every book titled exactly `title`.
///
/// **Important**: This function does NOT prompt for confirmation. The UI
/// layer must obtain the user's acknowledgment before calling it.
pub fn run<B: StorageBackend>(store: &mut CatalogStore<B>, title: &str) -> Result<CmdResult> {
    if title.is_empty() {
        return Err(ShelfError::NotFound(String::new()));
    }

    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(store.books_mut())
        .into_iter()
        .partition(|b| b.title == title);
    *store.books_mut() = kept;

    if removed.is_empty() {
        return Err(ShelfError::NotFound(title.to_string()));
    }

    debug!(title = %title, count = removed.len(), "book removed");
    store.commit()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book removed: {}", title)));
    Ok(result.with_affected_books(removed))
}
