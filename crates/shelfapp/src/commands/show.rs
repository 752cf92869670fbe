use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::store::{CatalogStore, StorageBackend};

use super::helpers::find_book;

/// Fetch one book's current values, e.g. to pre-fill an edit.
pub fn run<B: StorageBackend>(store: &CatalogStore<B>, title: &str) -> Result<CmdResult> {
    let book = find_book(store.books(), title)
        .ok_or_else(|| ShelfError::NotFound(title.to_string()))?;
    Ok(CmdResult::default().with_listed_books(vec![book.clone()]))
}
