use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{same_title, BookFields};
use crate::store::{CatalogStore, StorageBackend};
use tracing::debug;

use super::helpers::{position_exact, title_taken, validate_fields};

/// Replace the fields of the book currently titled `original_title`.
///
/// `original_title` is matched exactly; an empty one means nothing was
/// selected. Year and pages get the same digit checks as [`add`](super::add).
pub fn run<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    original_title: &str,
    fields: &BookFields,
) -> Result<CmdResult> {
    if original_title.is_empty() {
        return Err(ShelfError::NotFound(String::new()));
    }

    let fields = validate_fields(fields)?;

    if !same_title(&fields.title, original_title) && title_taken(store.books(), &fields.title) {
        return Err(ShelfError::DuplicateTitle(fields.title));
    }

    let pos = position_exact(store.books(), original_title)
        .ok_or_else(|| ShelfError::NotFound(original_title.to_string()))?;

    let book = fields.into_book();
    store.books_mut()[pos] = book.clone();
    debug!(from = %original_title, to = %book.title, "book updated");
    store.commit()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book updated: {}", book.title)));
    result.affected_books.push(book);
    Ok(result)
}
