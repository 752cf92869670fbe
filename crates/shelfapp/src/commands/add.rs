use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::BookFields;
use crate::store::{CatalogStore, StorageBackend};
use tracing::debug;

use super::helpers::{title_taken, validate_fields};

pub fn run<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    fields: &BookFields,
) -> Result<CmdResult> {
    let fields = validate_fields(fields)?;

    if title_taken(store.books(), &fields.title) {
        return Err(ShelfError::DuplicateTitle(fields.title));
    }

    let book = fields.into_book();
    store.books_mut().push(book.clone());
    debug!(title = %book.title, "book added");
    store.commit()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book added: {}", book.title)));
    result.affected_books.push(book);
    Ok(result)
}
