use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CatalogStore, StorageBackend};

/// Snapshot of every book, in catalog order.
pub fn run<B: StorageBackend>(store: &CatalogStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_books(store.books().to_vec());
    result.add_message(CmdMessage::info(format!("Total books: {}", store.len())));
    Ok(result)
}
