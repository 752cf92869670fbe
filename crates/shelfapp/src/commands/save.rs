use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CatalogStore, StorageBackend};

/// Persist the catalog as it is in memory right now.
pub fn run<B: StorageBackend>(store: &CatalogStore<B>) -> Result<CmdResult> {
    store.commit()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalog saved ({} books) to {}",
        store.len(),
        store.location().display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::mem_backend::MemBackend;
    use crate::store::CatalogStore;

    #[test]
    fn overwrites_corrupt_document_with_current_catalog() {
        let (store, warning) = CatalogStore::open(MemBackend::with_document("garbage"));
        assert!(warning.is_some());

        run(&store).unwrap();
        assert_eq!(store.backend().document().unwrap(), "[]");
    }

    #[test]
    fn reports_write_failure() {
        let (store, _) = CatalogStore::open(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        assert!(matches!(run(&store), Err(ShelfError::Io(_))));
    }
}
