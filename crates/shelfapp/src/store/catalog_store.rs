use super::backend::StorageBackend;
use super::{decode_catalog, encode_catalog};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::path::PathBuf;
use tracing::{debug, warn};

/// The single owner of the catalog.
///
/// Holds the ordered collection in memory and writes it through to the
/// backend after every mutation. The in-memory collection is the source of
/// truth: a failed [`commit`](Self::commit) does not roll anything back.
pub struct CatalogStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    books: Vec<Book>,
}

impl<B: StorageBackend> CatalogStore<B> {
    /// Open the catalog, loading whatever the backend holds.
    ///
    /// Never fails: a corrupt or unreadable document yields an empty catalog
    /// plus the error that caused it, so the caller can tell the user and
    /// keep going. A missing document is simply an empty catalog.
    pub fn open(backend: B) -> (Self, Option<ShelfError>) {
        match load(&backend) {
            Ok(books) => (Self { backend, books }, None),
            Err(e) => {
                warn!(
                    location = %backend.location().display(),
                    error = %e,
                    "catalog could not be loaded, starting empty"
                );
                (
                    Self {
                        backend,
                        books: Vec::new(),
                    },
                    Some(e),
                )
            }
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub(crate) fn books_mut(&mut self) -> &mut Vec<Book> {
        &mut self.books
    }

    /// Persist the full collection, overwriting the stored document.
    pub fn commit(&self) -> Result<()> {
        let content = encode_catalog(&self.books)?;
        self.backend.write(&content)?;
        debug!(
            location = %self.backend.location().display(),
            books = self.books.len(),
            "catalog saved"
        );
        Ok(())
    }

    /// Replace the in-memory collection with what the backend holds.
    /// On error the in-memory collection is left untouched.
    #[cfg(test)]
    pub fn reload(&mut self) -> Result<()> {
        self.books = load(&self.backend)?;
        Ok(())
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Read and decode the persisted catalog. Missing document means empty.
pub fn load<B: StorageBackend>(backend: &B) -> Result<Vec<Book>> {
    match backend.read()? {
        None => {
            debug!(location = %backend.location().display(), "no catalog yet");
            Ok(Vec::new())
        }
        Some(content) => {
            let books = decode_catalog(&content)?;
            debug!(
                location = %backend.location().display(),
                books = books.len(),
                "catalog loaded"
            );
            Ok(books)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn missing_document_opens_empty_without_warning() {
        let (store, warning) = CatalogStore::open(MemBackend::new());
        assert!(store.is_empty());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_document_opens_empty_with_warning() {
        let (store, warning) = CatalogStore::open(MemBackend::with_document("[{oops"));
        assert!(store.is_empty());
        assert!(matches!(warning, Some(ShelfError::CorruptData(_))));
    }

    #[test]
    fn unreadable_document_opens_empty_with_io_warning() {
        let backend = MemBackend::with_document("[]");
        backend.set_simulate_read_error(true);
        let (store, warning) = CatalogStore::open(backend);
        assert!(store.is_empty());
        assert!(matches!(warning, Some(ShelfError::Io(_))));
    }

    #[test]
    fn commit_then_reload_round_trips() {
        let (mut store, _) = CatalogStore::open(MemBackend::new());
        store
            .books_mut()
            .push(Book::new("Macunaíma", "Mário de Andrade", "1928", "180"));
        store
            .books_mut()
            .push(Book::new("Vidas Secas", "Graciliano Ramos", "1938", "176"));
        store.commit().unwrap();

        let before = store.books().to_vec();
        store.reload().unwrap();
        assert_eq!(store.books(), before.as_slice());
    }

    #[test]
    fn failed_commit_keeps_memory() {
        let (mut store, _) = CatalogStore::open(MemBackend::new());
        store.backend.set_simulate_write_error(true);
        store.books_mut().push(Book::new("A", "B", "2000", "1"));

        assert!(matches!(store.commit(), Err(ShelfError::Io(_))));
        assert_eq!(store.len(), 1);
        assert!(store.backend().document().is_none());
    }

    #[test]
    fn failed_reload_keeps_memory() {
        let (mut store, _) = CatalogStore::open(MemBackend::new());
        store.books_mut().push(Book::new("A", "B", "2000", "1"));
        store.commit().unwrap();
        store.backend.set_simulate_read_error(true);

        assert!(store.reload().is_err());
        assert_eq!(store.len(), 1);
    }
}
