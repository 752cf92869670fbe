use super::catalog_store::CatalogStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = CatalogStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        CatalogStore::open(MemBackend::new()).0
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::Book;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, title: &str, author: &str, year: &str, pages: &str) -> Self {
            self.store
                .books_mut()
                .push(Book::new(title, author, year, pages));
            self.store.commit().expect("fixture commit");
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    format!("{}", 1990 + i),
                    format!("{}", 100 + i * 10),
                );
                self.store.books_mut().push(book);
            }
            self.store.commit().expect("fixture commit");
            self
        }
    }
}
