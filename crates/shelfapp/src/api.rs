//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for any UI client (the bundled CLI, a GUI, tests).
//!
//! `ShelfApi` owns the [`CatalogStore`], which owns the catalog: there is
//! exactly one in-process owner and no global state. Opening the API performs
//! the startup load; every mutating method writes through to storage.
//!
//! ## Load Warnings
//!
//! Opening never fails. If the stored catalog is corrupt or unreadable the
//! API starts with an empty catalog and keeps the cause in
//! [`ShelfApi::load_warning`]; the client must tell the user, since the next
//! mutation will overwrite the stored file. The warning is cleared by the
//! first successful write (any mutation or an explicit save).
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookFields};
use crate::store::fs_backend::FsBackend;
use crate::store::{CatalogStore, StorageBackend};
use std::path::PathBuf;

pub struct ShelfApi<B: StorageBackend> {
    store: CatalogStore<B>,
    load_warning: Option<ShelfError>,
}

impl ShelfApi<FsBackend> {
    /// Open the catalog stored in the JSON file at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::open(FsBackend::new(path))
    }
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn open(backend: B) -> Self {
        let (store, load_warning) = CatalogStore::open(backend);
        Self {
            store,
            load_warning,
        }
    }

    /// Why the catalog started empty, if loading failed and nothing has been
    /// written since.
    pub fn load_warning(&self) -> Option<&ShelfError> {
        self.load_warning.as_ref()
    }

    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    pub fn get_all(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_book(&self, title: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, title)
    }

    pub fn add_book(&mut self, fields: &BookFields) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.store, fields);
        self.written(result)
    }

    pub fn update_book(
        &mut self,
        original_title: &str,
        fields: &BookFields,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.store, original_title, fields);
        self.written(result)
    }

    /// Callers must have the user's confirmation before calling this.
    pub fn remove_book(&mut self, title: &str) -> Result<commands::CmdResult> {
        let result = commands::remove::run(&mut self.store, title);
        self.written(result)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        let result = commands::save::run(&self.store);
        self.written(result)
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &CatalogStore<B> {
        &self.store
    }

    // Ok means the catalog was committed, so the stored file is no longer
    // the one that failed to load.
    fn written(&mut self, result: Result<commands::CmdResult>) -> Result<commands::CmdResult> {
        if result.is_ok() {
            self.load_warning = None;
        }
        result
    }
}

pub use commands::{CatalogSummary, CmdMessage, CmdResult, MessageLevel, Statistics};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn api() -> ShelfApi<MemBackend> {
        ShelfApi::open(MemBackend::new())
    }

    #[test]
    fn add_dispatches_and_lists() {
        let mut api = api();
        api.add_book(&BookFields::new("A", "B", "2000", "10")).unwrap();
        let result = api.get_all().unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(api.books()[0].title, "A");
    }

    #[test]
    fn update_dispatches_with_original_title() {
        let mut api = api();
        api.add_book(&BookFields::new("A", "B", "2000", "10")).unwrap();
        let result = api
            .update_book("A", &BookFields::new("A2", "B", "2000", "10"))
            .unwrap();
        assert_eq!(result.affected_books[0].title, "A2");
        assert!(api.show_book("A").is_err());
        assert!(api.show_book("A2").is_ok());
    }

    #[test]
    fn remove_dispatches() {
        let mut api = api();
        api.add_book(&BookFields::new("A", "B", "2000", "10")).unwrap();
        api.remove_book("A").unwrap();
        assert!(api.books().is_empty());
    }

    #[test]
    fn statistics_dispatches() {
        let api = api();
        assert_eq!(api.statistics().unwrap().statistics, Some(Statistics::Empty));
    }

    #[test]
    fn corrupt_store_reports_warning_until_saved() {
        let mut api = ShelfApi::open(MemBackend::with_document("{{{"));
        assert!(matches!(api.load_warning(), Some(ShelfError::CorruptData(_))));
        assert!(api.books().is_empty());

        api.save().unwrap();
        assert!(api.load_warning().is_none());
    }

    #[test]
    fn first_successful_mutation_clears_load_warning() {
        let mut api = ShelfApi::open(MemBackend::with_document("not json"));
        assert!(api.load_warning().is_some());

        let err = api.add_book(&BookFields::new("", "B", "2000", "10"));
        assert!(err.is_err());
        assert!(api.load_warning().is_some());

        api.add_book(&BookFields::new("A", "B", "2000", "10")).unwrap();
        assert!(api.load_warning().is_none());
    }

    #[test]
    fn failed_write_keeps_load_warning() {
        let backend = MemBackend::with_document("not json");
        backend.set_simulate_write_error(true);
        let mut api = ShelfApi::open(backend);

        assert!(api.add_book(&BookFields::new("A", "B", "2000", "10")).is_err());
        assert!(matches!(api.load_warning(), Some(ShelfError::CorruptData(_))));
        assert!(api.remove_book("A").is_err());
        assert!(api.load_warning().is_some());
    }
}
