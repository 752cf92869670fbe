use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted document (which may be malformed).
    pub fn with_document(content: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(content.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Enable read error simulation for testing degraded loads.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// The currently persisted document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        if *self.simulate_read_error.borrow() {
            return Err(ShelfError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Simulated read error",
            )));
        }
        Ok(self.document.borrow().clone().map(String::into_bytes))
    }

    fn write(&self, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Io(io::Error::other("Simulated write error")));
        }
        *self.document.borrow_mut() = Some(content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://catalog.json")
    }
}
