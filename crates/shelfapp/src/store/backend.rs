use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw catalog I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while CatalogStore handles the "what" (the books, encoding, write-through).
pub trait StorageBackend {
    /// Read the persisted document as raw bytes. Decoding (including UTF-8
    /// validation) belongs to the store.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the persisted document.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, content: &str) -> Result<()>;

    /// Where the document lives. For FsBackend this is the real path,
    /// for MemBackend a virtual one.
    fn location(&self) -> PathBuf;
}
