//! # Storage Layer
//!
//! The catalog is one JSON document holding every book, in catalog order. It is
//! read once when the store is opened and rewritten in full after every
//! mutation (write-through). There is no partial persistence, no journal and
//! no backup of the previous version.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: raw document I/O ("how"). Knows nothing
//!   about books, only reads and writes a string.
//! - [`catalog_store::CatalogStore`]: owns the in-memory collection and the
//!   encoding ("what"). Distinguishes a missing document (empty catalog) from
//!   a malformed one (`CorruptData`).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: a single file on disk, written atomically.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## File Format
//!
//! ```text
//! [
//!     {
//!         "titulo": "Dom Casmurro",
//!         "autor": "Machado de Assis",
//!         "ano": "1899",
//!         "paginas": "256"
//!     }
//! ]
//! ```

use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde::Serialize;

pub mod backend;
pub mod catalog_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use backend::StorageBackend;
pub use catalog_store::CatalogStore;

const INDENT: &[u8] = b"    ";

/// Serialize the catalog the way it is stored on disk: pretty-printed with a
/// four-space indent, non-ASCII text left as is.
pub fn encode_catalog(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books
        .serialize(&mut ser)
        .map_err(|e| ShelfError::Io(std::io::Error::other(e)))?;
    String::from_utf8(buf).map_err(|e| ShelfError::Io(std::io::Error::other(e)))
}

/// Parse a persisted catalog. Anything that is not a UTF-8 list of
/// four-string records is `CorruptData`.
pub fn decode_catalog(content: &[u8]) -> Result<Vec<Book>> {
    serde_json::from_slice(content).map_err(ShelfError::CorruptData)
}
