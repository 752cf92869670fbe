//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each operation
//! lives in its own submodule as a plain function over a [`CatalogStore`].
//!
//! ## Role and Responsibilities
//!
//! - Validate user-supplied fields
//! - Apply the mutation to the in-memory catalog, then persist it
//! - Return structured [`CmdResult`] values with affected books and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **User interaction**: no prompts or confirmations (the UI decides)
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Write-through
//!
//! Every mutating command calls [`CatalogStore::commit`] right after the
//! in-memory change succeeds. If the commit fails the change stays in memory
//! and the `Io` error is returned; nothing is rolled back.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a new book
//! - [`update`]: Edit an existing book
//! - [`remove`]: Remove a book
//! - [`stats`]: Aggregate statistics
//! - [`list`]: All books in catalog order
//! - [`show`]: One book by title
//! - [`save`]: Explicitly persist the current catalog
//! - [`helpers`]: Shared validation and lookup
//!
//! [`CatalogStore`]: crate::store::CatalogStore
//! [`CatalogStore::commit`]: crate::store::CatalogStore::commit

use crate::model::Book;
use serde::Serialize;

pub mod add;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod save;
pub mod show;
pub mod stats;
pub mod update;

pub use stats::{CatalogSummary, Statistics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub statistics: Option<Statistics>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }
}
