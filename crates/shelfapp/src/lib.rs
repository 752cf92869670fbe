//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book catalog library**: a small ordered list of
//! books, four operations on it (add, update, remove, statistics), and a JSON
//! file that mirrors it. The bundled `shelf` binary is one possible client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Client (the `shelf` CLI, or any other)                  │
//! │  - Collects fields, asks for confirmation, renders results  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalog store, dispatches to commands           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and mutation logic                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore over a StorageBackend (file or memory)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts
//! and never exits the process. Every failure is a [`error::ShelfError`] the
//! client turns into a notification.
//!
//! ## Threading
//!
//! Everything is synchronous and single-threaded. One `ShelfApi` owns the
//! catalog for the life of the process; each mutation is followed by one
//! synchronous save.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book` and `BookFields`
//! - [`config`]: Configuration loading
//! - [`init`]: Per-process context (where the catalog lives)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
