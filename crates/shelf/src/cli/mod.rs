//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! It plays the part of the catalog's presentation layer: it collects the
//! four book fields, obtains confirmation before a removal, and turns every
//! result or error into a notification.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments lists the catalog.
//!
//! ## Removal Needs Acknowledgment
//!
//! `shelf remove <title>` asks `[y/N]` on the terminal. Without a terminal it
//! refuses unless `--yes` is given. The library never removes on its own.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, dispatch and per-command handlers
//! - `render`: output formatting (tables, statistics, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
