use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A personal book catalog for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use (overrides config and SHELF_DATA_FILE)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Config file to read instead of the default shelf.toml
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all books
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a book
    #[command(alias = "a", display_order = 2)]
    Add(AddArgs),

    /// Edit a book; omitted fields keep their current value
    #[command(alias = "e", display_order = 3)]
    Edit(EditArgs),

    /// Remove a book
    #[command(alias = "rm", display_order = 4)]
    Remove {
        /// Exact title of the book
        title: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one book
    #[command(alias = "v", display_order = 5)]
    Show {
        /// Title of the book (case-insensitive)
        title: String,
    },

    /// Catalog statistics
    #[command(display_order = 6)]
    Stats,

    /// Write the catalog to disk as it is now
    #[command(display_order = 7)]
    Save,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub title: String,
    pub author: String,
    pub year: String,
    pub pages: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Exact current title of the book
    pub original: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    #[arg(long)]
    pub pages: Option<String>,
}
