use thiserror::Error;

/// Reasons user-supplied book fields are rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field")]
    MissingField,

    #[error("year not numeric")]
    YearNotNumeric,

    #[error("pages not numeric")]
    PagesNotNumeric,
}

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("A book titled \"{0}\" is already in the catalog")]
    DuplicateTitle(String),

    #[error("{}", not_found_message(.0))]
    NotFound(String),

    #[error("Catalog file is corrupt: {0}")]
    CorruptData(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

fn not_found_message(title: &str) -> String {
    if title.is_empty() {
        "No book selected".to_string()
    } else {
        format!("Book not found: {}", title)
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
