use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// `year` and `pages` are kept as the text the user typed so a catalog file
/// round-trips byte-for-byte. The serialized keys match the on-disk format
/// (`titulo`, `autor`, `ano`, `paginas`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "ano")]
    pub year: String,
    #[serde(rename = "paginas")]
    pub pages: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        pages: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            pages: pages.into(),
        }
    }

    /// Case-insensitive title comparison used for the uniqueness invariant.
    pub fn title_matches(&self, title: &str) -> bool {
        same_title(&self.title, title)
    }
}

/// The four user-supplied fields of a book, as entered.
///
/// UI clients build one of these from their form/arguments and hand it to the
/// add and update commands, which trim and validate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: String,
    pub pages: String,
}

impl BookFields {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        pages: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            pages: pages.into(),
        }
    }

    /// Whitespace-trimmed copy of every field.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            year: self.year.trim().to_string(),
            pages: self.pages.trim().to_string(),
        }
    }

    pub fn into_book(self) -> Book {
        Book {
            title: self.title,
            author: self.author,
            year: self.year,
            pages: self.pages,
        }
    }
}

impl From<&Book> for BookFields {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.clone(),
            pages: book.pages.clone(),
        }
    }
}

pub fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// True when `text` is non-empty and made only of ASCII digits.
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_catalog_keys() {
        let book = Book::new("Dom Casmurro", "Machado de Assis", "1899", "256");
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["titulo"], "Dom Casmurro");
        assert_eq!(json["autor"], "Machado de Assis");
        assert_eq!(json["ano"], "1899");
        assert_eq!(json["paginas"], "256");
    }

    #[test]
    fn numeric_fields_must_be_strings() {
        let raw = r#"{"titulo": "A", "autor": "B", "ano": 1999, "paginas": "10"}"#;
        assert!(serde_json::from_str::<Book>(raw).is_err());
    }

    #[test]
    fn title_match_ignores_case() {
        let book = Book::new("O Cortiço", "Aluísio Azevedo", "1890", "300");
        assert!(book.title_matches("o cortiço"));
        assert!(book.title_matches("O CORTIÇO"));
        assert!(!book.title_matches("O Cortico"));
    }

    #[test]
    fn digit_check() {
        assert!(is_digits("2005"));
        assert!(!is_digits(""));
        assert!(!is_digits("-1"));
        assert!(!is_digits("12a"));
        assert!(!is_digits("١٢"));
    }

    #[test]
    fn trims_every_field() {
        let fields = BookFields::new("  Title ", "\tAuthor", "2000 ", " 12 ").trimmed();
        assert_eq!(fields, BookFields::new("Title", "Author", "2000", "12"));
    }
}
