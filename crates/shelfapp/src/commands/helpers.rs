use crate::error::{Result, ValidationError};
use crate::model::{is_digits, same_title, Book, BookFields};

/// Trim and validate user input for a book.
///
/// Checks run in a fixed order so the first problem reported is stable:
/// presence of all four fields, then year, then pages.
pub fn validate_fields(fields: &BookFields) -> Result<BookFields> {
    let fields = fields.trimmed();

    if fields.title.is_empty()
        || fields.author.is_empty()
        || fields.year.is_empty()
        || fields.pages.is_empty()
    {
        return Err(ValidationError::MissingField.into());
    }
    if !is_digits(&fields.year) {
        return Err(ValidationError::YearNotNumeric.into());
    }
    if !is_digits(&fields.pages) {
        return Err(ValidationError::PagesNotNumeric.into());
    }

    Ok(fields)
}

/// True if any book already uses `title`, ignoring case.
pub fn title_taken(books: &[Book], title: &str) -> bool {
    books.iter().any(|b| b.title_matches(title))
}

/// Position of the first book whose title is exactly `title`.
pub fn position_exact(books: &[Book], title: &str) -> Option<usize> {
    books.iter().position(|b| b.title == title)
}

/// Exact match first, then the first case-insensitive one.
pub fn find_book<'a>(books: &'a [Book], title: &str) -> Option<&'a Book> {
    books
        .iter()
        .find(|b| b.title == title)
        .or_else(|| books.iter().find(|b| same_title(&b.title, title)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;

    fn validation_of(fields: BookFields) -> Option<ValidationError> {
        match validate_fields(&fields) {
            Ok(_) => None,
            Err(ShelfError::Validation(v)) => Some(v),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(
            validation_of(BookFields::new("  ", "A", "2000", "10")),
            Some(ValidationError::MissingField)
        );
        assert_eq!(
            validation_of(BookFields::new("T", "A", "2000", "\t")),
            Some(ValidationError::MissingField)
        );
    }

    #[test]
    fn missing_field_wins_over_bad_numbers() {
        assert_eq!(
            validation_of(BookFields::new("", "A", "abc", "xyz")),
            Some(ValidationError::MissingField)
        );
    }

    #[test]
    fn year_checked_before_pages() {
        assert_eq!(
            validation_of(BookFields::new("T", "A", "19x5", "xyz")),
            Some(ValidationError::YearNotNumeric)
        );
        assert_eq!(
            validation_of(BookFields::new("T", "A", "1995", "3.5")),
            Some(ValidationError::PagesNotNumeric)
        );
    }

    #[test]
    fn returns_trimmed_fields() {
        let fields = validate_fields(&BookFields::new(" T ", " A ", " 1995 ", " 300 ")).unwrap();
        assert_eq!(fields, BookFields::new("T", "A", "1995", "300"));
    }

    #[test]
    fn find_prefers_exact_match() {
        let books = vec![
            Book::new("dune", "x", "1", "1"),
            Book::new("Dune", "y", "1", "1"),
        ];
        assert_eq!(find_book(&books, "Dune").unwrap().author, "y");
        assert_eq!(find_book(&books, "DUNE").unwrap().author, "x");
        assert!(find_book(&books, "Arrakis").is_none());
    }
}
