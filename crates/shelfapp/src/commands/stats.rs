//! Aggregate view over the whole catalog.
//!
//! `year` and `pages` are free text on disk, so every aggregate only counts
//! the records where the field is usable:
//! - mean pages: records whose pages is all digits
//! - oldest/newest year: records whose year is all digits and in [1000, 2100]

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{is_digits, Book};
use crate::store::{CatalogStore, StorageBackend};
use serde::Serialize;
use std::collections::HashSet;
use std::ops::RangeInclusive;

pub const PLAUSIBLE_YEARS: RangeInclusive<u64> = 1000..=2100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Statistics {
    /// The catalog has no books; nothing to aggregate.
    Empty,
    Summary(CatalogSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub distinct_authors: usize,
    /// 0.0 when no book has numeric pages.
    pub mean_pages: f64,
    /// `None` when no book has a plausible numeric year.
    pub oldest_year: Option<u64>,
    pub newest_year: Option<u64>,
}

pub fn run<B: StorageBackend>(store: &CatalogStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_statistics(compute(store.books())))
}

pub fn compute(books: &[Book]) -> Statistics {
    if books.is_empty() {
        return Statistics::Empty;
    }

    let distinct_authors = books
        .iter()
        .map(|b| b.author.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    let pages: Vec<u64> = books.iter().filter_map(|b| parse_digits(&b.pages)).collect();
    let mean_pages = if pages.is_empty() {
        0.0
    } else {
        pages.iter().map(|&p| p as u128).sum::<u128>() as f64 / pages.len() as f64
    };

    let years: Vec<u64> = books
        .iter()
        .filter_map(|b| parse_digits(&b.year))
        .filter(|y| PLAUSIBLE_YEARS.contains(y))
        .collect();

    Statistics::Summary(CatalogSummary {
        total: books.len(),
        distinct_authors,
        mean_pages,
        oldest_year: years.iter().min().copied(),
        newest_year: years.iter().max().copied(),
    })
}

fn parse_digits(text: &str) -> Option<u64> {
    if is_digits(text) {
        text.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn summary(books: &[Book]) -> CatalogSummary {
        match compute(books) {
            Statistics::Summary(s) => s,
            Statistics::Empty => panic!("expected a summary"),
        }
    }

    #[test]
    fn empty_catalog_is_empty_not_zero() {
        assert_eq!(compute(&[]), Statistics::Empty);
    }

    #[test]
    fn mean_pages_skips_non_numeric() {
        let books = vec![
            Book::new("A", "x", "2000", "100"),
            Book::new("B", "x", "2000", "not-a-number"),
            Book::new("C", "x", "2000", "200"),
        ];
        assert_eq!(summary(&books).mean_pages, 150.0);
    }

    #[test]
    fn mean_pages_zero_without_numeric_pages() {
        let books = vec![Book::new("A", "x", "2000", "many")];
        assert_eq!(summary(&books).mean_pages, 0.0);
    }

    #[test]
    fn year_range_skips_implausible_years() {
        let books = vec![
            Book::new("A", "x", "1995", "1"),
            Book::new("B", "x", "3000", "1"),
            Book::new("C", "x", "2005", "1"),
        ];
        let s = summary(&books);
        assert_eq!(s.oldest_year, Some(1995));
        assert_eq!(s.newest_year, Some(2005));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let books = vec![
            Book::new("A", "x", "1000", "1"),
            Book::new("B", "x", "2100", "1"),
            Book::new("C", "x", "999", "1"),
            Book::new("D", "x", "2101", "1"),
        ];
        let s = summary(&books);
        assert_eq!(s.oldest_year, Some(1000));
        assert_eq!(s.newest_year, Some(2100));
    }

    #[test]
    fn year_not_available_without_plausible_years() {
        let books = vec![
            Book::new("A", "x", "unknown", "1"),
            Book::new("B", "x", "50", "1"),
            Book::new("C", "x", "99999999999999999999999", "1"),
        ];
        let s = summary(&books);
        assert_eq!(s.oldest_year, None);
        assert_eq!(s.newest_year, None);
    }

    #[test]
    fn authors_counted_case_insensitively() {
        let books = vec![
            Book::new("A", "Clarice Lispector", "1943", "1"),
            Book::new("B", "CLARICE LISPECTOR", "1977", "1"),
            Book::new("C", "Jorge Amado", "1958", "1"),
        ];
        let s = summary(&books);
        assert_eq!(s.total, 3);
        assert_eq!(s.distinct_authors, 2);
    }

    #[test]
    fn run_reads_from_store() {
        let store = StoreFixture::new().with_books(3).store;
        let result = run(&store).unwrap();
        let Some(Statistics::Summary(s)) = result.statistics else {
            panic!("expected summary");
        };
        assert_eq!(s.total, 3);
        assert_eq!(s.oldest_year, Some(1990));
        assert_eq!(s.newest_year, Some(1992));
        assert_eq!(s.mean_pages, 110.0);
    }
}
