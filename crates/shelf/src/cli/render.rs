use colored::Colorize;
use shelfapp::api::{CatalogSummary, CmdMessage, MessageLevel, Statistics};
use shelfapp::model::Book;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_TITLE_WIDTH: usize = 40;
const MAX_AUTHOR_WIDTH: usize = 28;
const HEADERS: [&str; 4] = ["Title", "Author", "Year", "Pages"];

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn render_books(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books in the catalog.\n".to_string();
    }

    let rows: Vec<[String; 4]> = books
        .iter()
        .map(|b| {
            [
                truncate_to_width(&b.title, MAX_TITLE_WIDTH),
                truncate_to_width(&b.author, MAX_AUTHOR_WIDTH),
                b.year.clone(),
                b.pages.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let header = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&format!("{}\n", header.trim_end().bold()));

    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| pad_to_width(cell, *w))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn render_book(book: &Book) -> String {
    format!(
        "{}\n  Author: {}\n  Year:   {}\n  Pages:  {}\n",
        book.title.bold(),
        book.author,
        book.year,
        book.pages
    )
}

pub(super) fn render_statistics(statistics: &Statistics) -> String {
    match statistics {
        Statistics::Empty => "No books in the catalog.\n".to_string(),
        Statistics::Summary(summary) => render_summary(summary),
    }
}

fn render_summary(s: &CatalogSummary) -> String {
    format!(
        "{}\n\nTotal books: {}\nDistinct authors: {}\nMean pages: {:.1}\nOldest book: {}\nNewest book: {}\n",
        "Catalog statistics:".bold(),
        s.total,
        s.distinct_authors,
        s.mean_pages,
        year_or_na(s.oldest_year),
        year_or_na(s.newest_year),
    )
}

fn year_or_na(year: Option<u64>) -> String {
    year.map_or_else(|| "N/A".to_string(), |y| y.to_string())
}

fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
