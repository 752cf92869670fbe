//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Asks the user for confirmation
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Logging**: install the tracing subscriber (stderr only)
//! 2. **Context Setup**: resolve the catalog file and open the API
//! 3. **Dispatch**: route commands to handlers
//! 4. **Output Formatting**: via `render`

use super::render::{render_book, render_books, render_messages, render_statistics};
use super::setup::{AddArgs, Cli, Commands, EditArgs};
use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Term;
use shelfapp::api::{CmdResult, ShelfApi};
use shelfapp::config::ShelfConfig;
use shelfapp::error::ShelfError;
use shelfapp::init::initialize;
use shelfapp::model::BookFields;
use shelfapp::store::fs_backend::FsBackend;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: ShelfApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::Edit(args)) => handle_edit(&mut ctx, args),
        Some(Commands::Remove { title, yes }) => handle_remove(&mut ctx, &title, yes),
        Some(Commands::Show { title }) => handle_show(&ctx, &title),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Save) => handle_save(&mut ctx),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().context("Could not determine working directory")?;
    let config_file = cli.config.clone().or_else(ShelfConfig::default_config_file);

    let shelf_ctx = initialize(&cwd, config_file.as_deref(), cli.file.clone())?;
    debug!(data_file = %shelf_ctx.data_file.display(), "opening catalog");

    let api = ShelfApi::open_file(&shelf_ctx.data_file);
    if let Some(warning) = api.load_warning() {
        eprintln!("{}", load_warning_text(warning).yellow());
    }

    Ok(AppContext { api })
}

fn load_warning_text(warning: &ShelfError) -> String {
    format!(
        "Warning: {}. Starting with an empty catalog; the file will be overwritten on the next change.",
        warning
    )
}

fn print_result(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.get_all()?;
    print!("{}", render_books(&result.listed_books));
    print_result(&result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let fields = BookFields::new(args.title, args.author, args.year, args.pages);
    let result = ctx.api.add_book(&fields)?;
    print_result(&result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, args: EditArgs) -> Result<()> {
    let current = ctx
        .api
        .books()
        .iter()
        .find(|b| b.title == args.original)
        .map(BookFields::from)
        .ok_or_else(|| ShelfError::NotFound(args.original.clone()))?;

    let fields = BookFields {
        title: args.title.unwrap_or(current.title),
        author: args.author.unwrap_or(current.author),
        year: args.year.unwrap_or(current.year),
        pages: args.pages.unwrap_or(current.pages),
    };

    let result = ctx.api.update_book(&args.original, &fields)?;
    print_result(&result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, title: &str, yes: bool) -> Result<()> {
    if ctx.api.books().iter().all(|b| b.title != title) {
        return Err(ShelfError::NotFound(title.to_string()).into());
    }

    if !yes && !confirm(&format!("Remove \"{}\"?", title))? {
        println!("{}", "Nothing removed.".dimmed());
        return Ok(());
    }

    let result = ctx.api.remove_book(title)?;
    print_result(&result);
    Ok(())
}

fn handle_show(ctx: &AppContext, title: &str) -> Result<()> {
    let result = ctx.api.show_book(title)?;
    for book in &result.listed_books {
        print!("{}", render_book(book));
    }
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    if let Some(statistics) = &result.statistics {
        print!("{}", render_statistics(statistics));
    }
    Ok(())
}

fn handle_save(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.save()?;
    print_result(&result);
    Ok(())
}

/// Ask a yes/no question on the terminal. Without a terminal there is nobody
/// to acknowledge the removal, so refuse.
fn confirm(prompt: &str) -> Result<bool> {
    let term = Term::stderr();
    if !term.is_term() {
        bail!("Refusing to remove without confirmation (not a terminal); pass --yes");
    }
    term.write_str(&format!("{} [y/N] ", prompt))?;
    let answer = term.read_line()?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_warning_mentions_cause_and_consequence() {
        let warning = ShelfError::Io(std::io::Error::other("permission denied"));
        let text = load_warning_text(&warning);
        assert!(text.contains("permission denied"));
        assert!(text.contains("overwritten"));
    }
}
