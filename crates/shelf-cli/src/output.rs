//! Output formatting for books and statistics.

use shelf_core::{Book, Statistics};

use crate::ui::render::{kv, table, truncate};
use crate::ui::theme::read_marker;
use crate::ui::UiContext;

/// Minimum terminal width for tabular output; below this, books render
/// as per-book key-value blocks.
const TABLE_MIN_WIDTH: usize = 60;

/// Print a list of books, as a table on wide terminals.
pub fn print_books(ctx: &UiContext, books: &[&Book]) {
    if ctx.width < TABLE_MIN_WIDTH {
        for book in books {
            print_book(ctx, book);
        }
        return;
    }

    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|book| {
            vec![
                truncate(&book.title, 40),
                truncate(&book.author, 30),
                book.year.to_string(),
                truncate(&book.genre, 20),
                read_marker(book.read, ctx.unicode).to_string(),
            ]
        })
        .collect();

    println!(
        "{}",
        table(ctx, &["Title", "Author", "Year", "Genre", "Read"], &rows)
    );
}

/// Print one book as a key-value block.
pub fn print_book(ctx: &UiContext, book: &Book) {
    println!("{}", kv(ctx, "Title", &book.title));
    println!("{}", kv(ctx, "Author", &book.author));
    println!("{}", kv(ctx, "Year", &book.year.to_string()));
    println!("{}", kv(ctx, "Genre", &book.genre));
    println!(
        "{}",
        kv(ctx, "Read", read_marker(book.read, ctx.unicode))
    );
    println!();
}

/// Print library statistics.
pub fn print_statistics(ctx: &UiContext, stats: &Statistics) {
    println!("{}", kv(ctx, "Total books", &stats.total.to_string()));
    println!(
        "{}",
        kv(
            ctx,
            "Books read",
            &format!("{} ({:.2}%)", stats.read, stats.read_percentage),
        )
    );
}
