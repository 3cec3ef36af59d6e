//! The interactive menu loop.
//!
//! The shell owns the store for the process lifetime and drives it from a
//! numbered menu. Choice parsing is a pure function so the dispatch table
//! is testable without a console.

use shelf_core::{parse_year, Book, LibraryStore, ShelfError};

use crate::helpers::{parse_read_status, prompt_line};
use crate::output::{print_books, print_statistics};
use crate::ui::render::{badge, divider, header};
use crate::ui::{Badge, UiContext};

/// One of the six menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RemoveBook,
    SearchBooks,
    ListBooks,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection line. Anything other than "1".."6"
    /// (after trimming) is invalid.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::RemoveBook),
            "3" => Some(Self::SearchBooks),
            "4" => Some(Self::ListBooks),
            "5" => Some(Self::Statistics),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Menu entries in display order.
    pub fn menu_entries() -> [(&'static str, &'static str); 6] {
        [
            ("1", "Add a book"),
            ("2", "Remove a book"),
            ("3", "Search for a book"),
            ("4", "List all books"),
            ("5", "Show statistics"),
            ("6", "Exit"),
        ]
    }
}

/// The interactive shell: a menu loop over the library store.
pub struct Shell {
    store: LibraryStore,
    ctx: UiContext,
}

impl Shell {
    pub fn new(store: LibraryStore, ctx: UiContext) -> Self {
        Self { store, ctx }
    }

    /// Run the menu loop until the user chooses to exit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu();
            let input = prompt_line("Choose an option")?;
            println!();

            match MenuChoice::parse(&input) {
                Some(MenuChoice::AddBook) => self.add_book()?,
                Some(MenuChoice::RemoveBook) => self.remove_book()?,
                Some(MenuChoice::SearchBooks) => self.search_books()?,
                Some(MenuChoice::ListBooks) => self.list_books(),
                Some(MenuChoice::Statistics) => self.statistics(),
                Some(MenuChoice::Exit) => {
                    println!("Happy reading!");
                    return Ok(());
                }
                None => {
                    println!(
                        "{}",
                        badge(&self.ctx, Badge::Err, "Invalid choice. Please try again.")
                    );
                }
            }
            println!();
        }
    }

    fn print_menu(&self) {
        println!("{}", header(&self.ctx, "your personal library"));
        println!("{}", divider(&self.ctx));
        for (number, label) in MenuChoice::menu_entries() {
            println!("{}) {}", number, label);
        }
    }

    /// Collect fields for a new book and add it to the store.
    ///
    /// An unparseable year aborts the add with a visible message before
    /// any record is constructed; neither memory nor the file changes.
    fn add_book(&mut self) -> anyhow::Result<()> {
        let title = prompt_line("Book title")?;
        let author = prompt_line("Author")?;
        let year_input = prompt_line("Publication year")?;
        let year = match parse_year(&year_input) {
            Ok(year) => year,
            Err(ShelfError::InvalidInput(msg)) => {
                println!("{}", badge(&self.ctx, Badge::Err, &msg));
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        let genre = prompt_line("Genre")?;
        let read = parse_read_status(&prompt_line("Have you read it? (yes/no)")?);

        self.store.add(Book::new(title, author, year, genre, read))?;
        println!("{}", badge(&self.ctx, Badge::Ok, "Book added."));
        Ok(())
    }

    /// Remove by title. Always reports success; a title that matched
    /// nothing is indistinguishable from one that did.
    fn remove_book(&mut self) -> anyhow::Result<()> {
        let title = prompt_line("Title of the book to remove")?;
        self.store.remove(&title)?;
        println!("{}", badge(&self.ctx, Badge::Ok, "Book removed."));
        Ok(())
    }

    fn search_books(&self) -> anyhow::Result<()> {
        let keyword = prompt_line("Book title or author")?;
        let matches = self.store.search(&keyword);
        if matches.is_empty() {
            println!(
                "{}",
                badge(&self.ctx, Badge::Info, "No books matched your search.")
            );
        } else {
            print_books(&self.ctx, &matches);
        }
        Ok(())
    }

    fn list_books(&self) {
        let books: Vec<&Book> = self.store.books().iter().collect();
        if books.is_empty() {
            println!(
                "{}",
                badge(&self.ctx, Badge::Info, "No books in the library yet.")
            );
        } else {
            print_books(&self.ctx, &books);
        }
    }

    fn statistics(&self) {
        print_statistics(&self.ctx, &self.store.statistics());
    }
}
