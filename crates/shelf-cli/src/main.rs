//! Shelf CLI - a personal library manager for the terminal.
//!
//! `main` stays small: resolve the library path, open the store, and hand
//! it to the interactive shell, which blocks until the user exits.

use std::path::PathBuf;

use clap::Parser;
use shelf_core::LibraryStore;

mod cli;
mod config;
mod helpers;
mod output;
mod shell;
mod ui;

use cli::Cli;
use shell::Shell;
use ui::UiContext;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = UiContext::from_env(cli.no_color, cli.ascii);

    if !ctx.is_interactive() {
        return Err(anyhow::anyhow!(
            "shelf is an interactive program; run it on a TTY"
        ));
    }

    let config_path = match cli.config {
        Some(path) => PathBuf::from(path),
        None => config::default_config_path()?,
    };
    let config = config::read_config(&config_path)?;

    let library_path = config::resolve_library_path(cli.library.as_deref(), config.as_ref());
    let store = LibraryStore::open(library_path)?;

    Shell::new(store, ctx).run()
}
