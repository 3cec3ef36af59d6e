use clap::Parser;

use shelf_core::VERSION;

/// Shelf - a personal library manager for the terminal
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the library file
    #[arg(short, long, env = "SHELF_LIBRARY")]
    pub library: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long)]
    pub ascii: bool,
}
