//! UI primitives for the Shelf CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Theme**: Badge tokens and the color palette
//! - **Render**: Tables, headers, badges, key-value lines

mod context;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;
