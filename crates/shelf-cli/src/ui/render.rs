//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{colors, styled, Badge};

/// Render a header line: "Shelf · context".
pub fn header(ctx: &UiContext, context: &str) -> String {
    let title = styled("Shelf", colors::BRIGHT, ctx.color);
    format!("{} \u{00B7} {}", title, context)
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "-".repeat(ctx.width.min(60))
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        badge_text
    } else {
        format!("{} {}", badge_text, message)
    }
}

/// Render a key-value pair: "Key: value" with a dim key.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    let styled_key = styled(&format!("{}:", key), colors::DIM, ctx.color);
    format!("{} {}", styled_key, value)
}

/// Render a table with the given column headers and rows.
pub fn table(ctx: &UiContext, columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = ComfyTable::new();
    if ctx.unicode {
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_FULL);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width as u16);

    table.set_header(
        columns
            .iter()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
    );
    for row in rows {
        table.add_row(row.clone());
    }

    table.to_string()
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
        }
    }

    #[test]
    fn test_kv_without_color() {
        assert_eq!(kv(&plain_ctx(), "Title", "Dune"), "Title: Dune");
    }

    #[test]
    fn test_badge_with_message() {
        assert_eq!(
            badge(&plain_ctx(), Badge::Ok, "Book added."),
            "[OK] Book added."
        );
    }

    #[test]
    fn test_table_contains_headers_and_rows() {
        let rendered = table(
            &plain_ctx(),
            &["Title", "Author"],
            &[vec!["Dune".to_string(), "Frank Herbert".to_string()]],
        );
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("Frank Herbert"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
