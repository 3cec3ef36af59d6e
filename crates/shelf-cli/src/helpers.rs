//! Input helpers for interactive prompts.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Input};

/// Prompt for one line of input, trimming surrounding whitespace.
///
/// Empty input is allowed; field values have no content constraints and
/// an empty search keyword matches everything.
pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Run shelf on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let value: String = Input::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    Ok(value.trim().to_string())
}

/// Interpret a read-status answer.
///
/// The input is normalized to lowercase; the literal "yes" means read,
/// anything else means unread.
pub fn parse_read_status(input: &str) -> bool {
    input.trim().to_lowercase() == "yes"
}
