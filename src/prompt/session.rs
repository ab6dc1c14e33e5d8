use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{config::LaunchEntry, lib::errors::PromptError};

use super::{PromptState, SelectionPrompt};

/// Message shown when input does not resolve to a listed configuration.
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please enter a valid number.";

/// Render the numbered menu block, one `(i) <name>` line per configuration.
pub fn render_menu(entries: &[LaunchEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("({}) {}", index + 1, entry.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the menu, then prompt until one entry is selected.
///
/// Re-prompts without limit on invalid input; the only exits are a resolved
/// zero-based index, end-of-file on `input`, or an I/O failure.
pub async fn prompt_for_selection<R, W>(
    question: &str,
    entries: &[LaunchEntry],
    mut input: R,
    output: &mut W,
) -> Result<usize, PromptError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", render_menu(entries))?;

    let mut prompt = SelectionPrompt::new(entries.len());
    let mut line = String::new();
    loop {
        write!(output, "\n{question}: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            return Err(PromptError::InputClosed);
        }

        if let PromptState::Resolved(index) = prompt.offer(&line) {
            return Ok(index);
        }
        writeln!(output, "{INVALID_CHOICE_MESSAGE}")?;
    }
}
