//! # Prompt Helpers
//!
//! The interactive retry policy, implemented once:
//!
//! - retries are unbounded
//! - blank input is the universal escape hatch and cancels the
//!   enclosing operation
//! - invalid input shows the validation message and re-asks
//!
//! Every field prompt in the application goes through these helpers, so
//! no command re-implements the loop mechanics.

use anyhow::Result;
use dialoguer::Input;

use shopkeep_core::error::ValidationError;

use crate::output::Output;

/// The outcome of a prompt: a value, or the operator backed out.
#[derive(Debug)]
pub enum Answer<T> {
    Value(T),
    Cancelled,
}

/// Reads one raw line. Empty input is returned as-is; used by the main
/// command prompt, where blank is just an invalid command.
pub fn raw_line(label: &str) -> Result<String> {
    let raw: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(raw)
}

/// Prompts for one free-text value. Blank input cancels.
pub fn line(label: &str) -> Result<Answer<String>> {
    let raw = raw_line(label)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Answer::Cancelled);
    }
    Ok(Answer::Value(trimmed.to_string()))
}

/// Prompts until `validate` accepts the input or the operator escapes
/// with a blank line.
pub fn until_valid<T>(
    label: &str,
    out: &Output,
    validate: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<Answer<T>> {
    loop {
        match line(label)? {
            Answer::Cancelled => return Ok(Answer::Cancelled),
            Answer::Value(raw) => match validate(&raw) {
                Ok(value) => return Ok(Answer::Value(value)),
                Err(err) => {
                    out.error(&format!("{err} (press Enter to return to the menu)"));
                }
            },
        }
    }
}
