//! Interactive input for fields missing from the command line

use crate::error::{Result, SiteError};
use dialoguer::Input;

/// Use `value` when given, otherwise ask for it on the terminal.
///
/// An empty answer is returned as-is; form validation decides whether that
/// is acceptable.
pub fn or_ask(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SiteError::Prompt(e.to_string())),
    }
}
