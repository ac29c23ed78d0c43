//! Interactive prompts for the launcher
//!
//! Thin wrappers over dialoguer plus the colored status lines used by every
//! command.

use crate::error::Result;
use crate::links::normalize_id;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

/// Prompt for yes/no confirmation with a default value
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let result = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(result)
}

fn validate_id(raw: &str) -> std::result::Result<(), &'static str> {
    if normalize_id(raw).is_empty() {
        Err("Please enter your student ID first")
    } else {
        Ok(())
    }
}

/// Prompt for a student/staff ID, returned trimmed and uppercased
pub fn input_id(message: &str, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut prompt = Input::<String>::with_theme(&theme)
        .with_prompt(message)
        .validate_with(|raw: &String| validate_id(raw));

    if let Some(default) = default {
        prompt = prompt.default(default.to_string());
    }

    let raw = prompt.interact_text()?;
    Ok(normalize_id(&raw))
}

/// Prompt for selection from a list of options
pub fn select<T: ToString>(message: &str, options: &[T], default: usize) -> Result<usize> {
    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let result = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(&items)
        .default(default)
        .interact()?;
    Ok(result)
}

/// Display a section header
pub fn section_header(title: &str) {
    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", title.cyan().bold());
    println!("{}", "─".repeat(60).dimmed());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Display an info message
pub fn info(message: &str) {
    println!("{} {}", "→".cyan(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("b11123021").is_ok());
        assert!(validate_id("  b1 ").is_ok());
        assert_eq!(
            validate_id(" \t "),
            Err("Please enter your student ID first")
        );
        assert!(validate_id("").is_err());
    }
}
