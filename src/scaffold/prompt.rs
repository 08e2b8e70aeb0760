//! Interactive prompt seam
//!
//! The attribute collector talks to the terminal through the [`Prompter`]
//! trait so the question/answer loop can be driven by a scripted
//! implementation in tests. The production implementation wraps `dialoguer`.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// A source of interactive answers.
pub trait Prompter {
    /// Free-text input with a default offered when the user hits enter.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be read.
    fn input(&mut self, message: &str, default: &str) -> Result<String>;

    /// Single choice among `items`; returns the selected index.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be read.
    fn select(&mut self, message: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Yes/no confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be read.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Informational line between prompts.
    fn status(&mut self, message: &str);

    /// Rejection notice for input that failed validation; the caller
    /// re-issues the prompt afterwards.
    fn invalid(&mut self, message: &str);
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Default)]
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    /// Create a prompter with the default colorful theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TermPrompter {
    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        let mut prompt = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if default.is_empty() {
            prompt = prompt.allow_empty(true);
        } else {
            prompt = prompt.default(default.to_string());
        }
        Ok(prompt.interact_text()?)
    }

    fn select(&mut self, message: &str, items: &[&str], default: usize) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn status(&mut self, message: &str) {
        println!("\n{}", style(message).bold());
    }

    fn invalid(&mut self, message: &str) {
        println!("{}", style(message).red());
    }
}
