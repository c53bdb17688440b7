//! Interactive menus used to fill in settings the user did not pass as flags.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Select};
use std::fmt::Display;

/// Trait for asking the user questions.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Asks the user to pick one of `items`, returning its index.
    fn select(&self, question: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, question: &str, items: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(question)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Asks the user to pick one of `options`, preselecting the first.
pub fn choose<T: Copy + Display>(
    prompter: &dyn Prompter,
    question: &str,
    options: &[T],
) -> Result<T> {
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    let index = prompter.select(question, &items, 0)?;
    options
        .get(index)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("no option at index {index}")))
}
