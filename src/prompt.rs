//! Interactive input abstraction
//!
//! The resolver and login form only talk to a [`Prompter`], so batch runs
//! and tests never reach a terminal.

use crate::error::{Error, Result};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

/// Message shown when a required field is left blank
pub const REQUIRED_MESSAGE: &str = "A value is required.";

/// Terminal capability used by credential resolution
pub trait Prompter {
    /// Show a line of text to the user
    fn message(&self, text: &str);

    /// Ask for one line of input
    ///
    /// Returns the raw answer, which may be empty. Implementations that
    /// support defaults return `default` when the user just presses enter.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Ask until a non-blank answer is given
    fn ask_required(&self, prompt: &str, default: &str) -> Result<String> {
        loop {
            let answer = self.input(prompt, default)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            self.message(REQUIRED_MESSAGE);
        }
    }

    /// Whether this prompter can collect input at all
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Terminal prompter backed by `dialoguer`
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    /// Create a prompter with the colorful theme
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for DialoguerPrompter {
    fn message(&self, text: &str) {
        anstream::println!("{text}");
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map_err(|e| Error::InputCancelled(e.to_string()))
    }
}

/// Non-interactive prompter for batch mode
///
/// Messages go to stdout; any attempt to read input fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchPrompter;

impl Prompter for BatchPrompter {
    fn message(&self, text: &str) {
        anstream::println!("{text}");
    }

    fn input(&self, prompt: &str, _default: &str) -> Result<String> {
        Err(Error::InputCancelled(format!(
            "cannot ask for '{prompt}' in batch mode"
        )))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct Canned {
        answers: RefCell<VecDeque<&'static str>>,
        messages: RefCell<Vec<String>>,
    }

    impl Prompter for Canned {
        fn message(&self, text: &str) {
            self.messages.borrow_mut().push(text.to_string());
        }

        fn input(&self, _prompt: &str, _default: &str) -> Result<String> {
            self.answers
                .borrow_mut()
                .pop_front()
                .map(ToString::to_string)
                .ok_or_else(|| Error::InputCancelled("out of answers".to_string()))
        }
    }

    #[test]
    fn test_ask_required_reprompts_on_blank() {
        let p = Canned {
            answers: RefCell::new(VecDeque::from(["", "   ", " bob "])),
            messages: RefCell::new(Vec::new()),
        };
        assert_eq!(p.ask_required("User:", "").unwrap(), "bob");
        assert_eq!(p.messages.borrow().len(), 2);
    }

    #[test]
    fn test_batch_prompter_refuses_input() {
        let err = BatchPrompter.ask_required("User:", "admin").unwrap_err();
        assert!(matches!(err, Error::InputCancelled(_)));
        assert!(!BatchPrompter.is_interactive());
    }
}
