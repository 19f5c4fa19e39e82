//! Scripted prompter for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use jenkins_auth::error::{Error, Result};
use jenkins_auth::prompt::Prompter;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted reply to `input`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Type this text
    Text(String),
    /// Press enter, accepting the default
    Default,
    /// Abort the prompt (Ctrl-C)
    Cancel,
}

impl Answer {
    /// Shorthand for [`Answer::Text`]
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Call record for `input`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCall {
    pub prompt: String,
    pub default: String,
}

/// Prompter replaying canned answers
///
/// Features:
/// - Records every prompt with its default
/// - Captures messages instead of printing them
/// - Can pose as a non-interactive (batch) terminal
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    prompts: Mutex<Vec<PromptCall>>,
    messages: Mutex<Vec<String>>,
    interactive: bool,
}

impl ScriptedPrompter {
    /// Interactive prompter answering with `answers` in order
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            prompts: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
            interactive: true,
        }
    }

    /// Non-interactive prompter; any `input` call is recorded and fails
    pub fn batch() -> Self {
        Self {
            interactive: false,
            ..Self::new(Vec::new())
        }
    }

    /// Prompts asked so far
    pub fn prompts(&self) -> Vec<PromptCall> {
        self.prompts.lock().unwrap().clone()
    }

    /// Messages shown so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// All messages joined with newlines
    pub fn output(&self) -> String {
        self.messages().join("\n")
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn message(&self, text: &str) {
        self.messages.lock().unwrap().push(text.to_string());
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(PromptCall {
            prompt: prompt.to_string(),
            default: default.to_string(),
        });

        if !self.interactive {
            return Err(Error::InputCancelled("scripted batch prompter".to_string()));
        }

        match self.answers.lock().unwrap().pop_front() {
            Some(Answer::Text(text)) => Ok(text),
            Some(Answer::Default) => Ok(default.to_string()),
            Some(Answer::Cancel) => Err(Error::InputCancelled("interrupted".to_string())),
            None => Err(Error::InputCancelled("no scripted answers left".to_string())),
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
