//! Line generators: flatten one tab's content into its reveal order.
//!
//! Every generator is a pure function of a [`ContentTree`](crate::model::ContentTree);
//! re-running it for another locale yields a fresh, independent sequence.

pub mod careers;
pub mod profile;
pub mod projects;
pub mod skills;

use std::borrow::Cow;

/// A shell command as typed: `command` in one colour, `arg` in another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub arg: Option<String>,
}

impl CommandLine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            arg: None,
        }
    }

    pub fn with_arg(command: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            arg: Some(arg.into()),
        }
    }

    /// The string the typewriter reveals.
    pub fn full_text(&self) -> Cow<'_, str> {
        match &self.arg {
            Some(arg) => Cow::Owned(format!("{} {arg}", self.command)),
            None => Cow::Borrowed(&self.command),
        }
    }

    /// Split a typed prefix of [`full_text`](Self::full_text) back into its
    /// command and argument parts. The separating space belongs to neither.
    pub fn split_prefix<'a>(&self, typed: &'a str) -> (&'a str, Option<&'a str>) {
        let cmd_len = self.command.len().min(typed.len());
        let cmd_end = (0..=cmd_len)
            .rev()
            .find(|&i| typed.is_char_boundary(i))
            .unwrap_or(0);
        let command = &typed[..cmd_end];
        let arg = typed
            .get(self.command.len() + 1..)
            .filter(|rest| self.arg.is_some() && !rest.is_empty());
        (command, arg)
    }
}
