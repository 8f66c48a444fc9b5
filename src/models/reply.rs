//! Outbound replies, independent of the chat platform

use super::callback::CallbackData;

/// One selectable button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyOption {
    pub label: String,
    pub data: CallbackData,
}

impl ReplyOption {
    pub fn new(label: impl Into<String>, data: impl Into<CallbackData>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Text body plus the options offered with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub options: Vec<ReplyOption>,
}

impl Reply {
    pub fn new(text: impl Into<String>, options: Vec<ReplyOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Encoded identifiers of all options, in display order
    pub fn option_ids(&self) -> Vec<String> {
        self.options.iter().map(|o| o.data.to_string()).collect()
    }
}

/// Result of handling one interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(Reply),
    /// Transient acknowledgement; nothing changed
    UnknownCommand,
}

impl Outcome {
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Outcome::Reply(reply) => Some(reply),
            Outcome::UnknownCommand => None,
        }
    }
}
