//! User-facing status messages.

use alloc::string::String;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Neutral information.
    Info,
    /// A good result for the player.
    Success,
    /// A rejected command.
    Warning,
    /// A lost round.
    Loss,
}

/// The latest message to show the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Presentation category.
    pub kind: MessageKind,
    /// Text to display.
    pub text: String,
}

impl Message {
    /// Creates a message.
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates an [`MessageKind::Info`] message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, text)
    }

    /// Creates a [`MessageKind::Warning`] message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, text)
    }
}
