// jsqueeze/src/ui/theme.rs
//! Fixed colour assignments for CLI messages.

use owo_colors::AnsiColors;

/// The logical kinds of message the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn color(self) -> AnsiColors {
        match self {
            MessageKind::Info => AnsiColors::Blue,
            MessageKind::Success => AnsiColors::Green,
            MessageKind::Error => AnsiColors::Red,
        }
    }

    /// Prefix printed before the message body, if any.
    pub fn prefix(self) -> &'static str {
        match self {
            MessageKind::Error => "Error: ",
            _ => "",
        }
    }
}
