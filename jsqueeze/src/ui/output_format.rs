// jsqueeze/src/ui/output_format.rs
//! Coloured one-line messages for stderr.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::MessageKind;

/// Writes `msg` with the prefix and colour of `kind`. Colour is applied only
/// when `supports_color` is set.
pub fn print_message<W: Write>(
    writer: &mut W,
    kind: MessageKind,
    msg: &str,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", kind.prefix(), msg);
    if supports_color {
        writeln!(writer, "{}", line.color(kind.color()))
    } else {
        writeln!(writer, "{}", line)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Info, msg, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Success, msg, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Error, msg, supports_color)
}

fn stderr_supports_color() -> bool {
    io::stderr().is_terminal()
}

/// Prints an informational message to stderr unless `quiet`.
pub fn info_msg(msg: impl AsRef<str>, quiet: bool) {
    if !quiet {
        let _ = print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color());
    }
}

pub fn success_msg(msg: impl AsRef<str>, quiet: bool) {
    if !quiet {
        let _ = print_success_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color());
    }
}

/// Errors are printed even in quiet mode.
pub fn error_msg(msg: impl AsRef<str>) {
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color());
}
