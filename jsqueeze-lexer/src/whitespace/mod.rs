//! Whitespace collapsing and the omission decision.
//!
//! A run of spaces, control bytes, line feeds and comments collapses to a
//! single byte: LF if the run held any line break, a space otherwise. That
//! byte is then kept only when dropping it could fuse the neighbouring tokens
//! or hide a statement boundary.

use alloc::vec::Vec;

use crate::classes::{is_whitespace, keeps_line_feed_after, keeps_line_feed_before, is_word, normalize};
use crate::comment::strip_comment;
use crate::cursor::Cursor;
use crate::error::MinifyError;

/// A space survives only between two word bytes (`a b`, `return x`).
pub fn keep_space(prev: Option<u8>, next: Option<u8>) -> bool {
    matches!((prev, next), (Some(p), Some(n)) if is_word(p) && is_word(n))
}

/// A line feed survives when it may terminate a statement on the left and
/// start one on the right.
pub fn keep_line_feed(prev: Option<u8>, next: Option<u8>) -> bool {
    matches!((prev, next), (Some(p), Some(n)) if keeps_line_feed_before(p) && keeps_line_feed_after(n))
}

/// Consumes a whitespace run starting at the cursor, comments included, and
/// returns the byte it collapses to.
pub fn collapse_run(cursor: &mut Cursor<'_>) -> Result<u8, MinifyError> {
    let mut collapsed = b' ';
    loop {
        match cursor.peek() {
            Some(byte) if is_whitespace(byte) => {
                if normalize(byte) == b'\n' {
                    collapsed = b'\n';
                }
                cursor.bump();
            }
            Some(b'/') => {
                if !strip_comment(cursor)? {
                    return Ok(collapsed);
                }
            }
            _ => return Ok(collapsed),
        }
    }
}

/// Collapses the run at the cursor and appends its byte to `out` if the
/// omission rules require it.
pub fn emit_run(cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> Result<(), MinifyError> {
    let collapsed = collapse_run(cursor)?;
    let prev = out.last().copied();
    let next = cursor.peek();
    let keep = match collapsed {
        b'\n' => keep_line_feed(prev, next),
        _ => keep_space(prev, next),
    };
    if keep {
        out.push(collapsed);
    }
    Ok(())
}
