//! Comment stripping. Both routines expect the cursor on the opening `/` with
//! an empty pushback slot, and leave the replacement byte in that slot.

use memchr::{memchr, memmem};

use crate::cursor::Cursor;
use crate::error::MinifyError;

/// Drops `//...` through the next LF (or end of input) and re-injects one LF.
pub fn strip_line_comment(cursor: &mut Cursor<'_>) {
    let body = &cursor.rest()[2..];
    let consumed = match memchr(b'\n', body) {
        Some(lf) => 2 + lf + 1,
        None => 2 + body.len(),
    };
    cursor.advance(consumed);
    cursor.push_front(b'\n');
}

/// Drops `/*...*/` and re-injects one space.
pub fn strip_block_comment(cursor: &mut Cursor<'_>) -> Result<(), MinifyError> {
    let offset = cursor.offset();
    let body = &cursor.rest()[2..];
    let close = memmem::find(body, b"*/").ok_or(MinifyError::UnterminatedComment { offset })?;
    cursor.advance(2 + close + 2);
    cursor.push_front(b' ');
    Ok(())
}

/// Strips the comment the cursor sits on. Returns `false`, consuming
/// nothing, when the cursor is not on a comment opener.
pub fn strip_comment(cursor: &mut Cursor<'_>) -> Result<bool, MinifyError> {
    match (cursor.peek(), cursor.peek_second()) {
        (Some(b'/'), Some(b'/')) => strip_line_comment(cursor),
        (Some(b'/'), Some(b'*')) => strip_block_comment(cursor)?,
        _ => return Ok(false),
    }
    Ok(true)
}
