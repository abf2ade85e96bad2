use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::error::MinifyError;

/// Copies a string, template or regex literal verbatim, delimiters included.
///
/// The cursor must sit on the opening delimiter (`'`, `"`, `` ` `` or `/`).
/// Template substitutions are not tracked, so a backtick nested inside
/// `${...}` ends the literal early. A backslash
/// and the byte after it are copied as one unit, so an escaped delimiter never
/// closes the literal.
pub fn read_literal(cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> Result<(), MinifyError> {
    let offset = cursor.offset();
    let Some(delimiter) = cursor.bump() else {
        return Ok(());
    };
    let unterminated = MinifyError::UnterminatedLiteral { offset, delimiter };
    out.push(delimiter);

    loop {
        let byte = cursor.bump().ok_or(unterminated)?;
        out.push(byte);
        if byte == b'\\' {
            out.push(cursor.bump().ok_or(unterminated)?);
        } else if byte == delimiter {
            return Ok(());
        }
    }
}
