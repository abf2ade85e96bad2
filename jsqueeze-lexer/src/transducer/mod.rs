//! The scanner/driver: one left-to-right pass that dispatches on the head of
//! the remaining input.
//!
//! Scan states map onto routines rather than an explicit enum. `Normal` is
//! the loop below; `InLineComment` and `InBlockComment` are the comment
//! stripper; `InString(delimiter)` and `InRegex` are the literal reader. Each
//! routine returns to `Normal` once its span closes, and end of input inside
//! any of them (bar a line comment) is an error.
//!
//! Dispatch priority in `Normal`, first match wins:
//!
//! 1. `//` line comment
//! 2. `/*` block comment
//! 3. `/` where the regex-start heuristic holds
//! 4. `'`, `"` or `` ` `` string or template literal
//! 5. CR, other control bytes, spaces and LFs: whitespace run
//! 6. anything else is copied through

use alloc::string::String;
use alloc::vec::Vec;

use crate::classes::is_whitespace;
use crate::comment::strip_comment;
use crate::cursor::Cursor;
use crate::error::MinifyError;
use crate::literal::read_literal;
use crate::regex_start::opens_regex;
use crate::whitespace::emit_run;

/// Knobs for the transducer. The defaults reproduce the punctuation-only
/// behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinifyOptions {
    /// Also treat `/` after `return`, `typeof`, `case` and similar keywords
    /// as a regex opener.
    pub regex_after_keywords: bool,
}

/// Minifies `source` with the default options.
pub fn minify(source: &str) -> Result<String, MinifyError> {
    minify_with_options(source, &MinifyOptions::default())
}

/// Minifies `source` and returns the result as a `String`.
pub fn minify_with_options(source: &str, options: &MinifyOptions) -> Result<String, MinifyError> {
    let bytes = minify_bytes_with_options(source.as_bytes(), options)?;
    // Only ASCII bytes are ever dropped or inserted, so UTF-8 input stays valid.
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Byte-level [`minify`]; the input need not be UTF-8.
pub fn minify_bytes(input: &[u8]) -> Result<Vec<u8>, MinifyError> {
    minify_bytes_with_options(input, &MinifyOptions::default())
}

/// Minifies raw bytes. Bytes >= 0x80 are never decoded; they are one opaque
/// identifier-like class.
pub fn minify_bytes_with_options(input: &[u8], options: &MinifyOptions) -> Result<Vec<u8>, MinifyError> {
    let mut cursor = Cursor::new(input);
    let mut out = Vec::with_capacity(input.len());

    while let Some(byte) = cursor.peek() {
        match byte {
            b'/' => {
                if strip_comment(&mut cursor)? {
                    continue;
                }
                if opens_regex(&out, options.regex_after_keywords) {
                    read_literal(&mut cursor, &mut out)?;
                } else {
                    cursor.bump();
                    out.push(byte);
                }
            }
            b'\'' | b'"' | b'`' => read_literal(&mut cursor, &mut out)?,
            _ if is_whitespace(byte) => emit_run(&mut cursor, &mut out)?,
            _ => {
                cursor.bump();
                out.push(byte);
            }
        }
    }

    Ok(out)
}
