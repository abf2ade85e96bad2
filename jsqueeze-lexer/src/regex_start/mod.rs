//! Decides whether a bare `/` opens a regex literal or is a division operator,
//! looking only at what has already been emitted.

use crate::classes::{is_regex_prefix, is_word};

/// Keywords after which an expression (and therefore a regex) may start.
/// Only consulted when keyword tracking is switched on.
const REGEX_KEYWORDS: &[&[u8]] = &[
    b"return",
    b"typeof",
    b"instanceof",
    b"in",
    b"of",
    b"new",
    b"delete",
    b"void",
    b"throw",
    b"case",
    b"do",
    b"else",
    b"yield",
    b"await",
];

/// `emitted` is the output produced so far; its last byte is Prev.
///
/// An empty output counts as a regex context: nothing can be divided yet.
pub fn opens_regex(emitted: &[u8], after_keywords: bool) -> bool {
    match emitted.last() {
        None => true,
        Some(&prev) if is_regex_prefix(prev) => true,
        Some(_) => after_keywords && ends_with_keyword(emitted),
    }
}

/// The keyword must stand alone: `xreturn` is an identifier and `a.in` is a
/// property access, so neither counts.
fn ends_with_keyword(emitted: &[u8]) -> bool {
    REGEX_KEYWORDS.iter().any(|keyword| {
        emitted.ends_with(keyword)
            && emitted
                .len()
                .checked_sub(keyword.len() + 1)
                .map_or(true, |before| !is_word(emitted[before]) && emitted[before] != b'.')
    })
}
