//! Static byte-class tables consulted on every whitespace and `/` decision.
//!
//! Each byte maps to a set of flag bits, so the hot path is one table load and
//! a mask instead of a chain of comparisons.

/// Identifier-forming bytes: ASCII letters, digits, `_`, `$`, `\`, and every
/// byte >= 0x80 (non-ASCII is one opaque class).
pub const WORD: u8 = 1 << 0;
/// A line feed after this byte may end a statement and must survive.
pub const LF_KEEP_BEFORE: u8 = 1 << 1;
/// A line feed before this byte may start a statement and must survive.
pub const LF_KEEP_AFTER: u8 = 1 << 2;
/// A `/` after this byte cannot be division, so it opens a regex literal.
pub const REGEX_PREFIX: u8 = 1 << 3;

static CLASSES: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'\\' || b >= 0x80 {
            table[i] = WORD | LF_KEEP_BEFORE | LF_KEEP_AFTER;
        }
        i += 1;
    }
    let table = mark(table, b"\"'`)]}+-", LF_KEEP_BEFORE);
    let table = mark(table, b"([{+-", LF_KEEP_AFTER);
    mark(table, b"(,=:[!&|?{};\n", REGEX_PREFIX)
}

const fn mark(mut table: [u8; 256], bytes: &[u8], flag: u8) -> [u8; 256] {
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] |= flag;
        i += 1;
    }
    table
}

#[inline]
fn has(byte: u8, flag: u8) -> bool {
    CLASSES[byte as usize] & flag != 0
}

#[inline]
pub fn is_word(byte: u8) -> bool {
    has(byte, WORD)
}

#[inline]
pub fn keeps_line_feed_before(byte: u8) -> bool {
    has(byte, LF_KEEP_BEFORE)
}

#[inline]
pub fn keeps_line_feed_after(byte: u8) -> bool {
    has(byte, LF_KEEP_AFTER)
}

#[inline]
pub fn is_regex_prefix(byte: u8) -> bool {
    has(byte, REGEX_PREFIX)
}

/// Maps CR to LF and every other control byte (TAB, DEL, ...) to a space.
/// Everything else, LF included, passes through.
#[inline]
pub fn normalize(byte: u8) -> u8 {
    match byte {
        b'\r' => b'\n',
        b'\n' => b'\n',
        0x00..=0x1f | 0x7f => b' ',
        other => other,
    }
}

/// True for the two bytes `normalize` can produce as whitespace.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(normalize(byte), b' ' | b'\n')
}
