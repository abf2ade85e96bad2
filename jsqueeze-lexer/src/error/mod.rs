use core::fmt;

/// Literal-termination failures. Both abort the whole call; no partial output
/// is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinifyError {
    /// A `/*` with no matching `*/` before end of input.
    UnterminatedComment { offset: usize },
    /// A string or regex literal whose closing delimiter never arrives.
    UnterminatedLiteral { offset: usize, delimiter: u8 },
}

impl MinifyError {
    /// Byte offset of the opener that was left unclosed.
    pub fn offset(&self) -> usize {
        match *self {
            MinifyError::UnterminatedComment { offset } => offset,
            MinifyError::UnterminatedLiteral { offset, .. } => offset,
        }
    }
}

impl fmt::Display for MinifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MinifyError::UnterminatedComment { offset } => {
                write!(f, "unterminated comment starting at byte {}", offset)
            }
            MinifyError::UnterminatedLiteral { offset, delimiter } => {
                let kind = match delimiter {
                    b'/' => "regex",
                    b'`' => "template",
                    _ => "string",
                };
                write!(
                    f,
                    "unterminated {} literal ({}) starting at byte {}",
                    kind, delimiter as char, offset
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MinifyError {}
