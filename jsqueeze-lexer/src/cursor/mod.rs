/// Forward-only view over the unconsumed input.
///
/// A single pushback slot lets the comment stripper re-inject the space or
/// line feed that replaces a comment, so the whitespace rules see it exactly
/// like source whitespace.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    pushback: Option<u8>,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            pushback: None,
        }
    }

    /// Byte offset of the next input byte, ignoring any pushback.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.pushback.or_else(|| self.input.get(self.pos).copied())
    }

    pub fn peek_second(&self) -> Option<u8> {
        match self.pushback {
            Some(_) => self.input.get(self.pos).copied(),
            None => self.input.get(self.pos + 1).copied(),
        }
    }

    pub fn bump(&mut self) -> Option<u8> {
        if let Some(byte) = self.pushback.take() {
            return Some(byte);
        }
        let byte = self.input.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// Unconsumed input after the pushback slot.
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos.min(self.input.len())..]
    }

    /// Skips `n` input bytes. The pushback slot must be empty.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pushback.is_none());
        self.pos = (self.pos + n).min(self.input.len());
    }

    pub fn push_front(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none());
        self.pushback = Some(byte);
    }
}
