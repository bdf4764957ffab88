//! Cursor over the input text.
//!
//! The cursor walks the source one `char` at a time and reports byte
//! offsets, so every token the scanner emits can be sliced straight out of
//! the original `&str` without copying.

/// Character cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a snapshot is just a value copy.
///
/// # Invariant
///
/// `pos` always lies on a UTF-8 character boundary of `source`, and
/// `pos <= source.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract `start..end` of the source.
    ///
    /// Both offsets must come from [`pos()`](Self::pos) snapshots (or be
    /// derived from them by ASCII widths), which keeps them on character
    /// boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes skipped. The cursor is left on the found
    /// byte, or at EOF. `byte` must be ASCII so that it can never match the
    /// middle of a multi-byte character.
    pub fn eat_until(&mut self, byte: u8) -> usize {
        debug_assert!(byte.is_ascii(), "eat_until needs an ASCII needle");
        let remaining = &self.source.as_bytes()[self.pos..];
        let skipped = memchr::memchr(byte, remaining).unwrap_or(remaining.len());
        self.pos += skipped;
        skipped
    }
}
