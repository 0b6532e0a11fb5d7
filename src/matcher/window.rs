use crate::format::{MAX_MATCH, WINDOW_SIZE};

/// Encoder cursor over the input: the trailing 4 KiB of consumed bytes
/// (the match source) and the next 16 unconsumed bytes (the lookahead).
///
/// The window is a view into the input itself, so it always holds original
/// content, never encoded bytes.
#[derive(Clone, Copy, Debug)]
pub struct Window<'a> {
    input: &'a [u8],
    /// Next unconsumed input position
    pos: usize,
}

impl<'a> Window<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Position the cursor at `pos` (clamped to the input length)
    pub fn at(input: &'a [u8], pos: usize) -> Self {
        Self { input, pos: pos.min(input.len()) }
    }

    /// Input offset where the trailing window starts
    #[inline]
    pub fn start(&self) -> usize {
        self.pos.saturating_sub(WINDOW_SIZE)
    }

    /// Next unconsumed input position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Already-consumed bytes available as match source (at most 4096)
    #[inline]
    pub fn history(&self) -> &'a [u8] {
        &self.input[self.start()..self.pos]
    }

    /// Next up-to-16 unconsumed bytes; shorter only near the end of input
    #[inline]
    pub fn lookahead(&self) -> &'a [u8] {
        let end = (self.pos + MAX_MATCH).min(self.input.len());
        &self.input[self.pos..end]
    }

    /// Input from absolute offset `from` to the end of the lookahead.
    ///
    /// A run starting in the history may continue into the lookahead; the
    /// decoder reproduces those bytes during the same copy.
    #[inline]
    pub(crate) fn run_from(&self, from: usize) -> &'a [u8] {
        let end = (self.pos + MAX_MATCH).min(self.input.len());
        &self.input[from..end]
    }

    /// Bytes between the cursor and absolute offset `offset` in the history
    #[inline]
    pub fn distance_to(&self, offset: usize) -> usize {
        debug_assert!(offset >= self.start() && offset < self.pos);
        self.pos - offset
    }

    /// Consume `n` bytes, sliding the window forward
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Whether every input byte has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get available window size
    pub fn available(&self) -> usize {
        self.pos - self.start()
    }
}
