/// Bit-level reader for container headers
///
/// Mirrors [`FlagWriter`](super::FlagWriter): flags are read LSB to MSB
/// within each header byte. The reader does not know how many flags are
/// meaningful; callers stop when their data runs out.
pub struct FlagReader<'a> {
    headers: &'a [u8],
    /// Index of the next flag across all header bytes
    position: usize,
}

impl<'a> FlagReader<'a> {
    pub fn new(headers: &'a [u8]) -> Self {
        Self { headers, position: 0 }
    }

    /// Read the next flag, or `None` once every header bit is consumed
    #[inline]
    pub fn read_flag(&mut self) -> Option<bool> {
        let byte = *self.headers.get(self.position / 8)?;
        let flag = byte & (1 << (self.position % 8)) != 0;
        self.position += 1;
        Some(flag)
    }

    /// Flags consumed so far
    pub fn flags_read(&self) -> usize {
        self.position
    }

    /// Header bits not yet consumed (including unused trailing bits)
    pub fn flags_remaining(&self) -> usize {
        self.headers.len() * 8 - self.position
    }
}

impl Iterator for FlagReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_flag()
    }
}
