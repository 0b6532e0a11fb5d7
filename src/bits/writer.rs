/// Bit-level writer for container headers
///
/// Writes one flag per token, LSB-first: bit `i` of a header byte is the
/// `i`-th token of that group of eight. A header byte is allocated when the
/// first flag of its group is written, so the output never carries an
/// empty trailing byte.
pub struct FlagWriter {
    /// Accumulated header bytes
    output: Vec<u8>,
    /// Flags written to the last byte (0-8)
    bits_in_byte: u8,
}

impl FlagWriter {
    pub fn new() -> Self {
        Self { output: Vec::new(), bits_in_byte: 8 }
    }

    /// Pre-size for roughly `tokens` flags
    pub fn with_capacity(tokens: usize) -> Self {
        Self { output: Vec::with_capacity((tokens + 7) / 8), bits_in_byte: 8 }
    }

    /// Append a single flag
    #[inline]
    pub fn write_flag(&mut self, flag: bool) {
        if self.bits_in_byte == 8 {
            self.output.push(0);
            self.bits_in_byte = 0;
        }

        if let Some(last) = self.output.last_mut() {
            *last |= (flag as u8) << self.bits_in_byte;
        }
        self.bits_in_byte += 1;
    }

    /// Number of flags written so far
    pub fn flags_written(&self) -> usize {
        match self.output.len() {
            0 => 0,
            n => (n - 1) * 8 + self.bits_in_byte as usize,
        }
    }

    /// Get current output length in bytes (including partial byte)
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Peek at output without consuming
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Finish and return the header bytes
    pub fn finish(self) -> Vec<u8> {
        self.output
    }
}

impl Default for FlagWriter {
    fn default() -> Self {
        Self::new()
    }
}
