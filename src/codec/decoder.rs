//! Decoder: replays the token stream onto a growing output buffer.

use tracing::debug;

use crate::error::{Corruption, Result};
use crate::format::{Container, Token};

/// Output buffer under reconstruction
pub struct Decoder {
    output: Vec<u8>,
    literals: usize,
    references: usize,
}

impl Decoder {
    pub fn new() -> Self {
        Self { output: Vec::new(), literals: 0, references: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), literals: 0, references: 0 }
    }

    /// Apply one token. `offset` is the token's position in the data
    /// section and only feeds error reports.
    pub fn apply(&mut self, token: Token, offset: usize) -> Result<()> {
        match token {
            Token::Literal(byte) => {
                self.output.push(byte);
                self.literals += 1;
            }
            Token::Reference { distance, length } => {
                self.copy_back(distance as usize, length as usize, offset)?;
                self.references += 1;
            }
        }
        Ok(())
    }

    /// Copy `length` bytes from `distance` bytes back.
    ///
    /// Byte by byte: when `length > distance` the source overlaps bytes
    /// written earlier in this same copy.
    fn copy_back(&mut self, distance: usize, length: usize, offset: usize) -> Result<()> {
        let available = self.output.len();
        if distance == 0 || distance > available {
            return Err(Corruption::DistanceOutOfRange { distance, available, offset }.into());
        }

        let start = available - distance;
        self.output.reserve(length);
        for i in 0..length {
            let byte = self.output[start + i];
            self.output.push(byte);
        }
        Ok(())
    }

    /// Bytes produced so far
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn literals(&self) -> usize {
        self.literals
    }

    pub fn references(&self) -> usize {
        self.references
    }

    /// Decode every token of a container
    pub fn decode_container(&mut self, container: &Container<'_>) -> Result<()> {
        let mut tokens = container.tokens();
        while let Some(token) = tokens.next() {
            let token = token?;
            let offset = tokens.data_offset() - token.encoded_size();
            self.apply(token, offset)?;
        }

        debug!(
            output_bytes = self.output.len(),
            literals = self.literals,
            references = self.references,
            "decoded"
        );
        Ok(())
    }

    pub fn finish(self) -> Vec<u8> {
        self.output
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a serialized container
pub fn decode(bytes: &[u8]) -> Result<Vec<u8>> {
    let container = Container::parse(bytes)?;
    let estimate = container.data().len().saturating_mul(2);
    let mut decoder = Decoder::with_capacity(estimate);
    decoder.decode_container(&container)?;
    Ok(decoder.finish())
}
