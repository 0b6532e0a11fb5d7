//! Container layout:
//!
//! ```text
//! [8 bytes]             header count, u64 little-endian
//! [header count bytes]  token flags, 8 per byte, LSB = first token of the group
//! [remaining bytes]     token data, 1 byte per literal, 2 per reference
//! ```

use std::io::Write;

use super::packing::{pack, unpack};
use super::tokens::Token;
use super::{COUNT_PREFIX_LEN, LITERAL_SIZE, REFERENCE_SIZE};
use crate::bits::{FlagReader, FlagWriter};
use crate::error::{Corruption, Result};

/// Append-only token stream, split into header flags and token data
pub struct TokenStream {
    flags: FlagWriter,
    data: Vec<u8>,
    literals: usize,
    references: usize,
}

impl TokenStream {
    pub fn new() -> Self {
        Self { flags: FlagWriter::new(), data: Vec::new(), literals: 0, references: 0 }
    }

    /// Pre-size buffers for an input of `input_len` bytes
    pub fn with_capacity(input_len: usize) -> Self {
        Self {
            flags: FlagWriter::with_capacity(input_len),
            data: Vec::with_capacity(input_len),
            literals: 0,
            references: 0,
        }
    }

    /// Build a stream from a token sequence
    pub fn from_tokens<I: IntoIterator<Item = Token>>(tokens: I) -> Self {
        let mut stream = Self::new();
        for token in tokens {
            stream.push(token);
        }
        stream
    }

    /// Append a token: one header flag plus its data bytes
    pub fn push(&mut self, token: Token) {
        self.flags.write_flag(token.flag());
        match token {
            Token::Literal(byte) => {
                self.data.push(byte);
                self.literals += 1;
            }
            Token::Reference { distance, length } => {
                self.data.extend_from_slice(&pack(distance as usize, length as usize));
                self.references += 1;
            }
        }
    }

    pub fn headers(&self) -> &[u8] {
        self.flags.as_bytes()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.literals + self.references
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn literals(&self) -> usize {
        self.literals
    }

    pub fn references(&self) -> usize {
        self.references
    }

    /// Size of the serialized container
    pub fn container_len(&self) -> usize {
        COUNT_PREFIX_LEN + self.flags.len() + self.data.len()
    }

    /// Serialize into a fresh buffer
    pub fn to_container(&self) -> Vec<u8> {
        encode_container(self.headers(), self.data())
    }

    /// Serialize into a writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(&(self.flags.len() as u64).to_le_bytes())?;
        writer.write_all(self.headers())?;
        writer.write_all(self.data())
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize raw header and data sections
pub fn encode_container(headers: &[u8], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(COUNT_PREFIX_LEN + headers.len() + data.len());
    out.extend_from_slice(&(headers.len() as u64).to_le_bytes());
    out.extend_from_slice(headers);
    out.extend_from_slice(data);
    out
}

/// Borrowed view of a serialized container
#[derive(Clone, Copy, Debug)]
pub struct Container<'a> {
    headers: &'a [u8],
    data: &'a [u8],
}

impl<'a> Container<'a> {
    /// Split a serialized container into its header and data sections
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < COUNT_PREFIX_LEN {
            return Err(Corruption::TruncatedPrefix { len: bytes.len() }.into());
        }

        let (prefix, rest) = bytes.split_at(COUNT_PREFIX_LEN);
        let mut count = [0u8; COUNT_PREFIX_LEN];
        count.copy_from_slice(prefix);
        let header_count = u64::from_le_bytes(count);

        let header_len = usize::try_from(header_count)
            .ok()
            .filter(|&n| n <= rest.len())
            .ok_or(Corruption::HeaderOverrun { header_count, available: rest.len() })?;

        let (headers, data) = rest.split_at(header_len);
        Ok(Self { headers, data })
    }

    pub fn headers(&self) -> &'a [u8] {
        self.headers
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Iterate over the tokens, left to right
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens { flags: FlagReader::new(self.headers), data: self.data, cursor: 0, done: false }
    }
}

/// Token iterator over a container's sections.
///
/// Ends cleanly when the data cursor reaches the end of the data section;
/// unused header bits past that point are never consulted. Yields a single
/// error and then stops if the sections disagree.
pub struct Tokens<'a> {
    flags: FlagReader<'a>,
    data: &'a [u8],
    cursor: usize,
    done: bool,
}

impl Tokens<'_> {
    /// Offset of the next unread data byte
    pub fn data_offset(&self) -> usize {
        self.cursor
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.cursor == self.data.len() {
            return Ok(None);
        }

        let is_reference = self.flags.read_flag().ok_or(Corruption::TrailingData {
            consumed: self.cursor,
            total: self.data.len(),
        })?;

        let remaining = self.data.len() - self.cursor;
        if is_reference {
            if remaining < REFERENCE_SIZE {
                return Err(Corruption::TruncatedData {
                    offset: self.cursor,
                    needed: REFERENCE_SIZE,
                    remaining,
                }
                .into());
            }
            let (distance, length) = unpack(self.data[self.cursor], self.data[self.cursor + 1]);
            self.cursor += REFERENCE_SIZE;
            Ok(Some(Token::Reference { distance: distance as u16, length: length as u8 }))
        } else {
            let byte = self.data[self.cursor];
            self.cursor += LITERAL_SIZE;
            Ok(Some(Token::Literal(byte)))
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
