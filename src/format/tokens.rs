/// A single unit of the token stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A byte copied verbatim
    Literal(u8),
    /// Copy `length` bytes starting `distance` bytes behind the write position
    Reference { distance: u16, length: u8 },
}

impl Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Reference { length, .. } => *length as usize,
        }
    }

    /// Bytes this token occupies in the data stream
    pub fn encoded_size(&self) -> usize {
        match self {
            Token::Literal(_) => super::LITERAL_SIZE,
            Token::Reference { .. } => super::REFERENCE_SIZE,
        }
    }

    /// Header flag for this token: set for references, clear for literals
    #[inline]
    pub fn flag(&self) -> bool {
        matches!(self, Token::Reference { .. })
    }
}
