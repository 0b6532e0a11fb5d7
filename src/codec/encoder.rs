//! Single-pass encoder: walks the input once, asking the match finder for
//! a run at each position and emitting a reference or a literal.

use tracing::debug;

use crate::format::{Token, TokenStream};
use crate::matcher::{MatchFinder, Window};

/// Encoder progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncoderState {
    /// Input remains; the next step searches for a match
    Scanning,
    /// A token has been chosen; the next step records it and advances
    Emitting(Token),
    /// Input exhausted
    Done,
}

/// Encoder state machine over one input buffer
pub struct Encoder<'a> {
    window: Window<'a>,
    finder: MatchFinder,
    stream: TokenStream,
    state: EncoderState,
}

impl<'a> Encoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            window: Window::new(input),
            finder: MatchFinder::new(),
            stream: TokenStream::with_capacity(input.len()),
            state: EncoderState::Scanning,
        }
    }

    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// Input bytes consumed so far
    pub fn position(&self) -> usize {
        self.window.position()
    }

    /// Tokens emitted so far
    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    /// Advance the state machine by one transition
    pub fn step(&mut self) -> EncoderState {
        self.state = match self.state {
            EncoderState::Scanning => match self.window.lookahead().first() {
                None => EncoderState::Done,
                Some(&byte) => {
                    let token = match self.finder.find(&self.window) {
                        Some(m) => {
                            Token::Reference { distance: m.distance as u16, length: m.length as u8 }
                        }
                        None => Token::Literal(byte),
                    };
                    EncoderState::Emitting(token)
                }
            },
            EncoderState::Emitting(token) => {
                self.stream.push(token);
                self.window.advance(token.uncompressed_size());
                EncoderState::Scanning
            }
            EncoderState::Done => EncoderState::Done,
        };
        self.state
    }

    /// Run to completion and return the token stream
    pub fn finish(mut self) -> TokenStream {
        while self.step() != EncoderState::Done {}

        debug!(
            input_bytes = self.window.position(),
            literals = self.stream.literals(),
            references = self.stream.references(),
            header_bytes = self.stream.headers().len(),
            "encoded"
        );
        self.stream
    }
}

/// Encode a whole buffer into a token stream
pub fn encode(input: &[u8]) -> TokenStream {
    Encoder::new(input).finish()
}
