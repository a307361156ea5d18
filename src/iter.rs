// std imports
use std::borrow::Cow;

// third-party imports
use lexkit::{Error, ErrorContext, Result, Span, Token};

// ---

/// Cursor over a token sequence with a single current token.
#[derive(Debug, Clone)]
pub struct TokenIterator<'t> {
    tokens: &'t [Token],
    index: usize,
}

impl<'t> TokenIterator<'t> {
    #[inline]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns the current token or `None` if the sequence is exhausted.
    #[inline]
    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.index)
    }

    #[inline]
    pub fn is_eoi(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Moves to the next token and returns it.
    #[inline]
    pub fn advance(&mut self) -> Option<&'t Token> {
        if !self.is_eoi() {
            self.index += 1;
        }
        self.current()
    }

    /// Moves to the next token and returns it, failing with an
    /// end of input error listing `expected` if there is none.
    pub fn advance_expecting(&mut self, expected: &[&'static str]) -> Result<&'t Token> {
        match self.advance() {
            Some(token) => Ok(token),
            None => Err(self.end_of_input(expected)),
        }
    }

    /// Returns the current token, failing with an end of input error
    /// listing `expected` if there is none.
    pub fn expect_current(&self, expected: &[&'static str]) -> Result<&'t Token> {
        match self.current() {
            Some(token) => Ok(token),
            None => Err(self.end_of_input(expected)),
        }
    }

    /// Returns the position right after the last token.
    pub fn end_span(&self) -> Span {
        match self.tokens.last() {
            Some(token) => token.span.after(),
            None => Span::default(),
        }
    }

    fn end_of_input(&self, expected: &[&'static str]) -> Error {
        Error::unexpected_end_of_input(self.end_span())
            .with_context(ErrorContext::new(expected.iter().copied().map(Cow::Borrowed), None).found("EOI"))
    }
}
