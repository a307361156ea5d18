// third-party imports
use lexkit::{Error, ErrorContext, Result, Scalar, Token};

// local imports
use crate::{
    iter::TokenIterator,
    syntax::{self, COLON, COMMA, FLOAT, INT, LBRACE, RBRACE, STRING},
    value::{Section, Value},
};

// ---

const EXPECTED_OPEN: [&str; 1] = ["'{'"];
const EXPECTED_FIELD: [&str; 2] = ["'}'", "field"];
const EXPECTED_NEXT: [&str; 2] = ["'}'", "','"];
const EXPECTED_KEY: [&str; 1] = ["key"];
const EXPECTED_COLON: [&str; 1] = ["':'"];
const EXPECTED_VALUE: [&str; 4] = ["int", "float", "string", "section"];
const EXPECTED_END: [&str; 1] = ["end of input"];

/// Maximum number of nested sections, including the top level one.
pub const MAX_DEPTH: usize = 256;

// ---

/// Lexes `text` with the standard lexer and parses the result.
pub fn parse_str(text: &str) -> Result<Section> {
    let tokens = syntax::lexer().lex(text)?;
    parse(&tokens)
}

/// Parses a complete document consisting of a single top level section.
///
/// Whitespace and line break tokens must be discarded beforehand.
pub fn parse(tokens: &[Token]) -> Result<Section> {
    let mut parser = Parser::new(tokens);
    let section = parser.parse_section()?;

    if let Some(token) = parser.it.advance() {
        return Err(unexpected(token, &EXPECTED_END));
    }

    log::debug!("parsed section with {} fields", section.len());

    Ok(section)
}

// ---

/// Recursive descent parser over a token sequence.
#[derive(Debug, Clone)]
pub struct Parser<'t> {
    it: TokenIterator<'t>,
    depth: usize,
}

impl<'t> Parser<'t> {
    #[inline]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            it: TokenIterator::new(tokens),
            depth: 0,
        }
    }

    #[inline]
    pub fn iter(&self) -> &TokenIterator<'t> {
        &self.it
    }

    /// Parses a section starting at the current token.
    ///
    /// > NOTE: the current token must be '{', on success the current token is the matching '}'.
    pub fn parse_section(&mut self) -> Result<Section> {
        let open = self.it.expect_current(&EXPECTED_OPEN)?;
        if !open.is(LBRACE) {
            return Err(unexpected(open, &EXPECTED_OPEN));
        }

        if self.depth >= MAX_DEPTH {
            return Err(Error::syntax(open.span).with_message("Nesting is too deep"));
        }

        self.depth += 1;
        let result = self.parse_fields();
        self.depth -= 1;

        result
    }

    fn parse_fields(&mut self) -> Result<Section> {
        let mut section = Section::new();

        loop {
            let token = self.it.advance_expecting(&EXPECTED_FIELD)?;
            if token.is(RBRACE) {
                return Ok(section);
            }

            let (key, value) = self.parse_field()?;
            // duplicate keys keep their first position but take the last value
            section.insert(key, value);

            let token = self.it.advance_expecting(&EXPECTED_NEXT)?;
            match token.ty {
                RBRACE => return Ok(section),
                COMMA => continue,
                _ => return Err(unexpected(token, &EXPECTED_NEXT)),
            }
        }
    }

    /// Parses a `key : value` field starting at the current token.
    ///
    /// > NOTE: on success the current token is the last token of the value.
    pub fn parse_field(&mut self) -> Result<(String, Value)> {
        let key = self.it.expect_current(&EXPECTED_KEY)?;
        let name = match (key.ty, &key.value) {
            (STRING, Some(Scalar::String(name))) => name.clone(),
            _ => return Err(unexpected(key, &EXPECTED_KEY)),
        };

        let colon = self.it.advance_expecting(&EXPECTED_COLON)?;
        if !colon.is(COLON) {
            return Err(unexpected(colon, &EXPECTED_COLON));
        }

        let value = self.parse_value()?;

        Ok((name, value))
    }

    /// Advances to the next token and parses a value starting there.
    pub fn parse_value(&mut self) -> Result<Value> {
        let token = self.it.advance_expecting(&EXPECTED_VALUE)?;

        match (token.ty, &token.value) {
            (STRING | INT | FLOAT, Some(value)) => Ok(value.clone().into()),
            (LBRACE, _) => self.parse_section().map(Value::Section),
            _ => Err(unexpected(token, &EXPECTED_VALUE)),
        }
    }
}

// ---

fn unexpected(token: &Token, expected: &[&'static str]) -> Error {
    Error::syntax(token.span).with_context(ErrorContext::new(expected.iter().copied(), None).found(token.ty.name()))
}
