// std imports
use std::mem;

// local imports
use super::is_line_terminator;
use crate::{
    context::Context,
    error::{Error, ErrorContext, ErrorKind, Result},
    rule::{Check, Rule},
    span::Span,
    token::{Token, kind},
};

// ---

const QUOTE: char = '"';
const EXPECTED_QUOTE: &str = "'\"'";

/// StringRule recognizes double-quoted string literals and decodes their escape sequences.
///
/// The closing quote is part of the token.
#[derive(Debug, Clone, Default)]
pub struct StringRule {
    state: State,
    value: String,
}

impl StringRule {
    pub fn new() -> Self {
        Self::default()
    }

    fn body(&mut self, ctx: &Context) -> Result<Check> {
        match ctx.char() {
            QUOTE => {
                let value = mem::take(&mut self.value);
                self.state = State::Idle;
                Ok(Check::Emit(Token::with_value(kind::STRING, ctx.span(), value)))
            }
            '\\' => {
                self.state = State::Escape {
                    start: Anchor::at(ctx),
                };
                Ok(Check::Continue)
            }
            ch if is_line_terminator(ch) => self.fail(
                Error::new(ErrorKind::UnexpectedCharacter, ctx.char_span())
                    .with_context(ErrorContext::new([EXPECTED_QUOTE], None).found(ch.escape_debug().to_string())),
            ),
            ch => {
                self.value.push(ch);
                Ok(Check::Continue)
            }
        }
    }

    fn escape(&mut self, ctx: &Context, start: Anchor) -> Result<Check> {
        let decoded = match ctx.char() {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.state = State::Unicode {
                    start,
                    digits: 0,
                    code: 0,
                };
                return Ok(Check::Continue);
            }
            _ => return self.unsupported(ctx, start),
        };

        self.value.push(decoded);
        self.state = State::Body;
        Ok(Check::Continue)
    }

    fn unicode(&mut self, ctx: &Context, start: Anchor, digits: u8, code: u32) -> Result<Check> {
        let Some(digit) = ctx.char().to_digit(16) else {
            return self.unsupported(ctx, start);
        };

        let code = code * 16 + digit;
        let digits = digits + 1;

        if digits < 4 {
            self.state = State::Unicode { start, digits, code };
            return Ok(Check::Continue);
        }

        // surrogate halves do not map to a char
        let Some(ch) = char::from_u32(code) else {
            return self.unsupported(ctx, start);
        };

        self.value.push(ch);
        self.state = State::Body;
        Ok(Check::Continue)
    }

    fn unsupported(&mut self, ctx: &Context, start: Anchor) -> Result<Check> {
        let span = Span::new(ctx.line(), start.column, ctx.column() + 1);
        let sequence = &ctx.text()[start.offset..ctx.offset() + ctx.char().len_utf8()];
        self.fail(
            Error::new(ErrorKind::UnsupportedEscape, span)
                .with_context(ErrorContext::default().found(sequence.escape_debug().to_string())),
        )
    }

    fn fail(&mut self, err: Error) -> Result<Check> {
        self.reset();
        Err(err)
    }
}

impl Rule for StringRule {
    fn check(&mut self, ctx: &Context) -> Result<Check> {
        match self.state {
            State::Idle => {
                if ctx.char() != QUOTE {
                    return Ok(Check::NoMatch);
                }
                self.value.clear();
                self.state = State::Body;
                Ok(Check::Continue)
            }
            State::Body => self.body(ctx),
            State::Escape { start } => self.escape(ctx, start),
            State::Unicode { start, digits, code } => self.unicode(ctx, start, digits, code),
        }
    }

    fn end_of_input(&mut self, ctx: &Context) -> Error {
        self.reset();
        Error::unexpected_end_of_input(ctx.char_span()).with_context(ErrorContext::new([EXPECTED_QUOTE], None).found("EOI"))
    }

    fn reset(&mut self) {
        self.state = State::Idle;
        self.value.clear();
    }

    fn name(&self) -> &'static str {
        "string"
    }
}

// ---

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
enum State {
    #[default]
    Idle,
    Body,
    Escape {
        start: Anchor,
    },
    Unicode {
        start: Anchor,
        digits: u8,
        code: u32,
    },
}

/// Position of the backslash opening an escape sequence.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Anchor {
    column: usize,
    offset: usize,
}

impl Anchor {
    #[inline]
    fn at(ctx: &Context) -> Self {
        Self {
            column: ctx.column(),
            offset: ctx.offset(),
        }
    }
}
