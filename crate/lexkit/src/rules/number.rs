// local imports
use crate::{
    context::Context,
    error::{Error, ErrorContext, ErrorKind, Result},
    rule::{Check, Rule},
    span::Span,
    token::{Token, kind},
};

// ---

/// NumberRule recognizes `-?digits(.digits)?([eE][+-]?digits)?` literals.
///
/// Literals without a fraction or an exponent become [`INT`](kind::INT) tokens,
/// all others become [`FLOAT`](kind::FLOAT) tokens.
/// The rule looks at the next character to decide whether the literal ends,
/// so it never consumes a character following the literal.
#[derive(Debug, Clone, Default)]
pub struct NumberRule {
    state: State,
}

impl NumberRule {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, ctx: &Context, state: State) -> Result<Check> {
        self.state = State::Idle;

        let text = ctx.slice();
        let token = if state == State::Int {
            match text.parse::<i64>() {
                Ok(value) => Token::with_value(kind::INT, ctx.span(), value),
                Err(_) => {
                    return Err(Error::new(ErrorKind::InvalidNumber, ctx.span())
                        .with_message("Integer literal is out of range")
                        .with_context(ErrorContext::default().found(text)));
                }
            }
        } else {
            match text.parse::<f64>() {
                Ok(value) => Token::with_value(kind::FLOAT, ctx.span(), value),
                Err(_) => {
                    return Err(Error::new(ErrorKind::InvalidNumber, ctx.span())
                        .with_context(ErrorContext::default().found(text)));
                }
            }
        };

        Ok(Check::Emit(token))
    }

    fn fail(&mut self, span: Span, found: Option<char>) -> Result<Check> {
        self.reset();
        let found = match found {
            Some(ch) => ch.escape_debug().to_string(),
            None => "EOI".to_owned(),
        };
        Err(Error::new(ErrorKind::InvalidNumber, span).with_context(ErrorContext::new(["digit"], None).found(found)))
    }
}

impl Rule for NumberRule {
    fn check(&mut self, ctx: &Context) -> Result<Check> {
        let ch = ctx.char();
        let next = ctx.peek();

        let state = match self.state {
            State::Idle => match ch {
                '0'..='9' => State::Int,
                '-' if next.is_some_and(|c| c.is_ascii_digit()) => State::Sign,
                _ => return Ok(Check::NoMatch),
            },
            state => match state.step(ch) {
                Some(state) => state,
                None => return self.fail(ctx.char_span(), Some(ch)),
            },
        };

        if next.and_then(|c| state.step(c)).is_some() {
            self.state = state;
            return Ok(Check::Continue);
        }

        if state.is_terminal() {
            return self.emit(ctx, state);
        }

        self.fail(Span::point(ctx.line(), ctx.column() + 1), next)
    }

    fn reset(&mut self) {
        self.state = State::Idle;
    }

    fn name(&self) -> &'static str {
        "number"
    }
}

// ---

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
enum State {
    #[default]
    Idle,
    Sign,
    Int,
    Dot,
    Frac,
    Exp,
    ExpSign,
    ExpDigits,
}

impl State {
    fn step(self, ch: char) -> Option<Self> {
        let digit = ch.is_ascii_digit();
        match (self, ch) {
            (Self::Sign | Self::Int, _) if digit => Some(Self::Int),
            (Self::Int, '.') => Some(Self::Dot),
            (Self::Dot | Self::Frac, _) if digit => Some(Self::Frac),
            (Self::Int | Self::Frac, 'e' | 'E') => Some(Self::Exp),
            (Self::Exp, '+' | '-') => Some(Self::ExpSign),
            (Self::Exp | Self::ExpSign | Self::ExpDigits, _) if digit => Some(Self::ExpDigits),
            _ => None,
        }
    }

    #[inline]
    fn is_terminal(self) -> bool {
        matches!(self, Self::Int | Self::Frac | Self::ExpDigits)
    }
}
