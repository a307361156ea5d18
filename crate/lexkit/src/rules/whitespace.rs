// local imports
use super::is_line_terminator;
use crate::{
    context::Context,
    error::Result,
    rule::{Check, Rule},
    token::{Token, kind},
};

// ---

/// WhitespaceRule folds a run of blanks into one [`WHITESPACE`](kind::WHITESPACE) token.
///
/// Line terminators are left for [`EolRule`](super::EolRule).
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceRule;

impl WhitespaceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for WhitespaceRule {
    fn check(&mut self, ctx: &Context) -> Result<Check> {
        if !is_blank(ctx.char()) {
            return Ok(Check::NoMatch);
        }

        Ok(match ctx.peek() {
            Some(next) if is_blank(next) => Check::Continue,
            _ => Check::Emit(Token::new(kind::WHITESPACE, ctx.span())),
        })
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[inline]
fn is_blank(ch: char) -> bool {
    ch.is_whitespace() && !is_line_terminator(ch)
}
