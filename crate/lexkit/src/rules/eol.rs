// local imports
use crate::{
    context::Context,
    error::Result,
    rule::{Check, Rule},
    token::{Token, kind},
};

// ---

/// EolRule emits an [`EOL`](kind::EOL) token for `\n`, `\r\n` or a lone `\r`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EolRule;

impl EolRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EolRule {
    fn check(&mut self, ctx: &Context) -> Result<Check> {
        Ok(match (ctx.char(), ctx.peek()) {
            ('\r', Some('\n')) => Check::Continue,
            ('\r' | '\n', _) => Check::Emit(Token::new(kind::EOL, ctx.span())),
            _ => Check::NoMatch,
        })
    }

    fn name(&self) -> &'static str {
        "eol"
    }
}
