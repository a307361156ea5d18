// local imports
use crate::{
    context::Context,
    error::Result,
    rule::{Check, Rule},
    token::{Token, TokenType},
};

// ---

/// SymbolRule emits a single-character token for each character of its table.
#[derive(Debug, Clone, Default)]
pub struct SymbolRule {
    symbols: Vec<(char, TokenType)>,
}

impl SymbolRule {
    pub fn new(symbols: impl IntoIterator<Item = (char, TokenType)>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn with(mut self, ch: char, ty: TokenType) -> Self {
        self.symbols.push((ch, ty));
        self
    }

    pub fn symbols(&self) -> impl Iterator<Item = (char, TokenType)> + '_ {
        self.symbols.iter().copied()
    }
}

impl Rule for SymbolRule {
    fn check(&mut self, ctx: &Context) -> Result<Check> {
        let ch = ctx.char();
        Ok(match self.symbols.iter().find(|(c, _)| *c == ch) {
            Some((_, ty)) => Check::Emit(Token::new(*ty, ctx.span())),
            None => Check::NoMatch,
        })
    }

    fn name(&self) -> &'static str {
        "symbol"
    }
}
