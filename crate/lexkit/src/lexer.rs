// std imports
use std::fmt;

// local imports
use crate::{
    context::Context,
    error::{Error, ErrorContext, ErrorKind, Result},
    rule::{BoxedRule, Check, Rule},
    token::{Token, TokenType, discard},
};

// ---

/// Lexer carves a text into tokens using an ordered list of rules.
///
/// At every position where a new token starts the rules are tried in order
/// and the first one that does not answer [`Check::NoMatch`] wins.
/// A rule answering [`Check::Continue`] owns all following characters
/// until it emits a token, so the lexer itself never backtracks.
#[derive(Default)]
pub struct Lexer {
    rules: Vec<BoxedRule>,
    discard: Vec<TokenType>,
}

impl Lexer {
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self {
            rules,
            discard: Vec::new(),
        }
    }

    /// Appends a rule with the lowest priority so far.
    pub fn with_rule<R: Rule + Send + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Configures token types to be dropped from the output after the scan.
    pub fn discarding(mut self, types: impl IntoIterator<Item = TokenType>) -> Self {
        for ty in types {
            if !self.discard.contains(&ty) {
                self.discard.push(ty);
            }
        }
        self
    }

    /// Stops discarding the given token types.
    pub fn keeping(mut self, types: impl IntoIterator<Item = TokenType>) -> Self {
        let keep: Vec<_> = types.into_iter().collect();
        self.discard.retain(|ty| !keep.contains(ty));
        self
    }

    #[inline]
    pub fn discards(&self) -> &[TokenType] {
        &self.discard
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Splits `text` into tokens.
    ///
    /// Either the complete token sequence is returned or the first error,
    /// there are no partial results.
    pub fn lex(&mut self, text: &str) -> Result<Vec<Token>> {
        self.reset();

        let tokens = self.scan(text).inspect_err(|err| {
            log::debug!("lexing failed: {}", err);
            self.reset();
        })?;

        log::debug!("lexed {} tokens", tokens.len());

        Ok(discard(tokens, &self.discard))
    }

    fn scan(&mut self, text: &str) -> Result<Vec<Token>> {
        let mut ctx = Context::new(text);
        let mut tokens = Vec::new();
        let mut active: Option<usize> = None;

        while !ctx.is_eoi() {
            let (index, check) = match active {
                Some(index) => (index, self.rules[index].check(&ctx)?),
                None => {
                    ctx.begin();
                    self.dispatch(&ctx)?
                }
            };

            match check {
                Check::Emit(token) => {
                    log::trace!("rule {} emitted {}", self.rules[index].name(), token);
                    tokens.push(token);
                    active = None;
                }
                Check::Continue => {
                    active = Some(index);
                }
                Check::NoMatch => {
                    // a continuing rule gave up in the middle of its token
                    return Err(unexpected_character(&ctx));
                }
            }

            ctx.advance();
        }

        if let Some(index) = active {
            let rule = &mut self.rules[index];
            log::trace!("rule {} is unterminated at end of input", rule.name());
            return Err(rule.end_of_input(&ctx));
        }

        Ok(tokens)
    }

    fn dispatch(&mut self, ctx: &Context) -> Result<(usize, Check)> {
        for (index, rule) in self.rules.iter_mut().enumerate() {
            match rule.check(ctx)? {
                Check::NoMatch => continue,
                check => return Ok((index, check)),
            }
        }

        Err(unexpected_character(ctx))
    }

    fn reset(&mut self) {
        for rule in &mut self.rules {
            rule.reset();
        }
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .field("discard", &self.discard)
            .finish()
    }
}

// ---

fn unexpected_character(ctx: &Context) -> Error {
    Error::new(ErrorKind::UnexpectedCharacter, ctx.char_span())
        .with_context(ErrorContext::default().found(ctx.char().escape_debug().to_string()))
}

#[cfg(test)]
mod tests;
