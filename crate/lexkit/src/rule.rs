// local imports
use crate::{
    context::Context,
    error::{Error, Result},
    token::Token,
};

// ---

/// Outcome of a single [`Rule::check`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// The character at the cursor is not recognized by the rule,
    /// the next rule is tried at the same position.
    NoMatch,
    /// A complete token ends at the character under the cursor.
    Emit(Token),
    /// The rule is inside a multi-character token and must see the next character.
    Continue,
}

/// Rule is a pluggable token matcher driven by the [`Lexer`](crate::Lexer).
///
/// A rule that returned [`Check::Continue`] is re-invoked exclusively for
/// every following character until it emits a token or fails.
/// Multi-character rules keep their in-progress state in `self` and must
/// clear it when they emit, fail or get [`reset`](Rule::reset).
pub trait Rule {
    fn check(&mut self, ctx: &Context) -> Result<Check>;

    /// Called when the input ends while the rule is continuing.
    fn end_of_input(&mut self, ctx: &Context) -> Error {
        self.reset();
        Error::unexpected_end_of_input(ctx.char_span())
    }

    fn reset(&mut self) {}

    fn name(&self) -> &'static str;
}

pub type BoxedRule = Box<dyn Rule + Send>;
