//! Built-in rules.
//!
//! Rules are tried in the order they were added to the [`Lexer`](crate::Lexer),
//! so symbol rules should go before the general purpose ones.

mod eol;
mod number;
mod string;
mod symbol;
mod whitespace;

pub use eol::EolRule;
pub use number::NumberRule;
pub use string::StringRule;
pub use symbol::SymbolRule;
pub use whitespace::WhitespaceRule;

// ---

#[inline]
pub(crate) fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}
