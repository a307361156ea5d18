//! Character stream tokenizer driven by an ordered list of pluggable rules.
//!
//! ```
//! use lexkit::{Lexer, rules::{NumberRule, SymbolRule, WhitespaceRule}, token::{TokenType, kind}};
//!
//! const PLUS: TokenType = TokenType::new("+");
//!
//! let mut lexer = Lexer::default()
//!     .with_rule(SymbolRule::new([('+', PLUS)]))
//!     .with_rule(NumberRule::new())
//!     .with_rule(WhitespaceRule::new())
//!     .discarding([kind::WHITESPACE]);
//!
//! let tokens = lexer.lex("1 + 2").unwrap();
//! let types: Vec<_> = tokens.iter().map(|t| t.ty).collect();
//! assert_eq!(types, [kind::INT, PLUS, kind::INT]);
//! ```

pub mod context;
pub mod error;
pub mod lexer;
pub mod rule;
pub mod rules;
pub mod span;
pub mod token;

pub use context::Context;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use lexer::Lexer;
pub use rule::{BoxedRule, Check, Rule};
pub use span::Span;
pub use token::{Scalar, Token, TokenType, discard};
