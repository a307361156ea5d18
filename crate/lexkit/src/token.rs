// std imports
use std::fmt::{self, Display};

// third-party imports
use derive_more::Display;

// local imports
use crate::span::Span;

// ---

/// Type tag of a token.
///
/// Tags form an open namespace: a rule set introduces its own token kinds
/// by declaring new constants, the engine never inspects them.
#[derive(Debug, Display, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TokenType(&'static str);

impl TokenType {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl From<TokenType> for &'static str {
    #[inline]
    fn from(ty: TokenType) -> Self {
        ty.0
    }
}

// ---

/// Token types produced by the built-in rules.
pub mod kind {
    use super::TokenType;

    pub const STRING: TokenType = TokenType::new("STRING");
    pub const INT: TokenType = TokenType::new("INT");
    pub const FLOAT: TokenType = TokenType::new("FLOAT");
    pub const WHITESPACE: TokenType = TokenType::new("WHITESPACE");
    pub const EOL: TokenType = TokenType::new("EOL");
}

// ---

/// Decoded value carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(f64),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{:?}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<String> for Scalar {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Scalar {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<i64> for Scalar {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

// ---

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub ty: TokenType,
    pub span: Span,
    pub value: Option<Scalar>,
}

impl Token {
    #[inline]
    pub fn new(ty: TokenType, span: Span) -> Self {
        Self { ty, span, value: None }
    }

    #[inline]
    pub fn with_value(ty: TokenType, span: Span, value: impl Into<Scalar>) -> Self {
        Self {
            ty,
            span,
            value: Some(value.into()),
        }
    }

    #[inline]
    pub fn is(&self, ty: TokenType) -> bool {
        self.ty == ty
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({})@{}", self.ty, value, self.span),
            None => write!(f, "{}@{}", self.ty, self.span),
        }
    }
}

/// Drops all tokens whose type is listed in `types`.
pub fn discard(tokens: Vec<Token>, types: &[TokenType]) -> Vec<Token> {
    if types.is_empty() {
        return tokens;
    }
    tokens.into_iter().filter(|t| !types.contains(&t.ty)).collect()
}
