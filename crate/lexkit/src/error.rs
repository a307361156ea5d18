// std imports
use std::{
    borrow::Cow,
    fmt::{self, Display, Write},
};

// third-party imports
use itertools::Itertools;
use thiserror::Error;

// local imports
use crate::span::Span;

// ---

/// Error is a failure of a lexing or parsing attempt.
///
/// It is terminal: once constructed it is only propagated and queried.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message} at {span}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Cow<'static, str>,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            message: kind.message().into(),
            span,
            context: None,
        }
    }

    #[inline]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    #[inline]
    pub fn unexpected_end_of_input(span: Span) -> Self {
        Self::new(ErrorKind::UnexpectedEndOfInput, span)
    }

    #[inline]
    pub fn syntax(span: Span) -> Self {
        Self::new(ErrorKind::Syntax, span)
    }

    /// Renders the error with the referenced source line and a caret marker.
    pub fn pretty_print(&self, source: &str) -> String {
        let mut buf = String::new();
        // writing into a String never fails
        let _ = self.write_pretty(&mut buf, source);
        buf
    }

    pub fn write_pretty<W: Write>(&self, w: &mut W, source: &str) -> fmt::Result {
        writeln!(w, "Error: {}", self.message)?;

        // the span may point one line past the last one at the end of input
        if let Some(line) = lines(source).nth(self.span.line.saturating_sub(1)) {
            writeln!(w, "{}", line)?;
        }

        let indent = self.span.col_start.saturating_sub(1);
        let width = self.span.len().max(1);
        writeln!(w, "{:indent$}{}", "", "^".repeat(width), indent = indent)?;
        writeln!(w, "Occurs at: {}", self.span)?;

        if let Some(context) = &self.context {
            writeln!(w, "{}", context)?;
        }

        Ok(())
    }
}

// ---

/// Splits `source` into lines the same way positions are counted,
/// treating `\r\n`, `\n` and a lone `\r` as one line break each.
fn lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let text = rest.take()?;
        match text.find(['\r', '\n']) {
            Some(i) => {
                let n = if text[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[i + n..]);
                Some(&text[..i])
            }
            None if text.is_empty() => None,
            None => Some(text),
        }
    })
}

// ---

/// ErrorKind is the fixed set of built-in failure causes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    UnexpectedCharacter,
    UnexpectedEndOfInput,
    UnsupportedEscape,
    InvalidNumber,
    Syntax,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter => "Unexpected character",
            Self::UnexpectedEndOfInput => "Unexpected end of input",
            Self::UnsupportedEscape => "Unsupported escape sequence",
            Self::InvalidNumber => "Invalid number literal",
            Self::Syntax => "Syntax error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---

/// Expected-versus-found description attached to an error.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct ErrorContext {
    pub expected: Vec<Cow<'static, str>>,
    pub found: Option<String>,
}

impl ErrorContext {
    pub fn new<I, S>(expected: I, found: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            expected: expected.into_iter().map(Into::into).collect(),
            found,
        }
    }

    #[inline]
    pub fn found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.expected.is_empty(), &self.found) {
            (true, Some(found)) => write!(f, "Found '{}'", found),
            (_, Some(found)) => write!(f, "Expected {}, found '{}'", self.expected.iter().join(", "), found),
            (_, None) => write!(f, "Expected {}", self.expected.iter().join(", ")),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
