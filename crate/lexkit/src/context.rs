// local imports
use crate::span::Span;

// ---

/// Cursor state handed to rules during a single lexing pass.
///
/// Only the lexer advances the cursor and marks token starts,
/// rules inspect it through the read-only accessors.
#[derive(Debug, Clone)]
pub struct Context<'s> {
    text: &'s str,
    current: Option<char>,
    pos: Position,
    start: Position,
}

impl<'s> Context<'s> {
    pub fn new(text: &'s str) -> Self {
        let pos = Position {
            offset: 0,
            line: 1,
            column: 1,
        };

        Self {
            text,
            current: text.chars().next(),
            pos,
            start: pos,
        }
    }

    /// Returns the character under the cursor.
    ///
    /// Rules are only invoked while a character is available,
    /// after the end of input it returns `'\0'`.
    #[inline]
    pub fn char(&self) -> char {
        self.current.unwrap_or_default()
    }

    /// Returns the character following the one under the cursor.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let next = self.pos.offset + self.current?.len_utf8();
        self.text[next..].chars().next()
    }

    /// Returns the absolute byte offset of the character under the cursor.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.pos.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.pos.column
    }

    /// Returns the span from the start of the current token through the character under the cursor.
    #[inline]
    pub fn span(&self) -> Span {
        let end = if self.pos.line == self.start.line {
            self.pos.column + 1
        } else {
            self.start.column + 1
        };
        Span::new(self.start.line, self.start.column, end)
    }

    /// Returns the span of the character under the cursor alone.
    #[inline]
    pub fn char_span(&self) -> Span {
        Span::point(self.pos.line, self.pos.column)
    }

    /// Returns the text of the current token including the character under the cursor.
    #[inline]
    pub fn slice(&self) -> &'s str {
        let end = self.pos.offset + self.current.map(char::len_utf8).unwrap_or_default();
        &self.text[self.start.offset..end]
    }

    /// Returns the source text being scanned.
    #[inline]
    pub fn text(&self) -> &'s str {
        self.text
    }

    #[inline]
    pub fn is_eoi(&self) -> bool {
        self.current.is_none()
    }

    // ---

    /// Marks the character under the cursor as the start of a new token.
    #[inline]
    pub(crate) fn begin(&mut self) {
        self.start = self.pos;
    }

    /// Consumes the character under the cursor and moves to the next one.
    pub(crate) fn advance(&mut self) {
        let Some(ch) = self.current else {
            return;
        };

        let next = self.pos.offset + ch.len_utf8();
        let following = self.text[next..].chars().next();

        if ch == '\n' || (ch == '\r' && following != Some('\n')) {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }

        self.pos.offset = next;
        self.current = following;
    }
}

// ---

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Position {
    offset: usize,
    line: usize,
    column: usize,
}
