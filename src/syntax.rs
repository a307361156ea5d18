// third-party imports
use lexkit::{
    Lexer,
    rules::{EolRule, NumberRule, StringRule, SymbolRule, WhitespaceRule},
    token::{TokenType, kind},
};

// ---

pub const LBRACE: TokenType = TokenType::new("{");
pub const RBRACE: TokenType = TokenType::new("}");
pub const COLON: TokenType = TokenType::new(":");
pub const COMMA: TokenType = TokenType::new(",");

pub use kind::{EOL, FLOAT, INT, STRING, WHITESPACE};

/// All token types the standard lexer can produce.
pub const TOKEN_TYPES: [TokenType; 9] = [LBRACE, RBRACE, COLON, COMMA, STRING, INT, FLOAT, WHITESPACE, EOL];

/// Token types dropped before parsing unless configured otherwise.
pub const DEFAULT_DISCARD: [TokenType; 2] = [WHITESPACE, EOL];

// ---

/// Returns the symbol rule recognizing section punctuation.
pub fn symbols() -> SymbolRule {
    SymbolRule::new([('{', LBRACE), ('}', RBRACE), (':', COLON), (',', COMMA)])
}

/// Returns the standard lexer for section documents.
///
/// Symbols go first so that punctuation never reaches the literal rules.
pub fn lexer() -> Lexer {
    Lexer::default()
        .with_rule(symbols())
        .with_rule(StringRule::new())
        .with_rule(NumberRule::new())
        .with_rule(WhitespaceRule::new())
        .with_rule(EolRule::new())
        .discarding(DEFAULT_DISCARD)
}

/// Looks up a token type by its name.
pub fn token_type(name: &str) -> Option<TokenType> {
    TOKEN_TYPES.iter().copied().find(|ty| ty.name() == name)
}
