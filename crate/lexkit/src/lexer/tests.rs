use super::*;
use crate::{
    rules::{EolRule, NumberRule, StringRule, SymbolRule, WhitespaceRule},
    span::Span,
    token::{Scalar, kind},
};
use assert_matches::assert_matches;

const LBRACE: TokenType = TokenType::new("{");
const RBRACE: TokenType = TokenType::new("}");
const COLON: TokenType = TokenType::new(":");
const COMMA: TokenType = TokenType::new(",");

fn lexer() -> Lexer {
    Lexer::default()
        .with_rule(SymbolRule::new([('{', LBRACE), ('}', RBRACE), (':', COLON), (',', COMMA)]))
        .with_rule(StringRule::new())
        .with_rule(NumberRule::new())
        .with_rule(WhitespaceRule::new())
        .with_rule(EolRule::new())
}

fn types(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.ty).collect()
}

#[test]
fn test_empty_input() {
    assert_eq!(lexer().lex("").unwrap(), vec![]);
}

#[test]
fn test_object() {
    let tokens = lexer().lex(r#"{"a":1,"b":2.5}"#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(LBRACE, Span::point(1, 1)),
            Token::with_value(kind::STRING, Span::new(1, 2, 5), "a"),
            Token::new(COLON, Span::point(1, 5)),
            Token::with_value(kind::INT, Span::point(1, 6), 1),
            Token::new(COMMA, Span::point(1, 7)),
            Token::with_value(kind::STRING, Span::new(1, 8, 11), "b"),
            Token::new(COLON, Span::point(1, 11)),
            Token::with_value(kind::FLOAT, Span::new(1, 12, 15), 2.5),
            Token::new(RBRACE, Span::point(1, 15)),
        ]
    );
}

#[test]
fn test_number_does_not_consume_following_character() {
    let tokens = lexer().lex("12,").unwrap();
    assert_eq!(types(&tokens), [kind::INT, COMMA]);
    assert_eq!(tokens[0].span, Span::new(1, 1, 3));
    assert_eq!(tokens[1].span, Span::point(1, 3));
}

#[test]
fn test_string_consumes_closing_quote() {
    let tokens = lexer().lex(r#""a"}"#).unwrap();
    assert_eq!(types(&tokens), [kind::STRING, RBRACE]);
    assert_eq!(tokens[0].span, Span::new(1, 1, 4));
    assert_eq!(tokens[1].span, Span::point(1, 4));
}

#[test]
fn test_adjacent_literals() {
    let tokens = lexer().lex(r#""a""b"1"c""#).unwrap();
    assert_eq!(types(&tokens), [kind::STRING, kind::STRING, kind::INT, kind::STRING]);
    assert_eq!(tokens[2].span, Span::point(1, 7));
}

#[test]
fn test_multiline_positions() {
    let text = "{\n  \"key\": 10,\r\n  \"x\": -3\n}";
    let tokens = lexer().lex(text).unwrap();
    let positions: Vec<_> = tokens
        .iter()
        .filter(|t| t.ty != kind::WHITESPACE)
        .map(|t| (t.ty, t.span))
        .collect();
    assert_eq!(
        positions,
        vec![
            (LBRACE, Span::point(1, 1)),
            (kind::EOL, Span::point(1, 2)),
            (kind::STRING, Span::new(2, 3, 8)),
            (COLON, Span::point(2, 8)),
            (kind::INT, Span::new(2, 10, 12)),
            (COMMA, Span::point(2, 12)),
            (kind::EOL, Span::new(2, 13, 15)),
            (kind::STRING, Span::new(3, 3, 6)),
            (COLON, Span::point(3, 6)),
            (kind::INT, Span::new(3, 8, 10)),
            (kind::EOL, Span::point(3, 10)),
            (RBRACE, Span::point(4, 1)),
        ]
    );
}

#[test]
fn test_unexpected_character() {
    let err = lexer().lex("{\n  @}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert_eq!(err.span, Span::point(2, 3));
    assert_eq!(err.context.unwrap().found.as_deref(), Some("@"));
}

#[test]
fn test_unterminated_after_trailing_line_break() {
    let err = lexer().lex("{\"a\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);

    let err = lexer().lex("{\n\"a").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.span, Span::point(2, 3));
}

#[test]
fn test_discarding() {
    let mut lexer = lexer().discarding([kind::WHITESPACE, kind::EOL]);
    assert_eq!(lexer.discards(), [kind::WHITESPACE, kind::EOL]);

    let tokens = lexer.lex("{ \"a\" :\n\t1 }").unwrap();
    assert_eq!(types(&tokens), [LBRACE, kind::STRING, COLON, kind::INT, RBRACE]);
    assert_eq!(tokens[3].span, Span::point(2, 2));
}

#[test]
fn test_keeping() {
    let lexer = lexer().discarding([kind::WHITESPACE, kind::EOL, kind::WHITESPACE]).keeping([kind::EOL]);
    assert_eq!(lexer.discards(), [kind::WHITESPACE]);
}

#[test]
fn test_discard_is_pure_filter() {
    let tokens = lexer().lex("1 2").unwrap();
    let filtered = discard(tokens.clone(), &[kind::WHITESPACE]);
    assert_eq!(filtered, vec![tokens[0].clone(), tokens[2].clone()]);
    assert_eq!(discard(tokens.clone(), &[]), tokens);
}

#[test]
fn test_first_rule_wins() {
    const MINUS: TokenType = TokenType::new("-");

    let mut lexer = Lexer::default()
        .with_rule(SymbolRule::new([('-', MINUS)]))
        .with_rule(NumberRule::new());
    assert_eq!(types(&lexer.lex("-1").unwrap()), [MINUS, kind::INT]);

    let mut lexer = Lexer::default()
        .with_rule(NumberRule::new())
        .with_rule(SymbolRule::new([('-', MINUS)]));
    let tokens = lexer.lex("-1").unwrap();
    assert_eq!(types(&tokens), [kind::INT]);
    assert_eq!(tokens[0].value, Some(Scalar::Int(-1)));
}

#[test]
fn test_rule_names() {
    let lexer = lexer();
    assert_eq!(
        lexer.rule_names().collect::<Vec<_>>(),
        ["symbol", "string", "number", "whitespace", "eol"]
    );
    assert!(format!("{:?}", lexer).contains("\"number\""));
}

// ---

/// Emits `<` ... `>` blocks, gives up on `!` inside a block.
#[derive(Default)]
struct AngleRule {
    open: bool,
}

const ANGLE: TokenType = TokenType::new("ANGLE");

impl Rule for AngleRule {
    fn check(&mut self, ctx: &Context) -> Result<Check> {
        match (self.open, ctx.char()) {
            (false, '<') => {
                self.open = true;
                Ok(Check::Continue)
            }
            (false, _) => Ok(Check::NoMatch),
            (true, '>') => {
                self.open = false;
                Ok(Check::Emit(Token::with_value(ANGLE, ctx.span(), ctx.slice())))
            }
            (true, '!') => {
                self.open = false;
                Ok(Check::NoMatch)
            }
            (true, _) => Ok(Check::Continue),
        }
    }

    fn reset(&mut self) {
        self.open = false;
    }

    fn name(&self) -> &'static str {
        "angle"
    }
}

#[test]
fn test_custom_rule() {
    let mut lexer = Lexer::new(vec![Box::new(AngleRule::default()), Box::new(WhitespaceRule::new())]);
    let tokens = lexer.lex("<a b> <>").unwrap();
    assert_eq!(types(&tokens), [ANGLE, kind::WHITESPACE, ANGLE]);
    assert_eq!(tokens[0].value, Some(Scalar::String("<a b>".into())));
    assert_eq!(tokens[2].span, Span::new(1, 7, 9));
}

#[test]
fn test_continuing_rule_is_exclusive() {
    // digits inside the block never reach the number rule
    let mut lexer = Lexer::default().with_rule(NumberRule::new()).with_rule(AngleRule::default());
    let tokens = lexer.lex("<12>3").unwrap();
    assert_eq!(types(&tokens), [ANGLE, kind::INT]);
}

#[test]
fn test_continuing_rule_giving_up() {
    let mut lexer = Lexer::default().with_rule(AngleRule::default());
    let err = lexer.lex("<ab!>").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert_eq!(err.span, Span::point(1, 4));
}

#[test]
fn test_default_end_of_input() {
    let mut lexer = Lexer::default().with_rule(AngleRule::default());
    let err = lexer.lex("<ab").unwrap_err();
    assert_matches!(
        err,
        Error {
            kind: ErrorKind::UnexpectedEndOfInput,
            span: Span {
                line: 1,
                col_start: 4,
                col_end: 5
            },
            context: None,
            ..
        }
    );

    // the rule state is reset, so the lexer can be reused
    assert_eq!(types(&lexer.lex("<>").unwrap()), [ANGLE]);
}
