use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner);
    (tokens.kinds(), interner)
}

#[test]
fn test_match_header_and_case() {
    let (kinds, interner) = kinds("match x\ncase 1 then \"one\"\nend");
    let x = interner.intern("x");
    let one = interner.intern("one");

    assert_eq!(
        kinds,
        vec![
            TokenKind::Match,
            TokenKind::Ident(x),
            TokenKind::Newline,
            TokenKind::Case,
            TokenKind::Int(1),
            TokenKind::Then,
            TokenKind::String(one),
            TokenKind::Newline,
            TokenKind::End,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_blank_and_comment_lines_collapse() {
    let (kinds, _) = kinds("\n\n1\n\n// note\n\n2\n");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Int(2),
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_are_not_identifier_prefixes() {
    let (kinds, interner) = kinds("ending cases");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident(interner.intern("ending")),
            TokenKind::Ident(interner.intern("cases")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_operators() {
    let (kinds, _) = kinds("= == != + - ( )");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_escapes_are_resolved() {
    let (kinds, interner) = kinds(r#""a\tb""#);
    assert_eq!(kinds[0], TokenKind::String(interner.intern("a\tb")));
}

#[test]
fn test_invalid_character_becomes_error_token() {
    let (kinds, _) = kinds("1 ? 2");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int(1),
            TokenKind::Error,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_overflowing_integer_is_still_an_integer() {
    let interner = StringInterner::new();
    let tokens = lex("x 184467440737095516160", &interner);
    assert_eq!(tokens[1].kind, TokenKind::IntOverflow);
    assert_eq!(tokens[1].span, Span::new(2, 23));
    assert_eq!(tokens[1].kind.display_name(), "integer");

    let (kinds, _) = kinds("18446744073709551615");
    assert_eq!(kinds, vec![TokenKind::Int(u64::MAX), TokenKind::Eof]);
}

#[test]
fn test_spans_and_eof_position() {
    let interner = StringInterner::new();
    let tokens = lex("var x", &interner);
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(4, 5));
    assert_eq!(tokens[2].kind, TokenKind::Eof);
    assert_eq!(tokens[2].span, Span::point(5));
}
