use super::*;
use quill_diagnostic::ErrorCode;

/// Owns the token list and interner so `Cursor` can borrow them.
struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = quill_lexer::lex(source, &interner);
        Self { tokens, interner }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, &self.interner)
    }
}

#[test]
fn test_cursor_navigation() {
    let ctx = TestCtx::new("var x = 42");
    let mut cursor = ctx.cursor();

    assert!(cursor.check(&TokenKind::Var));
    assert!(!cursor.is_at_end());

    cursor.advance();
    assert!(cursor.check(&TokenKind::Ident(Name::EMPTY)));
    assert_eq!(cursor.peek_next_kind(), TokenKind::Eq);

    cursor.advance();
    cursor.advance();
    assert!(matches!(cursor.current_kind(), TokenKind::Int(42)));

    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_advance_stops_at_eof() {
    let ctx = TestCtx::new("end");
    let mut cursor = ctx.cursor();

    cursor.advance();
    let eof = cursor.advance();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.peek_next_kind(), TokenKind::Eof);
}

#[test]
fn test_eat_only_consumes_on_match() {
    let ctx = TestCtx::new("case 1");
    let mut cursor = ctx.cursor();

    assert!(!cursor.eat(&TokenKind::Else));
    assert_eq!(cursor.position(), 0);
    assert!(cursor.eat(&TokenKind::Case));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_expect_failure_reports_found_token() {
    let ctx = TestCtx::new("case 1");
    let mut cursor = ctx.cursor();

    let err = cursor.expect(&TokenKind::Then).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.span, Span::new(0, 4));
    assert!(err.message.contains("`then`"));
    assert!(err.message.contains("`case`"));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_check_any_does_not_consume() {
    let ctx = TestCtx::new("else");
    let cursor = ctx.cursor();

    assert!(cursor.check_any(&[TokenKind::Case, TokenKind::Else, TokenKind::End]));
    assert!(!cursor.check_any(&[TokenKind::Case, TokenKind::End]));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_binding_name_requires_lowercase_initial() {
    let ctx = TestCtx::new("value Int _x");
    let mut cursor = ctx.cursor();

    assert_eq!(cursor.check_binding_name(), Some(ctx.interner.intern("value")));
    cursor.advance();
    assert_eq!(cursor.check_binding_name(), None);
    cursor.advance();
    assert_eq!(cursor.check_binding_name(), None);
}

#[test]
fn test_previous_span() {
    let ctx = TestCtx::new("match x");
    let mut cursor = ctx.cursor();

    assert_eq!(cursor.previous_span(), Span::DUMMY);
    cursor.advance();
    assert_eq!(cursor.previous_span(), Span::new(0, 5));
}
