//! Program and expression parsing.

use crate::{parse, ParseError, ParseOutput};
use pretty_assertions::assert_eq;
use quill_diagnostic::ErrorCode;
use quill_ir::{BinaryOp, ExprKind, Span, StringInterner, UnaryOp};

fn parse_source(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let tokens = quill_lexer::lex(source, &interner);
    let output = parse(&tokens, &interner).unwrap();
    (output, interner)
}

fn parse_error(source: &str) -> ParseError {
    let interner = StringInterner::new();
    let tokens = quill_lexer::lex(source, &interner);
    parse(&tokens, &interner).unwrap_err()
}

#[test]
fn test_empty_program() {
    let (output, _) = parse_source("\n// only a comment\n\n");
    assert!(output.items.is_empty());
    assert_eq!(output.arena.expr_count(), 0);
}

#[test]
fn test_items_in_source_order() {
    let (output, _) = parse_source("1\n\n2\n3");
    let kinds: Vec<_> = output
        .items
        .iter()
        .map(|&id| output.arena.get_expr(id).kind)
        .collect();
    assert_eq!(
        kinds,
        vec![ExprKind::Int(1), ExprKind::Int(2), ExprKind::Int(3)]
    );
}

#[test]
fn test_var_and_assignment() {
    let (output, interner) = parse_source("var count = 0\ncount = count + 1");
    let count = interner.intern("count");

    let define = output.arena.get_expr(output.items[0]);
    assert!(matches!(define.kind, ExprKind::Let { name, .. } if name == count));
    assert_eq!(define.span, Span::new(0, 13));

    let ExprKind::Assign { name, value } = output.arena.get_expr(output.items[1]).kind else {
        panic!("expected assignment");
    };
    assert_eq!(name, count);
    assert!(matches!(
        output.arena.get_expr(value).kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
}

#[test]
fn test_assignment_is_right_associative() {
    let (output, _) = parse_source("a = b = 1");
    let ExprKind::Assign { value, .. } = output.arena.get_expr(output.items[0]).kind else {
        panic!("expected assignment");
    };
    assert!(matches!(
        output.arena.get_expr(value).kind,
        ExprKind::Assign { .. }
    ));
}

#[test]
fn test_additive_binds_tighter_than_equality() {
    let (output, _) = parse_source("1 + 2 == 3");
    let ExprKind::Binary {
        op: BinaryOp::Eq,
        left,
        right,
    } = output.arena.get_expr(output.items[0]).kind
    else {
        panic!("expected equality at the root");
    };
    assert!(matches!(
        output.arena.get_expr(left).kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
    assert_eq!(output.arena.get_expr(right).kind, ExprKind::Int(3));
}

#[test]
fn test_subtraction_is_left_associative() {
    let (output, _) = parse_source("5 - 2 - 1");
    let ExprKind::Binary { left, right, .. } = output.arena.get_expr(output.items[0]).kind else {
        panic!("expected subtraction");
    };
    assert!(matches!(
        output.arena.get_expr(left).kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
    assert_eq!(output.arena.get_expr(right).kind, ExprKind::Int(1));
}

#[test]
fn test_negation() {
    let (output, _) = parse_source("-5\n-(1)\n-9223372036854775808");
    let arena = &output.arena;
    assert_eq!(arena.get_expr(output.items[0]).kind, ExprKind::Int(-5));
    assert_eq!(arena.get_expr(output.items[0]).span, Span::new(0, 2));
    assert!(matches!(
        arena.get_expr(output.items[1]).kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
    assert_eq!(arena.get_expr(output.items[2]).kind, ExprKind::Int(i64::MIN));
}

#[test]
fn test_literals() {
    let (output, interner) = parse_source("true\nfalse\nnothing\n\"hi\"");
    let kinds: Vec<_> = output
        .items
        .iter()
        .map(|&id| output.arena.get_expr(id).kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ExprKind::Bool(true),
            ExprKind::Bool(false),
            ExprKind::Unit,
            ExprKind::String(interner.intern("hi")),
        ]
    );
}

#[test]
fn test_match_is_an_expression() {
    let (output, _) = parse_source("var r = match 1\nelse 2\nend\nr");
    assert_eq!(output.items.len(), 2);
    let ExprKind::Let { init, .. } = output.arena.get_expr(output.items[0]).kind else {
        panic!("expected var");
    };
    assert!(matches!(
        output.arena.get_expr(init).kind,
        ExprKind::Block(_)
    ));
}

#[test]
fn test_deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let (output, _) = parse_source(&source);
    assert_eq!(output.arena.get_expr(output.items[0]).kind, ExprKind::Int(1));
}

#[test]
fn test_items_must_be_separated_by_newlines() {
    let err = parse_error("1 2");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn test_expected_expression() {
    let err = parse_error("var x = then");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.span, Span::new(8, 12));
}

#[test]
fn test_var_requires_name() {
    let err = parse_error("var 1 = 2");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected identifier, found integer");
}

#[test]
fn test_integer_too_large() {
    let err = parse_error("9223372036854775808");
    assert_eq!(err.code, ErrorCode::E0003);
}

#[test]
fn test_integer_beyond_u64_is_too_large() {
    let err = parse_error("99999999999999999999");
    assert_eq!(err.code, ErrorCode::E0003);
    assert_eq!(err.span, Span::new(0, 20));

    let err = parse_error("var x = -99999999999999999999");
    assert_eq!(err.code, ErrorCode::E0003);
    assert_eq!(err.span, Span::new(8, 29));
}

#[test]
fn test_invalid_token() {
    let err = parse_error("1 + $");
    assert_eq!(err.code, ErrorCode::E0002);
    assert_eq!(err.span, Span::new(4, 5));
}

#[test]
fn test_unclosed_paren() {
    let err = parse_error("(1 + 2");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `)`, found end of file");
}
