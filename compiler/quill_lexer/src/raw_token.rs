//! Raw token definition.
//!
//! The logos-derived tokenizer output before string interning.

use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("match")]
    Match,
    #[token("case")]
    Case,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("end")]
    End,
    #[token("var")]
    Var,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nothing")]
    Nothing,

    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Integer (zero-allocation parsing). The payload is `None` when the
    // literal overflows `u64`, so the parser can report it as a number.
    #[regex(r"[0-9][0-9_]*", |lex| Some(parse_int_skip_underscores(lex.slice())))]
    Int(Option<u64>),

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Parse a decimal integer, skipping `_` separators.
fn parse_int_skip_underscores(s: &str) -> Option<u64> {
    let mut value: u64 = 0;
    for byte in s.bytes() {
        if byte == b'_' {
            continue;
        }
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(byte - b'0'))?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_skip_underscores() {
        assert_eq!(parse_int_skip_underscores("1_000"), Some(1000));
        assert_eq!(parse_int_skip_underscores("0"), Some(0));
        assert_eq!(parse_int_skip_underscores("99999999999999999999999"), None);
    }
}
