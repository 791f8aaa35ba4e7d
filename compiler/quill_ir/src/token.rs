//! Tokens produced by the lexer.

use std::fmt;
use std::mem;
use std::ops::Index;

use crate::{Name, Span};

/// Token kinds.
///
/// Literal payloads are interned (`Name`) or stored inline, so the kind is
/// `Copy` and cheap to compare.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// Integer literal, unsigned; negation is a separate `-` token.
    Int(u64),
    /// Integer literal too large for `u64`.
    IntOverflow,
    /// String literal with escapes already resolved.
    String(Name),
    Ident(Name),

    // Keywords
    Match,
    Case,
    Then,
    Else,
    End,
    Var,
    True,
    False,
    Nothing,

    // Symbols
    Eq,
    EqEq,
    NotEq,
    Plus,
    Minus,
    LParen,
    RParen,

    /// End of line. Runs of blank lines collapse into a single token.
    Newline,
    /// Input the lexer could not recognize.
    Error,
    Eof,
}

impl TokenKind {
    /// True if `self` and `other` are the same variant, ignoring payloads.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) | TokenKind::IntOverflow => "integer",
            TokenKind::String(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Match => "`match`",
            TokenKind::Case => "`case`",
            TokenKind::Then => "`then`",
            TokenKind::Else => "`else`",
            TokenKind::End => "`end`",
            TokenKind::Var => "`var`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Nothing => "`nothing`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Newline => "end of line",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output: a token vector that always ends with `Eof`.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Kind of the most recently pushed token, if any.
    #[inline]
    pub fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|token| token.kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds only, for tests and debugging.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
