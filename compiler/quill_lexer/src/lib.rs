//! Lexer for Quill using logos with string interning.
//!
//! Newlines are significant (they terminate case bodies and block lines),
//! so they are kept as tokens, but a run of blank or comment-only lines
//! produces a single `Newline`.

mod escape;
mod raw_token;

use logos::Logos;
use quill_ir::{Span, StringInterner, Token, TokenKind, TokenList};

use escape::unescape_string;
use raw_token::RawToken;

/// Lex source code into a `TokenList` ending in `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());

        let kind = match token_result {
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::Newline) => {
                // Drop leading newlines and collapse runs.
                if matches!(result.last_kind(), None | Some(TokenKind::Newline)) {
                    continue;
                }
                TokenKind::Newline
            }
            Ok(raw) => convert_token(raw, logos.slice(), interner),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = Span::point(u32::try_from(source.len()).unwrap_or(u32::MAX));
    result.push(Token::new(TokenKind::Eof, eof));

    result
}

/// Convert a raw token to a `TokenKind`, interning strings.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        // Literals
        RawToken::Int(Some(n)) => TokenKind::Int(n),
        RawToken::Int(None) => TokenKind::IntOverflow,
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&unescape_string(content)))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::Match => TokenKind::Match,
        RawToken::Case => TokenKind::Case,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::End => TokenKind::End,
        RawToken::Var => TokenKind::Var,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Nothing => TokenKind::Nothing,

        // Symbols
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,

        // Trivia is filtered out by `lex`
        RawToken::LineComment | RawToken::Newline => TokenKind::Newline,
    }
}

#[cfg(test)]
mod tests;
