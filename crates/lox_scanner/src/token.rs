//! Tokens produced by the scanner.

use crate::token_type::TokenType;
use lox_core::text::{TextPos, TextSpan};
use std::fmt;

/// The decoded value of a literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'src> {
    /// Text strictly between the quotes, with no escape processing.
    String(&'src str),
    Number(f64),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A scanned token. Borrows its lexeme from the source buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    pub token_type: TokenType,
    /// The exact source text of the token (empty for [`TokenType::Eof`]).
    pub lexeme: &'src str,
    /// Present only for [`TokenType::String`] and [`TokenType::Number`].
    pub literal: Option<Literal<'src>>,
    /// 1-based line on which scanning of the token finished.
    pub line: u32,
    pub span: TextSpan,
}

impl<'src> Token<'src> {
    pub fn new(
        token_type: TokenType,
        lexeme: &'src str,
        literal: Option<Literal<'src>>,
        line: u32,
        span: TextSpan,
    ) -> Self {
        debug_assert!(literal.is_none() || token_type.is_literal());
        Self {
            token_type,
            lexeme,
            literal,
            line,
            span,
        }
    }

    /// The synthetic end-of-file token.
    pub fn eof(line: u32, pos: TextPos) -> Self {
        Self::new(TokenType::Eof, "", None, line, TextSpan::empty(pos))
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }

    /// The literal as a number, if this is a numeric token.
    pub fn number(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The literal as string contents, if this is a string token.
    pub fn string(&self) -> Option<&'src str> {
        match self.literal {
            Some(Literal::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.token_type, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_token() {
        let token = Token::eof(4, 12);
        assert!(token.is_eof());
        assert_eq!(token.lexeme, "");
        assert_eq!(token.literal, None);
        assert_eq!(token.line, 4);
        assert!(token.span.is_empty());
        assert_eq!(token.span.start, 12);
    }

    #[test]
    fn test_display() {
        let number = Token::new(
            TokenType::Number,
            "1.5",
            Some(Literal::Number(1.5)),
            1,
            TextSpan::new(0, 3),
        );
        assert_eq!(number.to_string(), "NUMBER 1.5 1.5");

        let string = Token::new(
            TokenType::String,
            "\"hi\"",
            Some(Literal::String("hi")),
            1,
            TextSpan::new(0, 4),
        );
        assert_eq!(string.to_string(), "STRING \"hi\" hi");

        let plus = Token::new(TokenType::Plus, "+", None, 2, TextSpan::new(5, 1));
        assert_eq!(plus.to_string(), "PLUS + null");
    }

    #[test]
    fn test_literal_accessors() {
        let number = Token::new(
            TokenType::Number,
            "123",
            Some(Literal::Number(123.0)),
            1,
            TextSpan::new(0, 3),
        );
        assert_eq!(number.number(), Some(123.0));
        assert_eq!(number.string(), None);

        let ident = Token::new(TokenType::Identifier, "x", None, 1, TextSpan::new(0, 1));
        assert_eq!(ident.number(), None);
        assert_eq!(ident.string(), None);
    }
}
