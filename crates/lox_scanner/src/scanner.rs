//! The Lox scanner.
//!
//! A single pass over the source bytes. Each loop iteration marks the start
//! of a lexeme and recognizes exactly one lexeme from its first byte, peeking
//! at most two bytes ahead. Lexical errors are recorded and reported, and
//! scanning always runs to the end of the input.

use crate::char_codes::*;
use crate::error::LexicalError;
use crate::token::{Literal, Token};
use crate::token_type::TokenType;
use lox_core::text::{TextPos, TextSpan};
use lox_diagnostics::{DiagnosticCollection, ErrorSink};
use memchr::{memchr, memchr_iter};

/// Every reserved word is at least this long, so shorter identifiers skip
/// the keyword table.
const MIN_KEYWORD_LEN: usize = 2;

/// The result of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanOutput<'src> {
    /// All tokens in source order, always ending with [`TokenType::Eof`].
    pub tokens: Vec<Token<'src>>,
    /// One diagnostic per lexical error, in the order they were reported.
    pub diagnostics: DiagnosticCollection,
}

impl<'src> ScanOutput<'src> {
    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn into_tokens(self) -> Vec<Token<'src>> {
        self.tokens
    }
}

/// Converts Lox source text into tokens.
///
/// A scanner is single-use: [`Scanner::scan_tokens`] consumes it.
pub struct Scanner<'src, 'sink> {
    source: &'src str,
    /// First byte of the lexeme being recognized.
    start: usize,
    /// Next unconsumed byte.
    current: usize,
    line: u32,
    tokens: Vec<Token<'src>>,
    diagnostics: DiagnosticCollection,
    sink: Option<&'sink mut dyn ErrorSink>,
}

impl<'src, 'sink> Scanner<'src, 'sink> {
    /// Create a scanner whose errors are only counted, not reported.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
            sink: None,
        }
    }

    /// Create a scanner that reports each lexical error to `sink` as soon as
    /// it is found.
    pub fn with_sink(source: &'src str, sink: &'sink mut dyn ErrorSink) -> Self {
        Self {
            sink: Some(sink),
            ..Self::new(source)
        }
    }

    /// Scan the whole source.
    pub fn scan_tokens(mut self) -> ScanOutput<'src> {
        let _span = tracing::debug_span!("scan_tokens", len = self.source.len()).entered();

        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens
            .push(Token::eof(self.line, self.current as TextPos));

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.diagnostics.error_count(),
            lines = self.line,
            "scan complete"
        );
        ScanOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn bytes(&self) -> &'src [u8] {
        self.source.as_bytes()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consume the next byte. Must not be called at the end of input.
    #[inline]
    fn advance(&mut self) -> u8 {
        let b = self.bytes()[self.current];
        self.current += 1;
        b
    }

    /// Consume the next byte only if it is `expected`.
    #[inline]
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.current).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<u8> {
        self.bytes().get(self.current + 1).copied()
    }

    fn lexeme(&self) -> &'src str {
        let source = self.source;
        &source[self.start..self.current]
    }

    fn lexeme_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.start as TextPos, self.current as TextPos)
    }

    fn scan_token(&mut self) {
        match self.advance() {
            b'(' => self.add_token(TokenType::LeftParen),
            b')' => self.add_token(TokenType::RightParen),
            b'{' => self.add_token(TokenType::LeftBrace),
            b'}' => self.add_token(TokenType::RightBrace),
            b',' => self.add_token(TokenType::Comma),
            b'.' => self.add_token(TokenType::Dot),
            b'-' => self.add_token(TokenType::Minus),
            b'+' => self.add_token(TokenType::Plus),
            b';' => self.add_token(TokenType::Semicolon),
            b'*' => self.add_token(TokenType::Star),

            b'!' => self.add_one_or_two(TokenType::Bang, TokenType::BangEqual),
            b'=' => self.add_one_or_two(TokenType::Equal, TokenType::EqualEqual),
            b'<' => self.add_one_or_two(TokenType::Less, TokenType::LessEqual),
            b'>' => self.add_one_or_two(TokenType::Greater, TokenType::GreaterEqual),

            b'/' => {
                if self.eat(b'/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenType::Slash);
                }
            }

            LINE_FEED => self.line += 1,
            b if is_white_space_single_line(b) => {}

            DOUBLE_QUOTE => self.scan_string(),
            b if is_digit(b) => self.scan_number(),
            b if is_identifier_start(b) => self.scan_identifier(),

            _ => self.scan_unexpected_character(),
        }
    }

    // ========================================================================
    // Lexeme-specific scanning methods
    // ========================================================================

    /// `!`, `=`, `<`, `>`, optionally followed by `=`.
    fn add_one_or_two(&mut self, single: TokenType, with_equals: TokenType) {
        let kind = if self.eat(b'=') { with_equals } else { single };
        self.add_token(kind);
    }

    /// Skip to the end of the line, leaving the line feed for the main loop.
    fn skip_line_comment(&mut self) {
        let rest = &self.bytes()[self.current..];
        self.current += memchr(LINE_FEED, rest).unwrap_or(rest.len());
    }

    fn scan_string(&mut self) {
        let rest = &self.bytes()[self.current..];
        match memchr(DOUBLE_QUOTE, rest) {
            Some(offset) => {
                self.line += memchr_iter(LINE_FEED, &rest[..offset]).count() as u32;
                let contents = &self.source[self.current..self.current + offset];
                self.current += offset + 1;
                self.add_literal(TokenType::String, Literal::String(contents));
            }
            None => {
                self.line += memchr_iter(LINE_FEED, rest).count() as u32;
                self.current = self.source.len();
                self.report(LexicalError::UnterminatedString);
            }
        }
    }

    fn scan_number(&mut self) {
        self.scan_digits();

        // A dot only belongs to the number when a digit follows it.
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(is_digit) {
            self.current += 1;
            self.scan_digits();
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                self.add_literal(TokenType::Number, Literal::Number(value))
            }
            _ => self.report(LexicalError::InvalidNumberLiteral(text.to_string())),
        }
    }

    fn scan_digits(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.current += 1;
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_part) {
            self.current += 1;
        }

        let text = self.lexeme();
        let kind = if text.len() >= MIN_KEYWORD_LEN {
            TokenType::from_keyword(text).unwrap_or(TokenType::Identifier)
        } else {
            TokenType::Identifier
        };
        self.add_token(kind);
    }

    /// Consume the whole offending character so the next lexeme starts on a
    /// character boundary.
    fn scan_unexpected_character(&mut self) {
        let ch = self.source[self.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.current = self.start + ch.len_utf8();
        self.report(LexicalError::UnexpectedCharacter(ch));
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn add_token(&mut self, kind: TokenType) {
        self.push_token(kind, None);
    }

    fn add_literal(&mut self, kind: TokenType, literal: Literal<'src>) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenType, literal: Option<Literal<'src>>) {
        let token = Token::new(kind, self.lexeme(), literal, self.line, self.lexeme_span());
        self.tokens.push(token);
    }

    fn report(&mut self, error: LexicalError) {
        let diagnostic = error.to_diagnostic(self.line, self.lexeme_span());
        tracing::trace!(
            line = self.line,
            code = diagnostic.code,
            text = %diagnostic.message_text,
            "lexical error"
        );
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.report(self.line, &diagnostic.message_text);
        }
        self.diagnostics.add(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenType> {
        Scanner::new(source)
            .scan_tokens()
            .tokens
            .iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn test_advance() {
        let mut scanner = Scanner::new("// hello");
        for expected in "// hello".bytes() {
            assert_eq!(scanner.advance(), expected);
        }
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_eat() {
        let mut scanner = Scanner::new("!=");
        assert_eq!(scanner.advance(), b'!');
        assert_eq!(scanner.current, 1);
        assert!(scanner.eat(b'='));
        assert_eq!(scanner.current, 2);
    }

    #[test]
    fn test_eat_no_match() {
        let mut scanner = Scanner::new("!true");
        assert_eq!(scanner.advance(), b'!');
        assert!(!scanner.eat(b'='));
        assert_eq!(scanner.current, 1);
        assert_eq!(scanner.advance(), b't');
        assert_eq!(scanner.current, 2);
    }

    #[test]
    fn test_eat_at_end() {
        let mut scanner = Scanner::new("!");
        scanner.advance();
        assert!(!scanner.eat(b'='));
        assert_eq!(scanner.peek(), None);
        assert_eq!(scanner.peek_next(), None);
    }

    #[test]
    fn test_scan_single_char_tokens() {
        assert_eq!(
            kinds("(){},.-+;*"),
            vec![
                TokenType::LeftParen,
                TokenType::RightParen,
                TokenType::LeftBrace,
                TokenType::RightBrace,
                TokenType::Comma,
                TokenType::Dot,
                TokenType::Minus,
                TokenType::Plus,
                TokenType::Semicolon,
                TokenType::Star,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_scan_one_or_two_char_operators() {
        assert_eq!(
            kinds("! != = == < <= > >= /"),
            vec![
                TokenType::Bang,
                TokenType::BangEqual,
                TokenType::Equal,
                TokenType::EqualEqual,
                TokenType::Less,
                TokenType::LessEqual,
                TokenType::Greater,
                TokenType::GreaterEqual,
                TokenType::Slash,
                TokenType::Eof,
            ]
        );
        assert_eq!(kinds("!!"), vec![TokenType::Bang, TokenType::Bang, TokenType::Eof]);
        assert_eq!(kinds("==="), vec![TokenType::EqualEqual, TokenType::Equal, TokenType::Eof]);
    }

    #[test]
    fn test_comment_stops_before_newline() {
        let output = Scanner::new("// note\n+").scan_tokens();
        assert_eq!(output.tokens.len(), 2);
        assert_eq!(output.tokens[0].token_type, TokenType::Plus);
        assert_eq!(output.tokens[0].line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(kinds("1 // trailing"), vec![TokenType::Number, TokenType::Eof]);
    }

    #[test]
    fn test_scan_number_with_trailing_dot() {
        let output = Scanner::new("1.").scan_tokens();
        let tokens = &output.tokens;
        assert_eq!(tokens[0].token_type, TokenType::Number);
        assert_eq!(tokens[0].number(), Some(1.0));
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[1].token_type, TokenType::Dot);
        assert_eq!(tokens[2].token_type, TokenType::Eof);
    }

    #[test]
    fn test_keyword_shortcut() {
        let mut scanner = Scanner::new("a");
        scanner.start = 0;
        scanner.advance();
        scanner.scan_identifier();
        assert_eq!(scanner.tokens[0].token_type, TokenType::Identifier);
        assert_eq!(scanner.tokens[0].lexeme, "a");
    }

    #[test]
    fn test_unexpected_multibyte_character() {
        let output = Scanner::new("é+").scan_tokens();
        assert_eq!(output.error_count(), 1);
        let diag = &output.diagnostics.diagnostics()[0];
        assert_eq!(diag.span, Some(TextSpan::new(0, 2)));
        assert_eq!(output.tokens[0].token_type, TokenType::Plus);
        assert_eq!(output.tokens[0].span, TextSpan::new(2, 1));
    }

    #[test]
    fn test_overflowing_number_is_invalid() {
        let source = "9".repeat(400);
        let output = Scanner::new(&source).scan_tokens();
        assert_eq!(output.error_count(), 1);
        assert_eq!(output.diagnostics.diagnostics()[0].code, 1003);
        assert_eq!(output.tokens.len(), 1);
        assert!(output.tokens[0].is_eof());
    }
}
