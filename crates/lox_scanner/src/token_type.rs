//! The closed set of lexical categories.

use std::fmt;

/// The kind of a scanned token.
///
/// Names returned by [`TokenType::as_str`] are stable; a parser or tool
/// matching on the textual form can rely on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenType {
    /// Look up a reserved word.
    pub fn from_keyword(text: &str) -> Option<TokenType> {
        match text {
            "and" => Some(TokenType::And),
            "class" => Some(TokenType::Class),
            "else" => Some(TokenType::Else),
            "false" => Some(TokenType::False),
            "fun" => Some(TokenType::Fun),
            "for" => Some(TokenType::For),
            "if" => Some(TokenType::If),
            "nil" => Some(TokenType::Nil),
            "or" => Some(TokenType::Or),
            "print" => Some(TokenType::Print),
            "return" => Some(TokenType::Return),
            "super" => Some(TokenType::Super),
            "this" => Some(TokenType::This),
            "true" => Some(TokenType::True),
            "var" => Some(TokenType::Var),
            "while" => Some(TokenType::While),
            _ => None,
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenType::And
                | TokenType::Class
                | TokenType::Else
                | TokenType::False
                | TokenType::Fun
                | TokenType::For
                | TokenType::If
                | TokenType::Nil
                | TokenType::Or
                | TokenType::Print
                | TokenType::Return
                | TokenType::Super
                | TokenType::This
                | TokenType::True
                | TokenType::Var
                | TokenType::While
        )
    }

    /// Whether tokens of this type carry a decoded literal value.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenType::String | TokenType::Number)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Minus => "MINUS",
            TokenType::Plus => "PLUS",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Slash => "SLASH",
            TokenType::Star => "STAR",
            TokenType::Bang => "BANG",
            TokenType::BangEqual => "BANG_EQUAL",
            TokenType::Equal => "EQUAL",
            TokenType::EqualEqual => "EQUAL_EQUAL",
            TokenType::Greater => "GREATER",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Less => "LESS",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::And => "AND",
            TokenType::Class => "CLASS",
            TokenType::Else => "ELSE",
            TokenType::False => "FALSE",
            TokenType::Fun => "FUN",
            TokenType::For => "FOR",
            TokenType::If => "IF",
            TokenType::Nil => "NIL",
            TokenType::Or => "OR",
            TokenType::Print => "PRINT",
            TokenType::Return => "RETURN",
            TokenType::Super => "SUPER",
            TokenType::This => "THIS",
            TokenType::True => "TRUE",
            TokenType::Var => "VAR",
            TokenType::While => "WHILE",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(TokenType::from_keyword("or"), Some(TokenType::Or));
        assert_eq!(TokenType::from_keyword("while"), Some(TokenType::While));
        assert_eq!(TokenType::from_keyword("orchid"), None);
        assert_eq!(TokenType::from_keyword("While"), None);
        assert_eq!(TokenType::from_keyword(""), None);
    }

    #[test]
    fn test_keyword_table_is_consistent() {
        let words = [
            "and", "class", "else", "false", "fun", "for", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ];
        for word in words {
            let kind = TokenType::from_keyword(word).unwrap();
            assert!(kind.is_keyword(), "{word} should be a keyword");
            assert_eq!(kind.as_str(), word.to_ascii_uppercase());
            assert!(word.len() >= 2);
        }
        assert!(!TokenType::Identifier.is_keyword());
        assert!(!TokenType::Eof.is_keyword());
    }

    #[test]
    fn test_stable_names() {
        assert_eq!(TokenType::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenType::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenType::GreaterEqual.to_string(), "GREATER_EQUAL");
        assert_eq!(TokenType::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenType::String.is_literal());
        assert!(TokenType::Number.is_literal());
        assert!(!TokenType::Identifier.is_literal());
        assert!(!TokenType::True.is_literal());
    }
}
