//! Lexical errors.
//!
//! None of these abort a scan. The scanner records each one as a
//! [`Diagnostic`] and moves on to the next unconsumed character.

use lox_core::text::TextSpan;
use lox_diagnostics::{messages, Diagnostic, DiagnosticMessage};
use thiserror::Error;

/// Display text is identical to the resolved diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// A character that starts no valid lexeme.
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    /// End of input reached inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A numeric lexeme that does not decode to a finite `f64`.
    #[error("Invalid number literal '{0}'.")]
    InvalidNumberLiteral(String),
}

impl LexicalError {
    pub fn message(&self) -> &'static DiagnosticMessage {
        match self {
            LexicalError::UnexpectedCharacter(_) => &messages::UNEXPECTED_CHARACTER,
            LexicalError::UnterminatedString => &messages::UNTERMINATED_STRING,
            LexicalError::InvalidNumberLiteral(_) => &messages::INVALID_NUMBER_LITERAL,
        }
    }

    pub fn code(&self) -> u32 {
        self.message().code
    }

    pub fn to_diagnostic(&self, line: u32, span: TextSpan) -> Diagnostic {
        match self {
            LexicalError::UnexpectedCharacter(ch) => {
                let mut buf = [0u8; 4];
                Diagnostic::at(line, span, self.message(), &[&*ch.encode_utf8(&mut buf)])
            }
            LexicalError::UnterminatedString => Diagnostic::at(line, span, self.message(), &[]),
            LexicalError::InvalidNumberLiteral(text) => {
                Diagnostic::at(line, span, self.message(), &[text.as_str()])
            }
        }
    }
}
