//! lox_scanner: Lexical scanner for the Lox scripting language.
//!
//! Converts source text into an ordered sequence of classified tokens,
//! terminated by an end-of-file token. Lexical errors never abort a scan:
//! each one is recorded as a diagnostic, optionally reported through an
//! [`ErrorSink`], and scanning resumes at the next character.
//!
//! ```
//! use lox_scanner::{scan, TokenType};
//!
//! let output = scan("var x = 1.5;");
//! assert!(!output.has_errors());
//! assert_eq!(output.tokens[0].token_type, TokenType::Var);
//! assert_eq!(output.tokens.last().map(|t| t.token_type), Some(TokenType::Eof));
//! ```

mod char_codes;
mod error;
mod scanner;
mod token;
mod token_type;

pub use error::LexicalError;
pub use lox_diagnostics::ErrorSink;
pub use scanner::{ScanOutput, Scanner};
pub use token::{Literal, Token};
pub use token_type::TokenType;

/// Scan `source` without an error sink. Errors are available on the output.
pub fn scan(source: &str) -> ScanOutput<'_> {
    Scanner::new(source).scan_tokens()
}
