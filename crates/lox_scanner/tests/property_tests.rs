//! Property-based tests for the scanner.
//!
//! 1. Totality: every input scans to completion and ends in exactly one EOF.
//! 2. Operator round-trip: space-separated operators re-join to the input.

use lox_scanner::{scan, TokenType};
use proptest::prelude::*;

const OPERATORS: &[&str] = &[
    "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "/", "!", "!=", "=", "==", "<", "<=",
    ">", ">=",
];

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(OPERATORS)
}

proptest! {
    #[test]
    fn scan_always_ends_with_single_eof(source in any::<String>()) {
        let output = scan(&source);
        let last = output.tokens.last().unwrap();
        prop_assert_eq!(last.token_type, TokenType::Eof);
        prop_assert_eq!(last.lexeme, "");
        prop_assert_eq!(
            output.tokens.iter().filter(|t| t.token_type == TokenType::Eof).count(),
            1
        );
    }

    #[test]
    fn lexemes_match_spans(source in "[ -~\n]{0,64}") {
        let output = scan(&source);
        for token in &output.tokens {
            prop_assert_eq!(&source[token.span.to_range()], token.lexeme);
            prop_assert!(token.literal.is_none() || token.token_type.is_literal());
        }
    }

    #[test]
    fn lines_never_decrease(source in "[a-z0-9 \n\"+.]{0,64}") {
        let output = scan(&source);
        let lines: Vec<u32> = output.tokens.iter().map(|t| t.line).collect();
        prop_assert!(lines.windows(2).all(|w| w[0] <= w[1]));
        let newlines = source.bytes().filter(|&b| b == b'\n').count() as u32;
        prop_assert_eq!(*lines.last().unwrap(), newlines + 1);
    }

    #[test]
    fn operators_round_trip(ops in prop::collection::vec(operator_strategy(), 0..32)) {
        let source = ops.join(" ");
        let output = scan(&source);
        prop_assert_eq!(output.error_count(), 0);
        let lexemes: Vec<&str> = output
            .tokens
            .iter()
            .filter(|t| t.token_type != TokenType::Eof)
            .map(|t| t.lexeme)
            .collect();
        prop_assert_eq!(lexemes.join(" "), source);
    }
}
