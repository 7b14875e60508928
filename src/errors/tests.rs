//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position { row: 1, column: 10 },
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position { row: 4, column: 2 };
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos,
    );

    assert_eq!(error.get_position(), pos);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position::origin(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unexpected_end_of_input_error() {
    let error = Error::new(ErrorImpl::UnexpectedEndOfInput, Position::origin());

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_unsupported_escape_sequence_error() {
    let error = Error::new(
        ErrorImpl::UnsupportedEscapeSequence { character: 'n' },
        Position { row: 1, column: 3 },
    );

    assert_eq!(error.get_error_name(), "UnsupportedEscapeSequence");
    assert_eq!(
        error.get_error().to_string(),
        "unsupported escape sequence: \\n"
    );
}

#[test]
fn test_invalid_array_length_error() {
    let error = Error::new(
        ErrorImpl::InvalidArrayLength {
            value: "1.1".to_string(),
        },
        Position::origin(),
    );

    assert_eq!(error.get_error_name(), "InvalidArrayLength");
    assert_eq!(error.get_error().to_string(), "invalid array length 1.1");
}

#[test]
fn test_duplicate_default_case_error() {
    let error = Error::new(ErrorImpl::DuplicateDefaultCase, Position::origin());

    assert_eq!(error.get_error_name(), "DuplicateDefaultCase");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::origin(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position::origin(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
