use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnsupportedEscapeSequence { .. } => "UnsupportedEscapeSequence",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::InvalidArrayLength { .. } => "InvalidArrayLength",
            ErrorImpl::DuplicateDefaultCase => "DuplicateDefaultCase",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnsupportedEscapeSequence { character } => ErrorTip::Suggestion(format!(
                "Unsupported escape `\\{}`, only `\\\"` and `\\\\` are allowed in strings",
                character
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The input ended before the current construct was closed",
            )),
            ErrorImpl::InvalidArrayLength { value } => ErrorTip::Suggestion(format!(
                "Invalid array length `{}`, lengths must be non-negative integers",
                value
            )),
            ErrorImpl::DuplicateDefaultCase => ErrorTip::Suggestion(String::from(
                "A switch expression may declare at most one default case",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unsupported escape sequence: \\{character}")]
    UnsupportedEscapeSequence { character: char },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("invalid array length {value}")]
    InvalidArrayLength { value: String },
    #[error("cannot define more than 1 default case")]
    DuplicateDefaultCase,
}
