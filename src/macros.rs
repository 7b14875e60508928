//! Utility macros for the front-end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_TOKEN_HANDLER!` - Creates a lexer handler that emits one token per match
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler that turns the matched text into a single token.
///
/// Generates a handler function that records the position before and after
/// the match, advances the lexer over the matched text, and pushes a token
/// of the given kind carrying the matched text as its value.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[0-9]+").unwrap(),
///     handler: MK_TOKEN_HANDLER!(TokenKind::Number),
/// }
/// ```
#[macro_export]
macro_rules! MK_TOKEN_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| -> Result<(), Error> {
            let start = lexer.position();
            lexer.advance(matched);
            let end = lexer.position();
            lexer.push(MK_TOKEN!($kind, matched.to_string(), Span { start, end }));
            Ok(())
        }
    };
}
