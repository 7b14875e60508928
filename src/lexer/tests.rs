//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers (keywords are ordinary identifiers)
//! - Numeric literals (integers and floats)
//! - String literals and escape sequences
//! - Symbols and multi-character operator splitting
//! - Comments and whitespace
//! - Position tracking
//! - Error cases

use crate::errors::errors::ErrorImpl;
use crate::Position;

use super::lexer::tokenize;
use super::tokens::TokenKind;

#[test]
fn test_tokenize_identifier() {
    let tokens = tokenize("hello").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[0].span.start, Position { row: 1, column: 1 });
    assert_eq!(tokens[0].span.end, Position { row: 1, column: 6 });
}

#[test]
fn test_tokenize_identifier_with_digits() {
    let tokens = tokenize("h3ll0 _underscore baz_123").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "h3ll0");
    assert_eq!(tokens[1].value, "_underscore");
    assert_eq!(tokens[2].value, "baz_123");
}

#[test]
fn test_tokenize_keywords_are_identifiers() {
    let tokens = tokenize("let fn if else while return struct enum export import type").unwrap();

    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[1].value, "fn");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_tokenize_number_positions() {
    let tokens = tokenize("314").unwrap();

    assert_eq!(tokens[0].span.start, Position { row: 1, column: 1 });
    assert_eq!(tokens[0].span.end, Position { row: 1, column: 4 });
}

#[test]
fn test_tokenize_number_without_fraction() {
    // a dot not followed by a digit stays a separate symbol token
    let tokens = tokenize("1.x").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[1].value, ".");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "x");
}

#[test]
fn test_tokenize_member_on_float_ambiguity() {
    // the number scanner greedily consumes the decimal point; `a.0.0`
    // becomes 3 tokens and the parser splits the float back apart
    let tokens = tokenize("a.0.0").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0.0");
    assert_eq!(tokens[2].span.start, Position { row: 1, column: 3 });
    assert_eq!(tokens[2].span.end, Position { row: 1, column: 6 });
}

#[test]
fn test_tokenize_string() {
    let tokens = tokenize("\"314\"").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "314");
    // the span includes both quote marks, the value neither
    assert_eq!(tokens[0].span.start, Position { row: 1, column: 1 });
    assert_eq!(tokens[0].span.end, Position { row: 1, column: 6 });
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize("\"\"").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[0].span.end, Position { row: 1, column: 3 });
}

#[test]
fn test_tokenize_string_escapes_kept_raw() {
    let tokens = tokenize(r#""a\"b""#).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, r#"a\"b"#);

    let tokens = tokenize(r#""a\\b""#).unwrap();
    assert_eq!(tokens[0].value, r"a\\b");
}

#[test]
fn test_tokenize_string_unsupported_escape() {
    let result = tokenize(r#""a\nb""#);

    let error = result.unwrap_err();
    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnsupportedEscapeSequence { character: 'n' }
    );
}

#[test]
fn test_tokenize_unterminated_string() {
    // an unterminated string runs to the end of the input without error
    let tokens = tokenize("\"abc").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "abc");
}

#[test]
fn test_tokenize_symbols_are_single_characters() {
    // multi-character operators are reassembled by the parser, not here
    let tokens = tokenize("== != <= >= << >> ->").unwrap();

    assert_eq!(tokens.len(), 14);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Symbol);
        assert_eq!(token.value.len(), 1);
    }
    assert_eq!(tokens[0].value, "=");
    assert_eq!(tokens[1].value, "=");
    assert_eq!(tokens[2].value, "!");
    assert_eq!(tokens[12].value, "-");
    assert_eq!(tokens[13].value, ">");
}

#[test]
fn test_tokenize_symbol_set() {
    let source = "! % ^ & * ( ) - + = { } [ ] : ; | ~ < > , . ? /";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 24);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Symbol);
    }
}

#[test]
fn test_tokenize_line_comment() {
    let tokens = tokenize("let x = 5 // this is a comment\nlet y = 10").unwrap();

    // comments are consumed, not emitted
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].value, "let");
    assert_eq!(tokens[4].span.start, Position { row: 2, column: 1 });
}

#[test]
fn test_tokenize_block_comment() {
    let tokens = tokenize("a /* ignore me */ b").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].value, "b");
}

#[test]
fn test_tokenize_block_comment_multiline_positions() {
    let tokens = tokenize("/*\n\n*/x").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[0].span.start, Position { row: 3, column: 3 });
}

#[test]
fn test_tokenize_newline_resets_column() {
    let tokens = tokenize("let x\n  y").unwrap();

    assert_eq!(tokens[2].value, "y");
    assert_eq!(tokens[2].span.start, Position { row: 2, column: 3 });
    assert_eq!(tokens[2].span.end, Position { row: 2, column: 4 });
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  let   x   =   42  ").unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[0].span.start, Position { row: 1, column: 3 });
}

#[test]
fn test_tokenize_empty_input() {
    let tokens = tokenize("").unwrap();

    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_whitespace_only_input() {
    let tokens = tokenize("  \n\t ").unwrap();

    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("let x = @").unwrap_err();

    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
    assert_eq!(error.get_position(), Position { row: 1, column: 9 });
}

#[test]
fn test_tokenize_mixed_expression() {
    let tokens = tokenize("x + 5 * (y - 3)").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Symbol);
    assert_eq!(tokens[4].kind, TokenKind::Symbol);
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].kind, TokenKind::Symbol);
    assert_eq!(tokens[7].kind, TokenKind::Number);
    assert_eq!(tokens[8].kind, TokenKind::Symbol);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x = 42;").unwrap();

    assert_eq!(tokens.len(), 5); // let, x, =, 42, ;
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].value, "=");
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].value, ";");
}
