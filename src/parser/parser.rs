//! Parser context and top-level parse driver.
//!
//! The `Parser` struct is a linear cursor over the token sequence produced
//! by the lexer. It provides the peek/consume/match/ensure primitives that
//! every parselet and statement parser builds on, and the `parse` entry
//! point that repeatedly parses statements until the stream is exhausted.

use crate::{
    ast::statements::Module,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_statement;

/// A cursor over the token sequence.
///
/// The token vector is owned for the duration of a parse and never
/// modified; only `index` advances.
pub struct Parser {
    source: Vec<Token>,
    index: usize,
    length: usize,
}

impl Parser {
    pub fn new(source: Vec<Token>) -> Self {
        let length = source.len();
        Parser {
            source,
            index: 0,
            length,
        }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> Option<&Token> {
        self.source.get(self.index)
    }

    /// Returns the token `offset` positions ahead without advancing.
    pub fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.source.get(self.index + offset)
    }

    /// Returns the current token and advances.
    pub fn consume(&mut self) -> Result<Token, Error> {
        if !self.tokens_remaining() {
            return Err(self.end_of_input());
        }
        let token = self.source[self.index].clone();
        self.index += 1;
        Ok(token)
    }

    pub fn tokens_remaining(&self) -> bool {
        self.index < self.length
    }

    /// The last consumed token. Only valid once at least one token has been
    /// consumed; used to compute `end` positions after optional constructs.
    pub fn previous(&self) -> &Token {
        &self.source[self.index - 1]
    }

    pub fn match_kind(&self, kind: TokenKind) -> bool {
        self.match_token(0, kind, None)
    }

    pub fn match_symbol(&self, value: &str) -> bool {
        self.match_token(0, TokenKind::Symbol, Some(value))
    }

    pub fn match_symbol_at(&self, value: &str, offset: usize) -> bool {
        self.match_token(offset, TokenKind::Symbol, Some(value))
    }

    /// Matches an identifier token with the given value. Keywords are plain
    /// identifiers to the lexer, so this is how `let`, `fn`, `if` and the
    /// rest are recognized.
    pub fn match_keyword(&self, word: &str) -> bool {
        self.match_token(0, TokenKind::Identifier, Some(word))
    }

    fn match_token(&self, offset: usize, kind: TokenKind, value: Option<&str>) -> bool {
        match self.peek_at(offset) {
            Some(token) => token.kind == kind && value.map_or(true, |value| token.value == value),
            None => false,
        }
    }

    pub fn ensure_symbol(&mut self, value: &str) -> Result<Token, Error> {
        self.ensure_token(TokenKind::Symbol, Some(value))
    }

    pub fn ensure_keyword(&mut self, word: &str) -> Result<Token, Error> {
        self.ensure_token(TokenKind::Identifier, Some(word))
    }

    pub fn ensure_identifier(&mut self) -> Result<Token, Error> {
        self.ensure_token(TokenKind::Identifier, None)
    }

    pub fn ensure_number(&mut self) -> Result<Token, Error> {
        self.ensure_token(TokenKind::Number, None)
    }

    /// Consumes the current token and validates its kind (and value, when
    /// given).
    fn ensure_token(&mut self, kind: TokenKind, value: Option<&str>) -> Result<Token, Error> {
        let token = self.consume()?;
        if token.kind == kind && value.map_or(true, |value| token.value == value) {
            Ok(token)
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start,
            ))
        }
    }

    pub fn unexpected_token(&self, token: &Token) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start,
        )
    }

    pub fn end_of_input(&self) -> Error {
        let position = if self.index > 0 {
            self.previous().span.end
        } else {
            Position::origin()
        };
        Error::new(ErrorImpl::UnexpectedEndOfInput, position)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It repeatedly parses
/// statements until the token stream is exhausted and wraps them into the
/// root module node. The first error aborts the parse; no partial AST is
/// returned.
pub fn parse(tokens: Vec<Token>) -> Result<Module, Error> {
    let mut parser = Parser::new(tokens);
    let mut body = vec![];

    while parser.tokens_remaining() {
        body.push(parse_statement(&mut parser)?);
    }

    let span = match (body.first(), body.last()) {
        (Some(first), Some(last)) => Span {
            start: first.start(),
            end: last.end(),
        },
        _ => Span {
            start: Position::origin(),
            end: Position::origin(),
        },
    };

    Ok(Module { body, span })
}
