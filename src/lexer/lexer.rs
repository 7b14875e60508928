use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN, MK_TOKEN_HANDLER,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: comments must be tried before the symbol pattern so a
    // leading `//` or `/*` is not consumed as two `/` symbol tokens.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: MK_TOKEN_HANDLER!(TokenKind::Identifier) },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: MK_TOKEN_HANDLER!(TokenKind::Number) },
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^/\*(?s:.)*?(\*/|\z)").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^[!%^&*()\-+={}\[\]:;|~<>,.?/]").unwrap(), handler: MK_TOKEN_HANDLER!(TokenKind::Symbol) },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    row: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
            row: 1,
            column: 1,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            column: self.column,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Moves the cursor past `text`, updating row/column per character.
    pub fn advance(&mut self, text: &str) {
        self.pos += text.len();
        for ch in text.chars() {
            if ch == '\n' {
                self.row += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn advance_char(&mut self, ch: char) {
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance(matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance(matched); // opening quote

    // The value keeps escape sequences raw; interpretation is left to later
    // phases. An unterminated string runs to the end of the input.
    let mut value = String::new();
    while let Some(ch) = lexer.at() {
        if ch == '"' {
            lexer.advance_char(ch);
            break;
        }
        if ch == '\\' {
            lexer.advance_char(ch);
            match lexer.at() {
                Some(escaped @ ('"' | '\\')) => {
                    value.push('\\');
                    value.push(escaped);
                    lexer.advance_char(escaped);
                }
                Some(escaped) => {
                    return Err(Error::new(
                        ErrorImpl::UnsupportedEscapeSequence { character: escaped },
                        lexer.position(),
                    ));
                }
                None => {
                    value.push('\\');
                }
            }
            continue;
        }
        value.push(ch);
        lexer.advance_char(ch);
    }

    let end = lexer.position();
    lexer.push(MK_TOKEN!(TokenKind::String, value, Span { start, end }));
    Ok(())
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = None;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                matched = Some((found.as_str().to_string(), pattern.handler));
                break;
            }
        }

        match matched {
            Some((text, handler)) => handler(&mut lex, &text)?,
            None => {
                let character = lex.at().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character },
                    lex.position(),
                ));
            }
        }
    }

    Ok(lex.tokens)
}
