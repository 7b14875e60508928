use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::Expression,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{control::*, expr::*, parser::Parser};

pub type PrefixParselet = fn(&mut Parser, u8) -> Result<Expression, Error>;
pub type InfixParselet = fn(&mut Parser, Expression, u8) -> Result<Expression, Error>;

/// A registry key: either an exact kind/value pair, or a kind-only
/// wildcard that matches any token of that kind not otherwise claimed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenPattern {
    Kind(TokenKind),
    Exact(TokenKind, String),
}

impl TokenPattern {
    fn exact(token: &Token) -> TokenPattern {
        TokenPattern::Exact(token.kind, token.value.clone())
    }
}

pub struct ParseletInfo<P> {
    pub precedence: u8,
    pub parselet: P,
}

/// One node of the infix trie. Multi-character symbol operators are stored
/// one character deep per level; the trie never exceeds depth 2.
pub struct InfixNode {
    parselet_info: Option<ParseletInfo<InfixParselet>>,
    children: Option<HashMap<TokenPattern, InfixNode>>,
}

impl InfixNode {
    fn empty() -> Self {
        InfixNode {
            parselet_info: None,
            children: None,
        }
    }
}

/// The parselet dispatch tables: one for prefix parselets, one (a trie)
/// for infix parselets.
///
/// Registration is a one-time configuration step; registering two
/// parselets for the same pattern is a programming error and panics.
/// After construction the registry is only ever read, so the global
/// `PARSELETS` instance can be shared by concurrent parses.
pub struct Registry {
    prefix: HashMap<TokenPattern, ParseletInfo<PrefixParselet>>,
    infix: HashMap<TokenPattern, InfixNode>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            prefix: HashMap::new(),
            infix: HashMap::new(),
        }
    }

    pub fn prefix(&mut self, kind: TokenKind, value: &str, precedence: u8, parselet: PrefixParselet) {
        self.add_prefix(
            TokenPattern::Exact(kind, value.to_string()),
            precedence,
            parselet,
        );
    }

    pub fn prefix_kind(&mut self, kind: TokenKind, precedence: u8, parselet: PrefixParselet) {
        self.add_prefix(TokenPattern::Kind(kind), precedence, parselet);
    }

    fn add_prefix(&mut self, pattern: TokenPattern, precedence: u8, parselet: PrefixParselet) {
        // NOTE prefix parselets only ever match a single token, so no trie
        // is needed on this side
        if self.prefix.contains_key(&pattern) {
            panic!("a prefix parselet has already been registered for pattern {:?}", pattern);
        }
        self.prefix.insert(
            pattern,
            ParseletInfo {
                precedence,
                parselet,
            },
        );
    }

    pub fn infix(&mut self, kind: TokenKind, value: &str, precedence: u8, parselet: InfixParselet) {
        // the lexer emits symbols one character at a time, so a
        // multi-character symbol operator becomes a trie path
        let patterns: Vec<TokenPattern> = if kind == TokenKind::Symbol {
            value
                .chars()
                .map(|ch| TokenPattern::Exact(kind, ch.to_string()))
                .collect()
        } else {
            vec![TokenPattern::Exact(kind, value.to_string())]
        };
        self.add_infix(patterns, precedence, parselet);
    }

    pub fn infix_kind(&mut self, kind: TokenKind, precedence: u8, parselet: InfixParselet) {
        self.add_infix(vec![TokenPattern::Kind(kind)], precedence, parselet);
    }

    fn add_infix(&mut self, mut patterns: Vec<TokenPattern>, precedence: u8, parselet: InfixParselet) {
        if patterns.is_empty() || patterns.len() > 2 {
            panic!("infix operators must be 1 or 2 tokens long, got {:?}", patterns);
        }

        let last = patterns.pop().unwrap();
        let parselet_info = ParseletInfo {
            precedence,
            parselet,
        };

        let node = match patterns.pop() {
            None => self.infix.entry(last).or_insert_with(InfixNode::empty),
            Some(first) => {
                let root = self.infix.entry(first).or_insert_with(InfixNode::empty);
                root.children
                    .get_or_insert_with(HashMap::new)
                    .entry(last)
                    .or_insert_with(InfixNode::empty)
            }
        };

        if node.parselet_info.is_some() {
            panic!("an infix parselet has already been registered for this pattern");
        }
        node.parselet_info = Some(parselet_info);
    }

    pub fn get_prefix(&self, token: &Token) -> Option<&ParseletInfo<PrefixParselet>> {
        self.prefix
            .get(&TokenPattern::exact(token))
            .or_else(|| self.prefix.get(&TokenPattern::Kind(token.kind)))
    }

    /// Resolves the infix parselet for `token`, preferring a 2-token match
    /// by peeking one token ahead. A trie node with neither a terminal
    /// parselet nor a matching child is an unexpected token.
    pub fn get_infix(
        &self,
        token: &Token,
        ctx: &Parser,
    ) -> Result<Option<&ParseletInfo<InfixParselet>>, Error> {
        let node = self
            .infix
            .get(&TokenPattern::exact(token))
            .or_else(|| self.infix.get(&TokenPattern::Kind(token.kind)));

        let Some(node) = node else {
            return Ok(None);
        };

        if let Some(children) = &node.children {
            if let Some(next) = ctx.peek_at(1) {
                let child = children
                    .get(&TokenPattern::exact(next))
                    .or_else(|| children.get(&TokenPattern::Kind(next.kind)));
                if let Some(info) = child.and_then(|child| child.parselet_info.as_ref()) {
                    return Ok(Some(info));
                }
            }
        }

        match &node.parselet_info {
            Some(info) => Ok(Some(info)),
            None => Err(ctx.unexpected_token(token)),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    /// Built once, before the first parse; read-only afterwards.
    pub static ref PARSELETS: Registry = create_parselet_registry();
}

pub fn create_parselet_registry() -> Registry {
    use TokenKind::{Identifier, Number, String, Symbol};

    let mut registry = Registry::new();

    registry.infix(Symbol, "{", 1, parse_constructor_expression);

    registry.infix(Symbol, "=", 2, parse_assignment_expression);

    registry.infix(Identifier, "and", 3, parse_logical_and_expression);
    registry.infix(Identifier, "or", 3, parse_logical_or_expression);

    registry.infix(Symbol, "==", 4, parse_equals_expression);
    registry.infix(Symbol, "!=", 4, parse_not_equals_expression);

    registry.infix(Symbol, "<", 5, parse_less_than_expression);
    registry.infix(Symbol, ">", 5, parse_greater_than_expression);
    registry.infix(Symbol, "<=", 5, parse_less_than_or_equals_expression);
    registry.infix(Symbol, ">=", 5, parse_greater_than_or_equals_expression);

    registry.infix(Symbol, "+", 6, parse_add_expression);
    registry.infix(Symbol, "-", 6, parse_subtract_expression);
    registry.infix(Symbol, "|", 6, parse_bitwise_or_expression);

    registry.infix(Symbol, "*", 7, parse_multiply_expression);
    registry.infix(Symbol, "/", 7, parse_divide_expression);
    registry.infix(Symbol, "%", 7, parse_remainder_expression);
    registry.infix(Symbol, "&", 7, parse_bitwise_and_expression);

    registry.infix(Symbol, "<<", 8, parse_bitshift_left_expression);
    registry.infix(Symbol, ">>", 8, parse_bitshift_right_expression);

    registry.prefix(Identifier, "not", 9, parse_not_expression);
    registry.prefix(Identifier, "if", 9, parse_if_expression);
    registry.prefix(Symbol, "{", 9, parse_block_expression);
    registry.prefix(Symbol, "[", 9, parse_array_expression);
    registry.prefix(Identifier, "while", 9, parse_while_expression);
    registry.prefix(Identifier, "unsafe", 9, parse_unsafe_expression);
    registry.prefix(Identifier, "switch", 9, parse_switch_expression);

    registry.infix(Symbol, "(", 10, parse_call_expression);
    registry.infix(Symbol, "[", 10, parse_subscript_expression);
    registry.infix(Symbol, ".", 10, parse_member_expression);
    registry.infix(Symbol, ":", 10, parse_generic_call_expression);

    registry.prefix(Symbol, "(", 11, parse_grouping_expression);

    registry.infix(Identifier, "as", 12, parse_type_cast_expression);
    registry.prefix_kind(Number, 12, parse_number_expression);
    registry.prefix_kind(String, 12, parse_string_expression);
    registry.prefix_kind(Identifier, 12, parse_identifier_expression);
    registry.prefix(Identifier, "true", 12, parse_boolean_expression);
    registry.prefix(Identifier, "false", 12, parse_boolean_expression);

    registry
}
