//! Shared comma-delimited sequence parsing.
//!
//! Call arguments, array literals, constructor fields, generic argument
//! lists, parameter lists, struct bodies and enum variant lists all share
//! this shape: an opening delimiter, comma-separated elements with an
//! optional trailing comma, and a closing delimiter.

use crate::{errors::errors::Error, Position};

use super::parser::Parser;

pub struct Sequence<T> {
    pub start: Position,
    pub end: Position,
    pub elements: Vec<T>,
}

pub fn parse_sequence<T>(
    ctx: &mut Parser,
    delimiters: (&str, &str),
    mut element: impl FnMut(&mut Parser) -> Result<T, Error>,
) -> Result<Sequence<T>, Error> {
    let (open, close) = delimiters;
    let start = ctx.ensure_symbol(open)?.span.start;
    let mut elements = vec![];

    while !ctx.match_symbol(close) {
        if !ctx.tokens_remaining() {
            return Err(ctx.end_of_input());
        }
        elements.push(element(ctx)?);
        if !ctx.match_symbol(",") {
            break;
        }
        ctx.consume()?;
    }

    let end = ctx.ensure_symbol(close)?.span.end;

    Ok(Sequence {
        start,
        end,
        elements,
    })
}
