use crate::{
    ast::expressions::{
        ArrayLiteralExpression, BinaryExpression, CallExpression, CastExpression,
        ConstructorElement, ConstructorExpression, Expression, GroupExpression, LiteralExpression,
        MemberExpression, NotExpression, SubscriptExpression, TupleExpression,
    },
    ast::types::TypePattern,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::{
    lookups::PARSELETS,
    parser::Parser,
    sequence::parse_sequence,
    types::parse_type_pattern,
};

/// Precedence-climbing driver: parse one prefix term, then fold in infix
/// parselets while their precedence binds tighter than `precedence`.
pub fn parse_expression(ctx: &mut Parser, precedence: u8) -> Result<Expression, Error> {
    let mut left = parse_prefix_expression(ctx)?;

    while ctx.tokens_remaining() {
        let Some(token) = ctx.peek() else {
            break;
        };
        let Some(info) = PARSELETS.get_infix(token, ctx)? else {
            break;
        };
        if info.precedence <= precedence {
            break;
        }
        let (parselet, operator_precedence) = (info.parselet, info.precedence);
        left = parselet(ctx, left, operator_precedence)?;
    }

    Ok(left)
}

pub fn parse_prefix_expression(ctx: &mut Parser) -> Result<Expression, Error> {
    let Some(token) = ctx.peek() else {
        return Err(ctx.end_of_input());
    };
    let Some(info) = PARSELETS.get_prefix(token) else {
        return Err(ctx.unexpected_token(token));
    };
    let (parselet, precedence) = (info.parselet, info.precedence);

    parselet(ctx, precedence)
}

// Shared builder for the binary operator family: the operator token(s)
// have already been consumed by the calling parselet.
fn parse_binary_expression(
    build: fn(BinaryExpression) -> Expression,
    ctx: &mut Parser,
    left: Expression,
    precedence: u8,
) -> Result<Expression, Error> {
    let right = parse_expression(ctx, precedence)?;
    let span = Span {
        start: left.start(),
        end: right.end(),
    };

    Ok(build(BinaryExpression {
        left: Box::new(left),
        right: Box::new(right),
        span,
    }))
}

pub fn parse_add_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("+")?;
    parse_binary_expression(Expression::Add, ctx, left, precedence)
}

pub fn parse_subtract_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("-")?;
    parse_binary_expression(Expression::Subtract, ctx, left, precedence)
}

pub fn parse_multiply_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("*")?;
    parse_binary_expression(Expression::Multiply, ctx, left, precedence)
}

pub fn parse_divide_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("/")?;
    parse_binary_expression(Expression::Divide, ctx, left, precedence)
}

pub fn parse_remainder_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("%")?;
    parse_binary_expression(Expression::Remainder, ctx, left, precedence)
}

pub fn parse_assignment_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("=")?;
    // NOTE recursing one level below the operator's own precedence makes
    // assignment right associative
    parse_binary_expression(Expression::Assignment, ctx, left, precedence - 1)
}

pub fn parse_logical_and_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_keyword("and")?;
    parse_binary_expression(Expression::LogicalAnd, ctx, left, precedence)
}

pub fn parse_logical_or_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_keyword("or")?;
    parse_binary_expression(Expression::LogicalOr, ctx, left, precedence)
}

pub fn parse_equals_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("=")?;
    ctx.ensure_symbol("=")?;
    parse_binary_expression(Expression::Equals, ctx, left, precedence)
}

pub fn parse_not_equals_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("!")?;
    ctx.ensure_symbol("=")?;
    parse_binary_expression(Expression::NotEquals, ctx, left, precedence)
}

pub fn parse_less_than_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("<")?;
    parse_binary_expression(Expression::LessThan, ctx, left, precedence)
}

pub fn parse_greater_than_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol(">")?;
    parse_binary_expression(Expression::GreaterThan, ctx, left, precedence)
}

pub fn parse_less_than_or_equals_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("<")?;
    ctx.ensure_symbol("=")?;
    parse_binary_expression(Expression::LessThanOrEquals, ctx, left, precedence)
}

pub fn parse_greater_than_or_equals_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol(">")?;
    ctx.ensure_symbol("=")?;
    parse_binary_expression(Expression::GreaterThanOrEquals, ctx, left, precedence)
}

pub fn parse_bitwise_and_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("&")?;
    parse_binary_expression(Expression::BitwiseAnd, ctx, left, precedence)
}

pub fn parse_bitwise_or_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("|")?;
    parse_binary_expression(Expression::BitwiseOr, ctx, left, precedence)
}

pub fn parse_bitshift_left_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol("<")?;
    ctx.ensure_symbol("<")?;
    parse_binary_expression(Expression::BitshiftLeft, ctx, left, precedence)
}

pub fn parse_bitshift_right_expression(ctx: &mut Parser, left: Expression, precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol(">")?;
    ctx.ensure_symbol(">")?;
    parse_binary_expression(Expression::BitshiftRight, ctx, left, precedence)
}

fn parse_literal_expression(
    build: fn(LiteralExpression) -> Expression,
    ctx: &mut Parser,
) -> Result<Expression, Error> {
    let token = ctx.consume()?;

    Ok(build(LiteralExpression {
        value: token.value,
        span: token.span,
    }))
}

pub fn parse_number_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    parse_literal_expression(Expression::Number, ctx)
}

pub fn parse_string_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    parse_literal_expression(Expression::String, ctx)
}

pub fn parse_boolean_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    parse_literal_expression(Expression::Boolean, ctx)
}

pub fn parse_identifier_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    parse_literal_expression(Expression::Identifier, ctx)
}

pub fn parse_not_expression(ctx: &mut Parser, precedence: u8) -> Result<Expression, Error> {
    let start = ctx.ensure_keyword("not")?.span.start;
    let expression = parse_expression(ctx, precedence)?;
    let span = Span {
        start,
        end: expression.end(),
    };

    Ok(Expression::Not(NotExpression {
        expression: Box::new(expression),
        span,
    }))
}

pub fn parse_grouping_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    let sequence = parse_sequence(ctx, ("(", ")"), |ctx| parse_expression(ctx, 0))?;
    let span = Span {
        start: sequence.start,
        end: sequence.end,
    };
    let mut elements = sequence.elements;

    if elements.len() == 1 {
        // WARN a single element with a trailing comma, `(0,)`, also lands
        // here and stays a grouping rather than a 1-tuple
        let expression = elements.remove(0);
        return Ok(Expression::Group(GroupExpression {
            expression: Box::new(expression),
            span,
        }));
    }

    Ok(Expression::Tuple(TupleExpression { elements, span }))
}

pub fn parse_array_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    let sequence = parse_sequence(ctx, ("[", "]"), |ctx| parse_expression(ctx, 0))?;

    Ok(Expression::ArrayLiteral(ArrayLiteralExpression {
        span: Span {
            start: sequence.start,
            end: sequence.end,
        },
        elements: sequence.elements,
    }))
}

pub fn parse_call_expression(ctx: &mut Parser, left: Expression, _precedence: u8) -> Result<Expression, Error> {
    parse_call(ctx, left, vec![])
}

pub fn parse_call(
    ctx: &mut Parser,
    callee: Expression,
    generics: Vec<TypePattern>,
) -> Result<Expression, Error> {
    let sequence = parse_sequence(ctx, ("(", ")"), |ctx| parse_expression(ctx, 0))?;
    let span = Span {
        start: callee.start(),
        end: sequence.end,
    };

    Ok(Expression::Call(CallExpression {
        callee: Box::new(callee),
        generics,
        arguments: sequence.elements,
        span,
    }))
}

/// `callee:<T, ...>` followed by `(` is a call with explicit type
/// arguments; followed by `{` it is a generic constructor instead.
pub fn parse_generic_call_expression(ctx: &mut Parser, left: Expression, _precedence: u8) -> Result<Expression, Error> {
    ctx.ensure_symbol(":")?;
    let generics = parse_sequence(ctx, ("<", ">"), parse_type_pattern)?.elements;

    if ctx.match_symbol("{") {
        parse_constructor(ctx, left, generics)
    } else {
        parse_call(ctx, left, generics)
    }
}

pub fn parse_constructor_expression(ctx: &mut Parser, left: Expression, _precedence: u8) -> Result<Expression, Error> {
    parse_constructor(ctx, left, vec![])
}

pub fn parse_constructor(
    ctx: &mut Parser,
    callee: Expression,
    generics: Vec<TypePattern>,
) -> Result<Expression, Error> {
    let sequence = parse_sequence(ctx, ("{", "}"), |ctx| {
        let name = ctx.ensure_identifier()?.value;
        let mut value = None;
        if ctx.match_symbol(":") {
            ctx.consume()?;
            value = Some(parse_expression(ctx, 0)?);
        }
        Ok(ConstructorElement { name, value })
    })?;
    let span = Span {
        start: callee.start(),
        end: sequence.end,
    };

    Ok(Expression::Constructor(ConstructorExpression {
        callee: Box::new(callee),
        generics,
        elements: sequence.elements,
        span,
    }))
}

pub fn parse_subscript_expression(ctx: &mut Parser, left: Expression, _precedence: u8) -> Result<Expression, Error> {
    let start = left.start();
    ctx.ensure_symbol("[")?;
    let member = parse_expression(ctx, 0)?;
    let end = ctx.ensure_symbol("]")?.span.end;

    Ok(Expression::Subscript(SubscriptExpression {
        expression: Box::new(left),
        member: Box::new(member),
        span: Span { start, end },
    }))
}

pub fn parse_member_expression(ctx: &mut Parser, left: Expression, _precedence: u8) -> Result<Expression, Error> {
    let start = left.start();
    ctx.ensure_symbol(".")?;

    if ctx.match_kind(TokenKind::Identifier) {
        let token = ctx.consume()?;
        return Ok(Expression::Member(MemberExpression {
            span: Span {
                start,
                end: token.span.end,
            },
            expression: Box::new(left),
            member: token.value,
        }));
    }

    let token = ctx.ensure_number()?;
    let end = token.span.end;

    // NOTE in the case of something like a.0.0 the lexer reads 3 tokens,
    // 'a' '.' '0.0', as the last is greedily consumed as a float. The float
    // cannot easily be rejected there, so it is detected and split here.
    if let Some((integer, fraction)) = token.value.split_once('.') {
        let inner_end = Position {
            row: end.row,
            column: end.column - (1 + fraction.len() as u32),
        };
        let inner = Expression::Member(MemberExpression {
            span: Span {
                start,
                end: inner_end,
            },
            expression: Box::new(left),
            member: integer.to_string(),
        });
        return Ok(Expression::Member(MemberExpression {
            span: Span { start, end },
            expression: Box::new(inner),
            member: fraction.to_string(),
        }));
    }

    Ok(Expression::Member(MemberExpression {
        span: Span { start, end },
        expression: Box::new(left),
        member: token.value,
    }))
}

pub fn parse_type_cast_expression(ctx: &mut Parser, left: Expression, _precedence: u8) -> Result<Expression, Error> {
    let start = left.start();
    ctx.ensure_keyword("as")?;
    let type_pattern = parse_type_pattern(ctx)?;
    let end = ctx.previous().span.end;

    Ok(Expression::Cast(CastExpression {
        expression: Box::new(left),
        type_pattern,
        span: Span { start, end },
    }))
}
