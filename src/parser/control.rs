use crate::{
    ast::expressions::{
        BlockExpression, Expression, IfExpression, IfLetExpression, SwitchCase, SwitchCaseStyle,
        SwitchExpression, UnsafeExpression, WhileExpression,
    },
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{
    expr::parse_expression,
    parser::Parser,
    sequence::parse_sequence,
    stmt::parse_statement,
};

pub fn parse_block_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    Ok(Expression::Block(parse_block(ctx)?))
}

pub fn parse_block(ctx: &mut Parser) -> Result<BlockExpression, Error> {
    let start = ctx.ensure_symbol("{")?.span.start;
    let mut statements = vec![];

    while !ctx.match_symbol("}") {
        if !ctx.tokens_remaining() {
            return Err(ctx.end_of_input());
        }
        statements.push(parse_statement(ctx)?);
    }

    let end = ctx.ensure_symbol("}")?.span.end;

    Ok(BlockExpression {
        statements,
        span: Span { start, end },
    })
}

pub fn parse_if_expression(ctx: &mut Parser, precedence: u8) -> Result<Expression, Error> {
    let start = ctx.ensure_keyword("if")?.span.start;
    let mut variable_name = None;

    if ctx.match_keyword("let") {
        ctx.consume()?;
        variable_name = Some(ctx.ensure_identifier()?.value);
        ctx.ensure_symbol("=")?;
    }

    // condition sits above the constructor level so `if a { }` reads the
    // brace as the then-block, not as a constructor on `a`
    let condition = parse_expression(ctx, 1)?;
    let then_block = parse_block(ctx)?;
    let mut else_block = None;

    if ctx.match_keyword("else") {
        ctx.consume()?;
        // NOTE detect `else if` and nest it into the else expression
        else_block = Some(Box::new(if ctx.match_keyword("if") {
            parse_if_expression(ctx, precedence)?
        } else {
            Expression::Block(parse_block(ctx)?)
        }));
    }

    let end = ctx.previous().span.end;
    let span = Span { start, end };

    match variable_name {
        Some(variable_name) => Ok(Expression::IfLet(IfLetExpression {
            variable_name,
            condition: Box::new(condition),
            then_block,
            else_block,
            span,
        })),
        None => Ok(Expression::If(IfExpression {
            condition: Box::new(condition),
            then_block,
            else_block,
            span,
        })),
    }
}

pub fn parse_while_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    let start = ctx.ensure_keyword("while")?.span.start;
    let condition = parse_expression(ctx, 1)?;
    let block = parse_block(ctx)?;
    let span = Span {
        start,
        end: block.span.end,
    };

    Ok(Expression::While(WhileExpression {
        condition: Box::new(condition),
        block,
        span,
    }))
}

pub fn parse_unsafe_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    let start = ctx.ensure_keyword("unsafe")?.span.start;
    let block = parse_block(ctx)?;
    let span = Span {
        start,
        end: block.span.end,
    };

    Ok(Expression::Unsafe(UnsafeExpression { block, span }))
}

pub fn parse_switch_expression(ctx: &mut Parser, _precedence: u8) -> Result<Expression, Error> {
    let start = ctx.ensure_keyword("switch")?.span.start;
    let parameter = parse_expression(ctx, 2)?;
    let mut default_case: Option<BlockExpression> = None;

    let sequence = parse_sequence(ctx, ("{", "}"), |ctx| {
        if ctx.match_keyword("default") {
            let token = ctx.consume()?;
            if default_case.is_some() {
                return Err(Error::new(ErrorImpl::DuplicateDefaultCase, token.span.start));
            }
            default_case = Some(parse_block(ctx)?);
            return Ok(None);
        }

        ctx.ensure_keyword("case")?;
        let mut conditions = vec![];

        while ctx.tokens_remaining() {
            // conditions are limited to number, string, boolean and
            // identifier literals
            let condition = parse_expression(ctx, 12)?;
            match condition {
                Expression::Number(_)
                | Expression::String(_)
                | Expression::Boolean(_)
                | Expression::Identifier(_) => conditions.push(condition),
                other => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: other.kind().to_string(),
                        },
                        other.start(),
                    ));
                }
            }
            if ctx.match_symbol(",") {
                ctx.consume()?;
            } else {
                break;
            }
        }

        let style = if ctx.match_keyword("as") {
            ctx.consume()?;
            if ctx.match_symbol("{") {
                let fields =
                    parse_sequence(ctx, ("{", "}"), |ctx| Ok(ctx.ensure_identifier()?.value))?
                        .elements;
                SwitchCaseStyle::Destructure { fields }
            } else {
                SwitchCaseStyle::Cast {
                    identifier: ctx.ensure_identifier()?.value,
                }
            }
        } else {
            SwitchCaseStyle::Match
        };

        let block = parse_block(ctx)?;
        Ok(Some(SwitchCase {
            conditions,
            style,
            block,
        }))
    })?;

    let span = Span {
        start,
        end: sequence.end,
    };
    let cases = sequence.elements.into_iter().flatten().collect();

    Ok(Expression::Switch(SwitchExpression {
        parameter: Box::new(parameter),
        cases,
        default_case,
        span,
    }))
}
