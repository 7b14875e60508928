use crate::{
    ast::statements::{
        EnumDeclaration, EnumVariantDescription, ExportDeclaration, ExpressionStatement,
        FunctionDeclaration, ImportFunctionDeclaration, LetDeclaration, ReturnStatement, Statement,
        StructDeclaration, TypeDeclaration,
    },
    ast::types::{FunctionType, TypePattern, ValueDescription},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::{
    control::parse_block,
    expr::parse_expression,
    parser::Parser,
    sequence::parse_sequence,
    types::{parse_tuple_type_pattern, parse_type_pattern},
};

pub fn parse_statement(ctx: &mut Parser) -> Result<Statement, Error> {
    let leading = match ctx.peek() {
        Some(token) if token.kind == TokenKind::Identifier => token.value.clone(),
        Some(_) => String::new(),
        None => return Err(ctx.end_of_input()),
    };

    match leading.as_str() {
        "export" => parse_export_declaration(ctx),
        "import" => parse_import_declaration(ctx),
        "fn" => parse_function_declaration(ctx, false),
        "struct" => parse_struct_declaration(ctx),
        "enum" => parse_enum_declaration(ctx),
        "let" => parse_let_declaration(ctx),
        "return" => parse_return_statement(ctx),
        "type" => parse_type_declaration(ctx),
        _ => parse_expression_statement(ctx),
    }
}

fn parse_expression_statement(ctx: &mut Parser) -> Result<Statement, Error> {
    let expression = parse_expression(ctx, 0)?;
    let start = expression.start();
    let end = end_statement(ctx)?;

    Ok(Statement::Expression(ExpressionStatement {
        expression,
        span: Span { start, end },
    }))
}

/// Terminates a statement: a consumed `;`, or implicitly a closing `}`,
/// the end of the input, or a next token on a later row. A same-row token
/// with no terminator is the missing-semicolon error.
pub fn end_statement(ctx: &mut Parser) -> Result<Position, Error> {
    // standard semi-colon termination
    if ctx.match_symbol(";") {
        return Ok(ctx.consume()?.span.end);
    }

    let previous = ctx.previous().span.end;

    // probably a closing block, if not the error will be caught elsewhere
    if ctx.match_symbol("}") {
        return Ok(previous);
    }

    // either end of input or next token is on a different line
    match ctx.peek() {
        None => Ok(previous),
        Some(current) if current.span.start.row > previous.row => Ok(previous),
        Some(current) => Err(ctx.unexpected_token(current)),
    }
}

pub fn should_end_statement(ctx: &Parser) -> bool {
    if ctx.match_symbol(";") || ctx.match_symbol("}") {
        return true;
    }

    let previous = ctx.previous().span.end;
    match ctx.peek() {
        None => true,
        Some(current) => current.span.start.row > previous.row,
    }
}

pub fn parse_let_declaration(ctx: &mut Parser) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("let")?.span.start;
    let name = ctx.ensure_identifier()?.value;
    let mut type_pattern = None;
    let mut initial = None;

    if ctx.match_symbol(":") {
        ctx.consume()?;
        type_pattern = Some(parse_type_pattern(ctx)?);
    }

    if ctx.match_symbol("=") {
        ctx.consume()?;
        initial = Some(parse_expression(ctx, 1)?);
    }

    let end = end_statement(ctx)?;

    Ok(Statement::Let(LetDeclaration {
        name,
        type_pattern,
        initial,
        span: Span { start, end },
    }))
}

pub fn parse_return_statement(ctx: &mut Parser) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("return")?.span.start;
    let mut expression = None;

    if !should_end_statement(ctx) {
        expression = Some(parse_expression(ctx, 1)?);
    }

    let end = end_statement(ctx)?;

    Ok(Statement::Return(ReturnStatement {
        expression,
        span: Span { start, end },
    }))
}

pub fn parse_function_declaration(ctx: &mut Parser, exported: bool) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("fn")?.span.start;
    let name = ctx.ensure_identifier()?.value;

    // NOTE these 3 are all optional
    let parameters = parse_parameters(ctx)?;
    let generics = parse_type_parameters(ctx)?;
    let result = parse_function_result_type(ctx)?;
    // NOTE but the body is not
    let block = parse_block(ctx)?;
    let end = block.span.end;

    let type_pattern = FunctionType {
        name: name.clone(),
        parameters,
        result: result.map(Box::new),
    };

    Ok(Statement::Function(FunctionDeclaration {
        name,
        type_pattern,
        generics,
        block,
        exported,
        span: Span { start, end },
    }))
}

pub fn parse_function_result_type(ctx: &mut Parser) -> Result<Option<TypePattern>, Error> {
    if ctx.match_symbol("-") && ctx.match_symbol_at(">", 1) {
        ctx.consume()?;
        ctx.consume()?;
        return Ok(Some(parse_type_pattern(ctx)?));
    }
    Ok(None)
}

// NOTE the grammar of these could be extended to carry constraints or
// default types in future
pub fn parse_type_parameters(ctx: &mut Parser) -> Result<Vec<String>, Error> {
    if !ctx.match_symbol("<") {
        // early exit to allow the generic block to be optional
        return Ok(vec![]);
    }

    Ok(parse_sequence(ctx, ("<", ">"), |ctx| Ok(ctx.ensure_identifier()?.value))?.elements)
}

pub fn parse_parameters(ctx: &mut Parser) -> Result<Vec<ValueDescription>, Error> {
    if !ctx.match_symbol("(") {
        // early exit to allow the parameter block to be optional
        return Ok(vec![]);
    }

    Ok(parse_sequence(ctx, ("(", ")"), parse_value_description)?.elements)
}

fn parse_value_description(ctx: &mut Parser) -> Result<ValueDescription, Error> {
    let name = ctx.ensure_identifier()?.value;
    let mut type_pattern = None;

    if ctx.match_symbol(":") {
        ctx.consume()?;
        type_pattern = Some(parse_type_pattern(ctx)?);
    }

    Ok(ValueDescription { name, type_pattern })
}

pub fn parse_struct_declaration(ctx: &mut Parser) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("struct")?.span.start;
    let name = ctx.ensure_identifier()?.value;
    let generics = parse_type_parameters(ctx)?;
    let fields = parse_struct_body(ctx)?;
    let end = ctx.previous().span.end;

    Ok(Statement::Struct(StructDeclaration {
        name,
        generics,
        fields,
        span: Span { start, end },
    }))
}

pub fn parse_struct_body(ctx: &mut Parser) -> Result<Vec<ValueDescription>, Error> {
    Ok(parse_sequence(ctx, ("{", "}"), parse_value_description)?.elements)
}

pub fn parse_enum_declaration(ctx: &mut Parser) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("enum")?.span.start;
    let name = ctx.ensure_identifier()?.value;
    let generics = parse_type_parameters(ctx)?;
    let sequence = parse_sequence(ctx, ("{", "}"), parse_enum_variant)?;

    Ok(Statement::Enum(EnumDeclaration {
        name,
        generics,
        variants: sequence.elements,
        span: Span {
            start,
            end: sequence.end,
        },
    }))
}

fn parse_enum_variant(ctx: &mut Parser) -> Result<EnumVariantDescription, Error> {
    let name = ctx.ensure_identifier()?.value;
    let fields = if ctx.match_symbol("{") {
        parse_struct_body(ctx)?
    } else if ctx.match_symbol("(") {
        // the tuple form auto-names its fields by positional index
        parse_tuple_type_pattern(ctx)?
            .subtypes
            .into_iter()
            .enumerate()
            .map(|(index, type_pattern)| ValueDescription {
                name: index.to_string(),
                type_pattern: Some(type_pattern),
            })
            .collect()
    } else {
        vec![]
    };

    Ok(EnumVariantDescription { name, fields })
}

pub fn parse_export_declaration(ctx: &mut Parser) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("export")?.span.start;

    if ctx.match_keyword("fn") {
        return parse_function_declaration(ctx, true);
    }

    let name = ctx.ensure_identifier()?.value;
    let end = end_statement(ctx)?;

    Ok(Statement::Export(ExportDeclaration {
        name,
        span: Span { start, end },
    }))
}

pub fn parse_import_declaration(ctx: &mut Parser) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("import")?.span.start;

    // only external function signatures can be imported
    if !ctx.match_keyword("fn") {
        return match ctx.peek() {
            Some(token) => Err(ctx.unexpected_token(token)),
            None => Err(ctx.end_of_input()),
        };
    }
    ctx.consume()?;

    let name = ctx.ensure_identifier()?.value;
    let parameters = parse_parameters(ctx)?;
    let generics = parse_type_parameters(ctx)?;
    let result = parse_function_result_type(ctx)?;
    let end = ctx.previous().span.end;

    let type_pattern = FunctionType {
        name: name.clone(),
        parameters,
        result: result.map(Box::new),
    };

    Ok(Statement::ImportFunction(ImportFunctionDeclaration {
        name,
        generics,
        type_pattern,
        span: Span { start, end },
    }))
}

pub fn parse_type_declaration(ctx: &mut Parser) -> Result<Statement, Error> {
    let start = ctx.ensure_keyword("type")?.span.start;
    let name = ctx.ensure_identifier()?.value;
    ctx.ensure_symbol("=")?;
    let type_pattern = parse_type_pattern(ctx)?;
    let end = end_statement(ctx)?;

    Ok(Statement::Type(TypeDeclaration {
        name,
        type_pattern,
        span: Span { start, end },
    }))
}
