//! Type pattern parsing.
//!
//! Type annotations use a grammar of their own, separate from value
//! expressions, parsed by plain recursive descent. It supports:
//!
//! - Named class types (`i32`, `Vec3`)
//! - Tuple types (`(i32, f32)`) and function types (`(i32) -> i32`)
//! - Member types for nested/enum-qualified names (`Option.Some`)
//! - Generic type applications (`Vec:<T>`)
//! - Array suffixes, unsized (`T[]`) or with a fixed length (`T[4]`)

use crate::{
    ast::types::{
        ArrayType, ClassType, FunctionType, GenericType, MemberType, TupleType, TypePattern,
        ValueDescription,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, sequence::parse_sequence};

pub fn parse_type_pattern(ctx: &mut Parser) -> Result<TypePattern, Error> {
    if !ctx.tokens_remaining() {
        return Err(ctx.end_of_input());
    }

    let mut root_type = if ctx.match_symbol("(") {
        let tuple = parse_tuple_type_pattern(ctx)?;
        if ctx.match_symbol("-") && ctx.match_symbol_at(">", 1) {
            parse_function_type_pattern(ctx, tuple)?
        } else {
            TypePattern::Tuple(tuple)
        }
    } else {
        let mut root = parse_class_type_pattern(ctx)?;
        if ctx.match_symbol(".") {
            root = parse_member_type_pattern(ctx, root)?;
        }
        if ctx.match_symbol(":") {
            root = parse_generic_type_pattern(ctx, root)?;
        }
        root
    };

    while ctx.match_symbol("[") {
        root_type = parse_array_type_pattern(ctx, root_type)?;
    }

    Ok(root_type)
}

pub fn parse_class_type_pattern(ctx: &mut Parser) -> Result<TypePattern, Error> {
    let class_name = ctx.ensure_identifier()?;

    Ok(TypePattern::Class(ClassType {
        name: class_name.value,
    }))
}

pub fn parse_tuple_type_pattern(ctx: &mut Parser) -> Result<TupleType, Error> {
    let sequence = parse_sequence(ctx, ("(", ")"), parse_type_pattern)?;

    Ok(TupleType {
        subtypes: sequence.elements,
    })
}

/// Reinterprets an already parsed tuple as a function type's parameter
/// list; parameters are auto-named by positional index.
pub fn parse_function_type_pattern(
    ctx: &mut Parser,
    left: TupleType,
) -> Result<TypePattern, Error> {
    ctx.ensure_symbol("-")?;
    ctx.ensure_symbol(">")?;
    let result = parse_type_pattern(ctx)?;

    let parameters = left
        .subtypes
        .into_iter()
        .enumerate()
        .map(|(index, type_pattern)| ValueDescription {
            name: index.to_string(),
            type_pattern: Some(type_pattern),
        })
        .collect();

    Ok(TypePattern::Function(FunctionType {
        name: String::from("(unknown)"),
        parameters,
        result: Some(Box::new(result)),
    }))
}

pub fn parse_array_type_pattern(
    ctx: &mut Parser,
    left: TypePattern,
) -> Result<TypePattern, Error> {
    ctx.ensure_symbol("[")?;
    let mut count: i64 = -1;

    if ctx.match_kind(TokenKind::Number) {
        let token = ctx.ensure_number()?;
        count = match token.value.parse::<i64>() {
            Ok(count) if count >= 0 => count,
            _ => {
                return Err(Error::new(
                    ErrorImpl::InvalidArrayLength {
                        value: token.value.clone(),
                    },
                    token.span.start,
                ));
            }
        };
    }

    ctx.ensure_symbol("]")?;

    Ok(TypePattern::Array(ArrayType {
        subtype: Box::new(left),
        count,
    }))
}

pub fn parse_member_type_pattern(
    ctx: &mut Parser,
    left: TypePattern,
) -> Result<TypePattern, Error> {
    ctx.ensure_symbol(".")?;
    let member = ctx.ensure_identifier()?.value;

    Ok(TypePattern::Member(MemberType {
        object: Box::new(left),
        member,
    }))
}

pub fn parse_generic_type_pattern(
    ctx: &mut Parser,
    left: TypePattern,
) -> Result<TypePattern, Error> {
    ctx.ensure_symbol(":")?;
    let sequence = parse_sequence(ctx, ("<", ">"), parse_type_pattern)?;

    Ok(TypePattern::Generic(GenericType {
        object: Box::new(left),
        subtypes: sequence.elements,
    }))
}
