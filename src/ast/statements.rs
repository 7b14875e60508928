//! Statement node variants and the module root.

use crate::{Position, Span};

use super::expressions::{BlockExpression, Expression};
use super::types::{FunctionType, TypePattern, ValueDescription};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(ExpressionStatement),
    Let(LetDeclaration),
    Return(ReturnStatement),
    Function(FunctionDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Export(ExportDeclaration),
    ImportFunction(ImportFunctionDeclaration),
    Type(TypeDeclaration),
}

impl Statement {
    /// The stable snake_case discriminant handed to later phases.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Expression(_) => "expression_statement",
            Statement::Let(_) => "let_declaration",
            Statement::Return(_) => "return_statement",
            Statement::Function(_) => "function_declaration",
            Statement::Struct(_) => "struct_declaration",
            Statement::Enum(_) => "enum_declaration",
            Statement::Export(_) => "export_declaration",
            Statement::ImportFunction(_) => "import_function_declaration",
            Statement::Type(_) => "type_declaration",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Statement::Expression(node) => node.span,
            Statement::Let(node) => node.span,
            Statement::Return(node) => node.span,
            Statement::Function(node) => node.span,
            Statement::Struct(node) => node.span,
            Statement::Enum(node) => node.span,
            Statement::Export(node) => node.span,
            Statement::ImportFunction(node) => node.span,
            Statement::Type(node) => node.span,
        }
    }

    pub fn start(&self) -> Position {
        self.span().start
    }

    pub fn end(&self) -> Position {
        self.span().end
    }
}

/// The root AST node: an ordered list of top-level statements spanning the
/// whole input. An empty module spans (1, 1) to (1, 1).
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub body: Vec<Statement>,
    pub span: Span,
}

impl Module {
    pub fn kind(&self) -> &'static str {
        "module"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetDeclaration {
    pub name: String,
    pub type_pattern: Option<TypePattern>,
    pub initial: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub type_pattern: FunctionType,
    pub generics: Vec<String>,
    pub block: BlockExpression,
    pub exported: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclaration {
    pub name: String,
    pub generics: Vec<String>,
    pub fields: Vec<ValueDescription>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub name: String,
    pub generics: Vec<String>,
    pub variants: Vec<EnumVariantDescription>,
    pub span: Span,
}

/// One enum variant. The parenthesized form auto-names its fields by
/// positional index ("0", "1", ...); the braced form uses explicit names.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariantDescription {
    pub name: String,
    pub fields: Vec<ValueDescription>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDeclaration {
    pub name: String,
    pub span: Span,
}

/// An external function signature with no body.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportFunctionDeclaration {
    pub name: String,
    pub generics: Vec<String>,
    pub type_pattern: FunctionType,
    pub span: Span,
}

/// A type alias: `type Name = pattern`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub type_pattern: TypePattern,
    pub span: Span,
}
