//! Type patterns: the AST representation of type annotations.
//!
//! Type patterns form a grammar of their own, separate from value
//! expressions. Unlike expression and statement nodes they carry no
//! source positions.

/// A type annotation.
///
/// `kind()` returns the stable snake_case discriminant handed to later
/// phases (`"class_type"`, `"array_type"`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum TypePattern {
    Class(ClassType),
    Tuple(TupleType),
    Array(ArrayType),
    Function(FunctionType),
    Member(MemberType),
    Generic(GenericType),
}

impl TypePattern {
    pub fn kind(&self) -> &'static str {
        match self {
            TypePattern::Class(_) => "class_type",
            TypePattern::Tuple(_) => "tuple_type",
            TypePattern::Array(_) => "array_type",
            TypePattern::Function(_) => "function_type",
            TypePattern::Member(_) => "member_type",
            TypePattern::Generic(_) => "generic_type",
        }
    }
}

/// A named type, e.g. `i32` or `Vec3`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleType {
    pub subtypes: Vec<TypePattern>,
}

/// An array type. `count` is the fixed element count, or `-1` for an
/// unsized array (`T[]`).
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub subtype: Box<TypePattern>,
    pub count: i64,
}

/// A function signature. Anonymous function types (from `(T) -> U`
/// annotations) carry the placeholder name `"(unknown)"`; declarations
/// fill in the declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub name: String,
    pub parameters: Vec<ValueDescription>,
    pub result: Option<Box<TypePattern>>,
}

/// Dotted access on a type, e.g. `Option.Some` for an enum variant.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberType {
    pub object: Box<TypePattern>,
    pub member: String,
}

/// A type application, e.g. `Vec:<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericType {
    pub object: Box<TypePattern>,
    pub subtypes: Vec<TypePattern>,
}

/// A named slot with an optional type annotation: function parameters,
/// struct fields and enum variant fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDescription {
    pub name: String,
    pub type_pattern: Option<TypePattern>,
}
