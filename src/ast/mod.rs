/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression node variants
/// - statements: Definitions for the statement node variants and the module root
/// - types: Definitions for type patterns (type annotations)
pub mod expressions;
pub mod statements;
pub mod types;
