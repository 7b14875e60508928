//! Integration tests for the full front-end pipeline.
//!
//! These tests verify that source text flows correctly through
//! tokenization and parsing into a complete AST.

use rill::ast::expressions::Expression;
use rill::ast::statements::Statement;
use rill::errors::errors::ErrorImpl;
use rill::lexer::lexer::tokenize;
use rill::parser::parser::parse;
use rill::Position;

fn parse_program(source: &str) -> rill::ast::statements::Module {
    let tokens = tokenize(source).expect("tokenization should succeed");
    parse(tokens).expect("parsing should succeed")
}

#[test]
fn test_parse_small_program() {
    let source = r#"
import fn print(message: string)

struct Point <T> {
    x: T,
    y: T
}

fn length(p: Point:<f32>) -> f32 {
    let squared = p.x * p.x + p.y * p.y
    return sqrt(squared)
}

export fn main {
    let origin = Point:<f32> { x: 0.0, y: 0.0 }
    print("ready")
}
"#;

    let module = parse_program(source);

    assert_eq!(module.body.len(), 4);
    assert_eq!(module.body[0].kind(), "import_function_declaration");
    assert_eq!(module.body[1].kind(), "struct_declaration");
    assert_eq!(module.body[2].kind(), "function_declaration");
    assert_eq!(module.body[3].kind(), "function_declaration");

    let Statement::Function(main) = &module.body[3] else {
        panic!("expected function declaration");
    };
    assert!(main.exported);
}

#[test]
fn test_parse_control_flow_program() {
    let source = r#"
fn classify(n: i32) -> string {
    if n < 0 {
        return "negative"
    } else if n == 0 {
        return "zero"
    } else {
        return "positive"
    }
}

fn pick(option: i32) -> i32 {
    switch option {
        case 1, 2 { return 10 },
        case 3 as chosen { return chosen },
        default { return 0 }
    }
}

fn count_up(limit: i32) {
    let i = 0
    while i < limit {
        i = i + 1
    }
}
"#;

    let module = parse_program(source);
    assert_eq!(module.body.len(), 3);
}

#[test]
fn test_parse_enum_and_type_aliases() {
    let source = r#"
enum Token {
    Word { text: string },
    Digits(i32),
    Space
}

type Tokens = Token[]
type Classifier = (Token) -> bool
"#;

    let module = parse_program(source);

    assert_eq!(module.body.len(), 3);
    assert_eq!(module.body[0].kind(), "enum_declaration");
    assert_eq!(module.body[1].kind(), "type_declaration");
    assert_eq!(module.body[2].kind(), "type_declaration");
}

#[test]
fn test_parse_expression_forms() {
    let source = r#"
let flags = mask & 3 | bit << 2
let inverted = not done
let casted = total as f32
let nested = matrix[0][1]
let chained = record.inner.value
let lambda_result = apply:<i32>(compute)
"#;

    let module = parse_program(source);
    assert_eq!(module.body.len(), 6);

    for statement in &module.body {
        assert_eq!(statement.kind(), "let_declaration");
    }
}

#[test]
fn test_parse_member_on_float_chain() {
    let module = parse_program("let cell = grid.0.1");

    let Statement::Let(declaration) = &module.body[0] else {
        panic!("expected let declaration");
    };
    let Some(Expression::Member(outer)) = &declaration.initial else {
        panic!("expected member expression initializer");
    };
    assert_eq!(outer.member, "1");
    assert_eq!(outer.expression.kind(), "member_expression");
}

#[test]
fn test_first_error_aborts_parse() {
    let tokens = tokenize("let a = 1 let b = 2").unwrap();
    let error = parse(tokens).unwrap_err();

    // same-row statement with no terminator: the missing-semicolon case
    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnexpectedToken {
            token: "let".to_string()
        }
    );
    assert_eq!(error.get_position(), Position { row: 1, column: 11 });
}

#[test]
fn test_lexical_error_carries_position() {
    let error = tokenize("let a = 1\nlet b = #").unwrap_err();

    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnrecognisedCharacter { character: '#' }
    );
    assert_eq!(error.get_position(), Position { row: 2, column: 9 });
}

#[test]
fn test_display_error_does_not_panic() {
    let source = "let a = #";
    let error = tokenize(source).unwrap_err();

    rill::display_error(&error, source);
}

#[test]
fn test_tokens_roundtrip_into_positions() {
    let source = "let total = base\n    + extra";
    let module = parse_program(source);

    let Statement::Let(declaration) = &module.body[0] else {
        panic!("expected let declaration");
    };
    // the initializer spans both rows
    let Some(initial) = &declaration.initial else {
        panic!("expected initializer");
    };
    assert_eq!(initial.start(), Position { row: 1, column: 13 });
    assert_eq!(initial.end(), Position { row: 2, column: 12 });
}
