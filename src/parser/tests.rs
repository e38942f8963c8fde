//! Unit tests for the parser module.
//!
//! This module contains tests for parsing calculadin constructs including:
//! - Declarations
//! - Assignments
//! - Conditionals
//! - Built-in calls
//! - Expressions

use std::rc::Rc;

use crate::ast::ast::{Expr, Stmt, Ty};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::TokenKind;

use super::parser::parse;

fn parse_source(source: &str) -> Result<crate::ast::ast::Program, crate::errors::errors::Error> {
    let tokens = tokenize(source.to_string(), Some("test.cldn".to_string())).unwrap();
    parse(tokens, Rc::new("test.cldn".to_string()))
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("x : real;").unwrap();

    assert_eq!(program.block.statements.len(), 1);
    match &program.block.statements[0] {
        Stmt::Declaration {
            name,
            declared_type,
            ..
        } => {
            assert_eq!(name, "x");
            assert_eq!(*declared_type, Ty::Real);
        }
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_bool_declaration() {
    let program = parse_source("flag : bool;").unwrap();

    match &program.block.statements[0] {
        Stmt::Declaration { declared_type, .. } => assert_eq!(*declared_type, Ty::Bool),
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("x := 42;").unwrap();

    match &program.block.statements[0] {
        Stmt::Assignment { target, value, .. } => {
            assert_eq!(target, "x");
            assert!(matches!(value, Expr::Number { value, .. } if *value == 42.0));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_binary_expression_precedence() {
    let program = parse_source("x := 5 + 3 * 2;").unwrap();

    // `3 * 2` binds tighter than `+`
    match &program.block.statements[0] {
        Stmt::Assignment { value, .. } => match value {
            Expr::Binary {
                left,
                operator,
                right,
                ..
            } => {
                assert_eq!(operator.kind, TokenKind::Plus);
                assert!(matches!(**left, Expr::Number { value, .. } if value == 5.0));
                assert!(matches!(
                    **right,
                    Expr::Binary { ref operator, .. } if operator.kind == TokenKind::Star
                ));
            }
            other => panic!("expected binary expression, got {:?}", other),
        },
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_parenthesized_expression() {
    let program = parse_source("x := (5 + 3) * 2;").unwrap();

    match &program.block.statements[0] {
        Stmt::Assignment { value, .. } => match value {
            Expr::Binary { operator, left, .. } => {
                assert_eq!(operator.kind, TokenKind::Star);
                assert!(matches!(
                    **left,
                    Expr::Binary { ref operator, .. } if operator.kind == TokenKind::Plus
                ));
            }
            other => panic!("expected binary expression, got {:?}", other),
        },
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_unary_expression() {
    let program = parse_source("x := -y;").unwrap();

    match &program.block.statements[0] {
        Stmt::Assignment { value, .. } => {
            assert!(matches!(
                value,
                Expr::Unary { operator, .. } if operator.kind == TokenKind::Dash
            ));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_logical_expression() {
    let program = parse_source("x := a && !b;").unwrap();

    match &program.block.statements[0] {
        Stmt::Assignment { value, .. } => {
            assert!(matches!(
                value,
                Expr::Binary { operator, .. } if operator.kind == TokenKind::And
            ));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_if_statement() {
    let program = parse_source("if (x < 10) { x := 1; }").unwrap();

    match &program.block.statements[0] {
        Stmt::Conditional {
            condition,
            then_block,
            else_block,
            ..
        } => {
            assert!(matches!(
                condition,
                Expr::Binary { operator, .. } if operator.kind == TokenKind::Less
            ));
            assert_eq!(then_block.statements.len(), 1);
            assert!(else_block.is_none());
        }
        other => panic!("expected conditional, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_source("if (true) { x := 1; } else { x := 2; }").unwrap();

    match &program.block.statements[0] {
        Stmt::Conditional { else_block, .. } => {
            assert!(else_block.is_some());
            assert_eq!(else_block.as_ref().unwrap().statements.len(), 1);
        }
        other => panic!("expected conditional, got {:?}", other),
    }
}

#[test]
fn test_parse_nested_conditionals() {
    let program = parse_source("if (a) { if (b) { x := 1; } }").unwrap();

    match &program.block.statements[0] {
        Stmt::Conditional { then_block, .. } => {
            assert!(matches!(
                then_block.statements[0],
                Stmt::Conditional { .. }
            ));
        }
        other => panic!("expected conditional, got {:?}", other),
    }
}

#[test]
fn test_parse_call_statement() {
    let program = parse_source("print(x + 1);").unwrap();

    match &program.block.statements[0] {
        Stmt::Call {
            function, argument, ..
        } => {
            assert_eq!(function, "print");
            assert!(matches!(argument, Expr::Binary { .. }));
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_source("x : real; y : real; x := 1; y := x + 1;").unwrap();

    assert_eq!(program.block.statements.len(), 4);
}

#[test]
fn test_parse_boolean_literals() {
    let program = parse_source("x := true; y := false;").unwrap();

    match &program.block.statements[0] {
        Stmt::Assignment { value, .. } => {
            assert!(matches!(value, Expr::Boolean { value: true, .. }));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
    match &program.block.statements[1] {
        Stmt::Assignment { value, .. } => {
            assert!(matches!(value, Expr::Boolean { value: false, .. }));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();

    assert!(program.block.statements.is_empty());
}

#[test]
fn test_parse_syntax_error_missing_semicolon() {
    let result = parse_source("x := 42");

    assert!(result.is_err());
}

#[test]
fn test_parse_syntax_error_bad_type_name() {
    let result = parse_source("x : int;");

    assert!(result.is_err());
}

#[test]
fn test_parse_syntax_error_bare_expression() {
    // calculadin has no expression statements
    let result = parse_source("1 + 2;");

    assert!(result.is_err());
}

#[test]
fn test_parse_syntax_error_unclosed_block() {
    let result = parse_source("if (true) { x := 1;");

    assert!(result.is_err());
}

#[test]
fn test_parse_syntax_error_missing_condition_parens() {
    let result = parse_source("if true { x := 1; }");

    assert!(result.is_err());
}
