//! Unit tests for the AST dump.

use std::rc::Rc;

use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;

use super::printer::print_ast;

fn dump(source: &str) -> String {
    let tokens = tokenize(source.to_string(), Some("test.cldn".to_string())).unwrap();
    let program = parse(tokens, Rc::new("test.cldn".to_string())).unwrap();
    print_ast(&program)
}

#[test]
fn test_print_declaration_and_assignment() {
    assert_eq!(
        dump("x : real; x := 2 + 3;"),
        "(Program (Block (Decl x : real) (Assign (Id x) (CalcBin (Num 2) + (Num 3)))))"
    );
}

#[test]
fn test_print_conditional() {
    assert_eq!(
        dump("if (true) { x : bool; } else { y : real; }"),
        "(Program (Block (If (Bool true) (Block (Decl x : bool)) (Block (Decl y : real)))))"
    );
}

#[test]
fn test_print_call_and_unary() {
    assert_eq!(
        dump("print(-x);"),
        "(Program (Block (PRINT (CalcUn - (Id x)))))"
    );
}

#[test]
fn test_print_empty_program() {
    assert_eq!(dump(""), "(Program (Block))");
}
