//! The semantic visitor: one traversal, accumulated diagnostics.

use crate::{
    ast::ast::{Block, Expr, Program, Stmt, Ty},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::symbol_table::{Symbol, SymbolTable};

/// The built-in functions a call statement may name.
pub const BUILT_INS: [&str; 2] = ["print", "read"];

/// Result of one semantic pass: the populated symbol table and every
/// diagnostic found, in visitation order.
#[derive(Debug)]
pub struct Analysis {
    pub table: SymbolTable,
    pub errors: Vec<Error>,
}

impl Analysis {
    /// The pass failed exactly when at least one diagnostic was recorded.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Storage slots handed out, for a later flat-frame code generator.
    pub fn total_allocated(&self) -> usize {
        self.table.total_allocated()
    }
}

struct Analyzer {
    table: SymbolTable,
    errors: Vec<Error>,
}

/// Runs semantic analysis over a parsed program.
///
/// Every detected problem is recorded and the walk continues into the
/// remaining siblings and children; nothing here aborts the traversal. The
/// caller decides whether downstream phases may run based on
/// [`Analysis::passed`].
pub fn analyze(program: &Program) -> Analysis {
    let mut analyzer = Analyzer {
        table: SymbolTable::new(),
        errors: vec![],
    };

    // The root block shares the pre-existing global scope
    analyzer.visit_block(&program.block);

    Analysis {
        table: analyzer.table,
        errors: analyzer.errors,
    }
}

impl Analyzer {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    fn visit_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.visit_stmt(stmt);
        }
    }

    /// Conditional arms introduce their own scope; the scope is closed on
    /// the way out regardless of how many diagnostics the arm produced.
    fn visit_scoped_block(&mut self, block: &Block) {
        self.table.open_scope();
        self.visit_block(block);
        self.table.close_scope();
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Declaration {
                name,
                declared_type,
                span,
            } => {
                if let Err(name) = self.table.install(Symbol::variable(name, *declared_type)) {
                    self.report(Error::new(
                        ErrorImpl::VariableAlreadyDeclared { variable: name },
                        span.start.clone(),
                    ));
                }
            }
            Stmt::Assignment {
                target,
                value,
                span,
            } => {
                let target_ty = match self.table.lookup(target) {
                    Some(symbol) => symbol.ty,
                    None => {
                        self.report(Error::new(
                            ErrorImpl::VariableNotDeclared {
                                variable: target.clone(),
                            },
                            span.start.clone(),
                        ));
                        Ty::Unresolved
                    }
                };

                let value_ty = self.visit_expr(value);

                if target_ty != Ty::Unresolved
                    && value_ty != Ty::Unresolved
                    && target_ty != value_ty
                {
                    self.report(Error::new(
                        ErrorImpl::TypeMatchError {
                            expected: target_ty.to_string(),
                            received: value_ty.to_string(),
                        },
                        value.span().start.clone(),
                    ));
                }
            }
            Stmt::Conditional {
                condition,
                then_block,
                else_block,
                ..
            } => {
                let condition_ty = self.visit_expr(condition);
                if condition_ty != Ty::Unresolved && condition_ty != Ty::Bool {
                    self.report(Error::new(
                        ErrorImpl::TypeMatchError {
                            expected: Ty::Bool.to_string(),
                            received: condition_ty.to_string(),
                        },
                        condition.span().start.clone(),
                    ));
                }

                self.visit_scoped_block(then_block);
                if let Some(else_block) = else_block {
                    self.visit_scoped_block(else_block);
                }
            }
            Stmt::Call {
                function,
                argument,
                span,
            } => {
                if !BUILT_INS.contains(&function.as_str()) {
                    self.report(Error::new(
                        ErrorImpl::UnknownFunction {
                            function: function.clone(),
                        },
                        span.start.clone(),
                    ));
                }

                // The argument is checked even when the function is unknown
                self.visit_expr(argument);
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) -> Ty {
        match expr {
            Expr::Number { .. } => Ty::Real,
            Expr::Boolean { .. } => Ty::Bool,
            Expr::Identifier { name, span } => match self.table.lookup(name) {
                Some(symbol) => symbol.ty,
                None => {
                    self.report(Error::new(
                        ErrorImpl::VariableNotDeclared {
                            variable: name.clone(),
                        },
                        span.start.clone(),
                    ));
                    Ty::Unresolved
                }
            },
            Expr::Unary {
                operator, operand, ..
            } => {
                let operand_ty = self.visit_expr(operand);

                let expected = match operator.kind {
                    TokenKind::Dash => Ty::Real,
                    TokenKind::Not => Ty::Bool,
                    _ => unreachable!("parser only builds `-` and `!` unary nodes"),
                };

                if operand_ty == Ty::Unresolved {
                    return Ty::Unresolved;
                }

                if operand_ty != expected {
                    self.report(Error::new(
                        ErrorImpl::TypeMatchError {
                            expected: expected.to_string(),
                            received: operand_ty.to_string(),
                        },
                        operand.span().start.clone(),
                    ));
                    return Ty::Unresolved;
                }

                expected
            }
            Expr::Binary {
                left,
                operator,
                right,
                ..
            } => {
                let left_ty = self.visit_expr(left);
                let right_ty = self.visit_expr(right);

                if left_ty == Ty::Unresolved || right_ty == Ty::Unresolved {
                    return Ty::Unresolved;
                }

                match operator.kind {
                    // Arithmetic: real x real -> real
                    TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
                        self.check_operands(Ty::Real, left, left_ty, right, right_ty, Ty::Real)
                    }
                    // Relational: real x real -> bool
                    TokenKind::Less
                    | TokenKind::LessEquals
                    | TokenKind::Greater
                    | TokenKind::GreaterEquals => {
                        self.check_operands(Ty::Real, left, left_ty, right, right_ty, Ty::Bool)
                    }
                    // Equality: both sides the same type -> bool
                    TokenKind::Equals | TokenKind::NotEquals => {
                        if left_ty != right_ty {
                            self.report(Error::new(
                                ErrorImpl::TypeMatchError {
                                    expected: left_ty.to_string(),
                                    received: right_ty.to_string(),
                                },
                                right.span().start.clone(),
                            ));
                            return Ty::Unresolved;
                        }
                        Ty::Bool
                    }
                    // Logical: bool x bool -> bool
                    TokenKind::And | TokenKind::Or => {
                        self.check_operands(Ty::Bool, left, left_ty, right, right_ty, Ty::Bool)
                    }
                    _ => unreachable!("parser only builds binary nodes for infix operators"),
                }
            }
        }
    }

    /// Requires both operands to have the given type; yields the result
    /// type on success and `Unresolved` (plus a diagnostic anchored at the
    /// first mismatching operand) otherwise.
    fn check_operands(
        &mut self,
        operand_ty: Ty,
        left: &Expr,
        left_ty: Ty,
        right: &Expr,
        right_ty: Ty,
        result_ty: Ty,
    ) -> Ty {
        for (operand, found) in [(left, left_ty), (right, right_ty)] {
            if found != operand_ty {
                self.report(Error::new(
                    ErrorImpl::TypeMatchError {
                        expected: operand_ty.to_string(),
                        received: found.to_string(),
                    },
                    operand.span().start.clone(),
                ));
                return Ty::Unresolved;
            }
        }

        result_ty
    }
}
