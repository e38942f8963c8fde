use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

/// The semantic type of a calculadin value.
///
/// `Unresolved` marks an expression whose type could not be established,
/// either because an operand was itself faulty or because an identifier was
/// never declared. Checks involving an `Unresolved` operand are suppressed
/// so one mistake yields one diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Real,
    Bool,
    Unresolved,
}

impl Display for Ty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ty::Real => write!(f, "real"),
            Ty::Bool => write!(f, "bool"),
            Ty::Unresolved => write!(f, "<unresolved>"),
        }
    }
}

/// The root of every parse: one program holding one statement block.
#[derive(Debug, Clone)]
pub struct Program {
    pub block: Block,
}

/// An ordered sequence of statements. Appears as the program body and as
/// the arms of a conditional; only the conditional arms introduce scopes.
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    /// `x : real;`
    Declaration {
        name: String,
        declared_type: Ty,
        span: Span,
    },
    /// `x := expr;`
    Assignment {
        target: String,
        value: Expr,
        span: Span,
    },
    /// `if (cond) { ... } else { ... }`
    Conditional {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
        span: Span,
    },
    /// `print(expr);` - a call to one of the built-in functions
    Call {
        function: String,
        argument: Expr,
        span: Span,
    },
}

impl Stmt {
    pub fn span(&self) -> &Span {
        match self {
            Stmt::Declaration { span, .. } => span,
            Stmt::Assignment { span, .. } => span,
            Stmt::Conditional { span, .. } => span,
            Stmt::Call { span, .. } => span,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Expr {
    /// `left op right` - the operator token is kept verbatim from the lexer
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
        span: Span,
    },
    /// `-x` or `!x`
    Unary {
        operator: Token,
        operand: Box<Expr>,
        span: Span,
    },
    Identifier { name: String, span: Span },
    Number { value: f64, span: Span },
    Boolean { value: bool, span: Span },
}

impl Expr {
    pub fn span(&self) -> &Span {
        match self {
            Expr::Binary { span, .. } => span,
            Expr::Unary { span, .. } => span,
            Expr::Identifier { span, .. } => span,
            Expr::Number { span, .. } => span,
            Expr::Boolean { span, .. } => span,
        }
    }
}
