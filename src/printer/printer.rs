use crate::ast::ast::{Block, Expr, Program, Stmt};

/// Renders the whole program as an s-expression.
///
/// `x : real; x := 2 + 3;` becomes
/// `(Program (Block (Decl x : real) (Assign (Id x) (CalcBin (Num 2) + (Num 3)))))`.
pub fn print_ast(program: &Program) -> String {
    let mut out = String::from("(Program ");
    print_block(&mut out, &program.block);
    out.push(')');
    out
}

fn print_block(out: &mut String, block: &Block) {
    out.push_str("(Block");
    for stmt in &block.statements {
        out.push(' ');
        print_stmt(out, stmt);
    }
    out.push(')');
}

fn print_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Declaration {
            name,
            declared_type,
            ..
        } => {
            out.push_str(&format!("(Decl {} : {})", name, declared_type));
        }
        Stmt::Assignment { target, value, .. } => {
            out.push_str(&format!("(Assign (Id {}) ", target));
            print_expr(out, value);
            out.push(')');
        }
        Stmt::Conditional {
            condition,
            then_block,
            else_block,
            ..
        } => {
            out.push_str("(If ");
            print_expr(out, condition);
            out.push(' ');
            print_block(out, then_block);
            if let Some(else_block) = else_block {
                out.push(' ');
                print_block(out, else_block);
            }
            out.push(')');
        }
        Stmt::Call {
            function, argument, ..
        } => {
            out.push_str(&format!("({} ", function.to_uppercase()));
            print_expr(out, argument);
            out.push(')');
        }
    }
}

fn print_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
            ..
        } => {
            out.push_str("(CalcBin ");
            print_expr(out, left);
            out.push_str(&format!(" {} ", operator.value));
            print_expr(out, right);
            out.push(')');
        }
        Expr::Unary {
            operator, operand, ..
        } => {
            out.push_str(&format!("(CalcUn {} ", operator.value));
            print_expr(out, operand);
            out.push(')');
        }
        Expr::Identifier { name, .. } => {
            out.push_str(&format!("(Id {})", name));
        }
        Expr::Number { value, .. } => {
            out.push_str(&format!("(Num {})", value));
        }
        Expr::Boolean { value, .. } => {
            out.push_str(&format!("(Bool {})", value));
        }
    }
}
