use crate::{
    ast::ast::{Block, Stmt, Ty},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser
        .get_stmt_lookup()
        .contains_key(&parser.current_token_kind())
    {
        return parser
            .get_stmt_lookup()
            .get(&parser.current_token_kind())
            .unwrap()(parser);
    }

    // calculadin has no expression statements, so anything else is a syntax error
    Err(Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected a statement"),
        },
        parser.get_position(),
    ))
}

/// Parses a statement that starts with an identifier.
///
/// The following token decides the form:
/// - `:`  declaration  `x : real;`
/// - `:=` assignment   `x := expr;`
/// - `(`  built-in call `print(expr);`
pub fn parse_ident_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.next_token_kind() {
        TokenKind::Colon => parse_declaration_stmt(parser),
        TokenKind::Assign => parse_assignment_stmt(parser),
        TokenKind::OpenParen => parse_call_stmt(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `:`, `:=` or `(` after identifier"),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.advance().clone();
    parser.expect(TokenKind::Colon)?;

    let declared_type = match parser.current_token_kind() {
        TokenKind::Real => Ty::Real,
        TokenKind::Bool => Ty::Bool,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a type name (`real` or `bool`)"),
                },
                parser.get_position(),
            ))
        }
    };
    parser.advance();

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Declaration {
        name: name_token.value.clone(),
        declared_type,
        span: Span {
            start: name_token.span.start.clone(),
            end: parser.get_position(),
        },
    })
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.advance().clone();
    parser.expect(TokenKind::Assign)?;

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assignment {
        target: name_token.value.clone(),
        value,
        span: Span {
            start: name_token.span.start.clone(),
            end: parser.get_position(),
        },
    })
}

pub fn parse_call_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.advance().clone();
    parser.expect(TokenKind::OpenParen)?;

    // Built-ins take exactly one argument
    let argument = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Call {
        function: name_token.value.clone(),
        argument,
        span: Span {
            start: name_token.span.start.clone(),
            end: parser.get_position(),
        },
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_block = parse_block(parser)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::Conditional {
        condition,
        then_block,
        else_block,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start.clone();

    let mut statements = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Block {
        statements,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}
