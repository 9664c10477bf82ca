use fauxdoc_ast::{BetweenBounds, BinaryOp, Expr, FunctionCall, UnaryOp};
use fauxdoc_core::{PropertyPath, Value};
use fauxdoc_lexer::{Keyword, Token};

use crate::{cursor::Parser, error::ParserError};

/// Parses a full expression: `OrExpr := AndExpr ('OR' AndExpr)*`.
pub fn parse_expr(p: &mut Parser) -> Result<Expr, ParserError> {
    parse_or(p)
}

fn parse_or(p: &mut Parser) -> Result<Expr, ParserError> {
    let mut lhs = parse_and(p)?;
    while p.eat_keyword(Keyword::Or) {
        let rhs = parse_and(p)?;
        lhs = Expr::Binary(BinaryOp::Or, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(p: &mut Parser) -> Result<Expr, ParserError> {
    let mut lhs = parse_cmp(p)?;
    while p.eat_keyword(Keyword::And) {
        let rhs = parse_cmp(p)?;
        lhs = Expr::Binary(BinaryOp::And, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

/// `CmpExpr := Term (CmpOp Term | 'BETWEEN' Term 'AND' Term)?`
fn parse_cmp(p: &mut Parser) -> Result<Expr, ParserError> {
    let lhs = parse_term(p)?;

    if p.eat_keyword(Keyword::Between) {
        let lower = parse_term(p)?;
        p.expect_keyword(Keyword::And)?;
        let upper = parse_term(p)?;
        return Ok(Expr::Between(
            Box::new(lhs),
            Box::new(BetweenBounds { lower, upper }),
        ));
    }

    let op = match p.peek() {
        Some(Token::Equal) => Some(BinaryOp::Equal),
        Some(Token::NotEqual) => Some(BinaryOp::NotEqual),
        Some(Token::Less) => Some(BinaryOp::Less),
        Some(Token::LessEq) => Some(BinaryOp::LessEq),
        Some(Token::Greater) => Some(BinaryOp::Greater),
        Some(Token::GreaterEq) => Some(BinaryOp::GreaterEq),
        _ => None,
    };
    let Some(op) = op else {
        return Ok(lhs);
    };
    p.advance();
    let rhs = parse_term(p)?;
    Ok(Expr::Binary(op, Box::new(lhs), Box::new(rhs)))
}

/// `Term := 'NOT' Atom | Atom`
fn parse_term(p: &mut Parser) -> Result<Expr, ParserError> {
    if p.eat_keyword(Keyword::Not) {
        let inner = parse_atom(p)?;
        return Ok(Expr::Unary(UnaryOp::Not, Box::new(inner)));
    }
    parse_atom(p)
}

/// `Atom := Literal | FnCall | Parameter | PropPath | '(' Expr ')'`
fn parse_atom(p: &mut Parser) -> Result<Expr, ParserError> {
    match p.peek() {
        Some(Token::LeftParen) => {
            p.advance();
            let inner = parse_expr(p)?;
            p.expect_token(&Token::RightParen)?;
            Ok(inner)
        }
        Some(Token::Parameter(_)) => {
            let Some(Token::Parameter(name)) = p.advance() else {
                unreachable!()
            };
            Ok(Expr::Parameter(name))
        }
        Some(Token::String(_)) => {
            let Some(Token::String(s)) = p.advance() else {
                unreachable!()
            };
            Ok(Expr::Constant(Value::String(s)))
        }
        Some(Token::Number(_)) => {
            let Some(Token::Number(n)) = p.advance() else {
                unreachable!()
            };
            let value = if n.contains('.') {
                let f: f64 = n.parse().map_err(|_| {
                    ParserError::syntax(format!("invalid number literal {n}"), p.offset())
                })?;
                Value::Float(f)
            } else {
                let i: i64 = n.parse().map_err(|_| {
                    ParserError::syntax(format!("invalid number literal {n}"), p.offset())
                })?;
                Value::Integer(i)
            };
            Ok(Expr::Constant(value))
        }
        Some(Token::Keyword(Keyword::True)) => {
            p.advance();
            Ok(Expr::Constant(Value::Bool(true)))
        }
        Some(Token::Keyword(Keyword::False)) => {
            p.advance();
            Ok(Expr::Constant(Value::Bool(false)))
        }
        Some(Token::Keyword(Keyword::Null)) => {
            p.advance();
            Ok(Expr::Constant(Value::Null))
        }
        Some(Token::Ident(_)) => parse_ident_led(p),
        _ => Err(p.expected("expression")),
    }
}

/// An atom starting with an identifier is either a function call
/// (`Ident '(' ... ')'`) or a dotted property path.
fn parse_ident_led(p: &mut Parser) -> Result<Expr, ParserError> {
    let mut segments = vec![p.expect_ident()?];
    if p.peek() == Some(&Token::LeftParen) && segments.len() == 1 {
        let name = segments.remove(0);
        return parse_function_call(p, name);
    }
    while p.eat_token(&Token::Dot) {
        segments.push(p.expect_ident()?);
    }
    Ok(Expr::Property(PropertyPath {
        alias: None,
        segments,
    }))
}

fn parse_function_call(p: &mut Parser, name: String) -> Result<Expr, ParserError> {
    p.expect_token(&Token::LeftParen)?;
    let mut args = Vec::new();
    if p.peek() != Some(&Token::RightParen) {
        loop {
            args.push(parse_function_arg(p)?);
            if !p.eat_token(&Token::Comma) {
                break;
            }
        }
    }
    p.expect_token(&Token::RightParen)?;
    Ok(Expr::Function(FunctionCall { name, args }))
}

/// Function arguments accept the same literals/parameters/properties as
/// any other atom, plus bare `true`/`false` (used by `CONTAINS`'s optional
/// `ignoreCase` flag) which `parse_atom` already covers via the keyword arms.
fn parse_function_arg(p: &mut Parser) -> Result<Expr, ParserError> {
    parse_atom(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxdoc_lexer::Lexer;

    fn parse(input: &str) -> Expr {
        let text = input.to_string();
        let mut parser = Parser::new(&text).unwrap();
        parse_expr(&mut parser).unwrap()
    }

    #[test]
    fn parses_equality() {
        let expr = parse("c.Name = 'Alice'");
        assert_eq!(
            expr,
            Expr::Binary(
                BinaryOp::Equal,
                Box::new(Expr::Property(PropertyPath {
                    alias: None,
                    segments: vec!["c".into(), "Name".into()]
                })),
                Box::new(Expr::Constant(Value::String("Alice".into())))
            )
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        // a OR b AND c  ==  a OR (b AND c)
        let expr = parse("@a = 1 OR @b = 2 AND @c = 3");
        match expr {
            Expr::Binary(BinaryOp::Or, _, rhs) => {
                assert!(matches!(*rhs, Expr::Binary(BinaryOp::And, _, _)));
            }
            _ => panic!("expected top-level OR"),
        }
    }

    #[test]
    fn not_binds_tighter_than_and() {
        let expr = parse("NOT @a = 1 AND @b = 2");
        match expr {
            Expr::Binary(BinaryOp::And, lhs, _) => {
                assert!(matches!(*lhs, Expr::Unary(UnaryOp::Not, _)));
            }
            _ => panic!("expected top-level AND"),
        }
    }

    #[test]
    fn parses_between() {
        let expr = parse("c.Age BETWEEN 20 AND 27");
        assert!(matches!(expr, Expr::Between(_, _)));
    }

    #[test]
    fn parses_function_call() {
        let expr = parse("CONTAINS(c.Name, 'a', true)");
        match expr {
            Expr::Function(call) => {
                assert_eq!(call.name, "CONTAINS");
                assert_eq!(call.args.len(), 3);
            }
            _ => panic!("expected function call"),
        }
    }

    #[test]
    fn unused_import_guard() {
        let _ = Lexer::new("");
    }
}
