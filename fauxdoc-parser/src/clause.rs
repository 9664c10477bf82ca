use fauxdoc_ast::{
    Direction, FromClause, LimitClause, OrderByClause, OrderItem, Query, SelectClause, SelectItem,
    WhereClause,
};
use fauxdoc_core::PropertyPath;
use fauxdoc_lexer::{Keyword, Token};

use crate::{cursor::Parser, error::ParserError, expr::parse_expr};

/// Parses a full query: `SELECT [TOP n] (* | path (',' path)*) [FROM source [[AS] alias]]
/// [WHERE expr] [ORDER BY item (',' item)*] [LIMIT n]`.
pub fn parse_query(p: &mut Parser) -> Result<Query, ParserError> {
    let select = parse_select(p)?;
    let from = parse_from(p)?;
    let r#where = parse_where(p)?;
    let order_by = parse_order_by(p)?;
    let limit = parse_limit(p)?;

    if !p.is_at_end() {
        return Err(p.expected("end of query"));
    }

    Ok(Query {
        select,
        from,
        r#where,
        order_by,
        limit,
    })
}

fn parse_select(p: &mut Parser) -> Result<SelectClause, ParserError> {
    p.expect_keyword(Keyword::Select)?;

    let top = if p.eat_keyword(Keyword::Top) {
        Some(parse_unsigned_int(p)?)
    } else {
        None
    };

    let items = if p.eat_token(&Token::Star) {
        SelectItem::All
    } else {
        let mut paths = vec![parse_property_path(p)?];
        while p.eat_token(&Token::Comma) {
            paths.push(parse_property_path(p)?);
        }
        SelectItem::Paths(paths)
    };

    Ok(SelectClause { top, items })
}

fn parse_from(p: &mut Parser) -> Result<Option<FromClause>, ParserError> {
    if !p.eat_keyword(Keyword::From) {
        return Ok(None);
    }
    let source = p.expect_ident()?;
    let alias = if p.eat_keyword(Keyword::As) {
        Some(p.expect_ident()?)
    } else if matches!(p.peek(), Some(Token::Ident(_))) {
        Some(p.expect_ident()?)
    } else {
        None
    };
    Ok(Some(FromClause { source, alias }))
}

fn parse_where(p: &mut Parser) -> Result<Option<WhereClause>, ParserError> {
    if !p.eat_keyword(Keyword::Where) {
        return Ok(None);
    }
    let predicate = parse_expr(p)?;
    Ok(Some(WhereClause { predicate }))
}

fn parse_order_by(p: &mut Parser) -> Result<Option<OrderByClause>, ParserError> {
    if !p.eat_keyword(Keyword::Order) {
        return Ok(None);
    }
    p.expect_keyword(Keyword::By)?;

    let mut items = vec![parse_order_item(p)?];
    while p.eat_token(&Token::Comma) {
        items.push(parse_order_item(p)?);
    }
    Ok(Some(OrderByClause { items }))
}

fn parse_order_item(p: &mut Parser) -> Result<OrderItem, ParserError> {
    let path = parse_property_path(p)?;
    let direction = if p.eat_keyword(Keyword::Asc) {
        Direction::Ascending
    } else if p.eat_keyword(Keyword::Desc) {
        Direction::Descending
    } else {
        Direction::default()
    };
    Ok(OrderItem { path, direction })
}

fn parse_limit(p: &mut Parser) -> Result<Option<LimitClause>, ParserError> {
    if !p.eat_keyword(Keyword::Limit) {
        return Ok(None);
    }
    let count = parse_unsigned_int(p)?;
    Ok(Some(LimitClause { count }))
}

fn parse_property_path(p: &mut Parser) -> Result<PropertyPath, ParserError> {
    let mut segments = vec![p.expect_ident()?];
    while p.eat_token(&Token::Dot) {
        segments.push(p.expect_ident()?);
    }
    Ok(PropertyPath {
        alias: None,
        segments,
    })
}

/// Parses a `TOP`/`LIMIT` count. Per the dialect's lexical rule, all number
/// literals (including fractional ones like `5.0`) truncate toward zero
/// rather than failing to parse.
fn parse_unsigned_int(p: &mut Parser) -> Result<u64, ParserError> {
    match p.peek() {
        Some(Token::Number(_)) => {
            let Some(Token::Number(n)) = p.advance() else {
                unreachable!()
            };
            let parsed: f64 = n
                .parse()
                .map_err(|_| ParserError::syntax(format!("expected non-negative integer, found {n}"), p.offset()))?;
            let truncated = parsed.trunc();
            if truncated < 0.0 {
                return Err(ParserError::syntax(
                    format!("expected non-negative integer, found {n}"),
                    p.offset(),
                ));
            }
            Ok(truncated as u64)
        }
        _ => Err(p.expected("integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Query {
        let text = input.to_string();
        let mut parser = Parser::new(&text).unwrap();
        parse_query(&mut parser).unwrap()
    }

    #[test]
    fn parses_select_star_from_where() {
        let query = parse("SELECT * FROM c WHERE c.Name = 'Alice'");
        assert!(matches!(query.select.items, SelectItem::All));
        assert_eq!(query.from.unwrap().alias.as_deref(), Some("c"));
        assert!(query.r#where.is_some());
    }

    #[test]
    fn parses_select_with_top_and_projection() {
        let query = parse("SELECT TOP 5 c.id, c.Name FROM c");
        assert_eq!(query.select.top, Some(5));
        match query.select.items {
            SelectItem::Paths(paths) => assert_eq!(paths.len(), 2),
            _ => panic!("expected projection list"),
        }
    }

    #[test]
    fn parses_from_alias_without_as() {
        let query = parse("SELECT * FROM Customers c");
        let from = query.from.unwrap();
        assert_eq!(from.source, "Customers");
        assert_eq!(from.alias.as_deref(), Some("c"));
    }

    #[test]
    fn parses_order_by_and_limit() {
        let query = parse("SELECT * FROM c ORDER BY c.Age DESC, c.Name LIMIT 10");
        let order_by = query.order_by.unwrap();
        assert_eq!(order_by.items.len(), 2);
        assert_eq!(order_by.items[0].direction, Direction::Descending);
        assert_eq!(order_by.items[1].direction, Direction::Ascending);
        assert_eq!(query.limit.unwrap().count, 10);
    }

    #[test]
    fn top_and_limit_truncate_fractional_literals() {
        let query = parse("SELECT TOP 5.0 * FROM c ORDER BY c.Age LIMIT 3.9");
        assert_eq!(query.select.top, Some(5));
        assert_eq!(query.limit.unwrap().count, 3);
    }

    #[test]
    fn rejects_trailing_garbage() {
        let text = "SELECT * FROM c WHERE c.Name = 'Alice' GARBAGE".to_string();
        let mut parser = Parser::new(&text).unwrap();
        assert!(parse_query(&mut parser).is_err());
    }
}
