#![deny(missing_docs)]
#![warn(unused_imports)]

//! Recursive-descent parser turning query text into a [`fauxdoc_ast::Query`].

mod clause;
mod cursor;
mod error;
mod expr;

pub use error::ParserError;

use fauxdoc_ast::Query;

/// Parses `text` as a single `SELECT` query.
pub fn parse(text: &str) -> Result<Query, ParserError> {
    let mut parser = cursor::Parser::new(text)?;
    clause::parse_query(&mut parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxdoc_ast::SelectItem;

    #[test]
    fn parses_end_to_end() {
        let query = parse("SELECT c.Name FROM Customers AS c WHERE c.Age >= 18 ORDER BY c.Name LIMIT 5")
            .unwrap();
        assert!(matches!(query.select.items, SelectItem::Paths(_)));
        assert_eq!(query.from.unwrap().source, "Customers");
    }

    #[test]
    fn surfaces_lexer_errors() {
        let err = parse("SELECT * FROM c WHERE c.Name = 'Alice").unwrap_err();
        assert!(matches!(err, ParserError::Tokenize(_)));
    }

    #[test]
    fn surfaces_syntax_errors() {
        let err = parse("SELECT FROM c").unwrap_err();
        assert!(matches!(err, ParserError::Syntax { .. }));
    }
}
