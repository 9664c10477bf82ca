use std::fmt;

use crate::keyword::Keyword;

/// A single lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A reserved keyword.
    Keyword(Keyword),
    /// An identifier (table/property name, or a function name such as
    /// `CONTAINS`, which the grammar resolves by context rather than by
    /// reserving it as a keyword).
    Ident(String),
    /// A `@name` parameter reference, without the leading `@`.
    Parameter(String),
    /// A single-quoted string literal, unescaped.
    String(String),
    /// A numeric literal, kept as its original text (the parser decides how
    /// to interpret it: `Float` in general, truncated to an integer for
    /// `TOP`/`LIMIT`).
    Number(String),
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `*`
    Star,
    /// `=`
    Equal,
    /// `!=` or `<>`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(kw) => write!(f, "{kw}"),
            Token::Ident(s) => write!(f, "{s}"),
            Token::Parameter(name) => write!(f, "@{name}"),
            Token::String(s) => write!(f, "'{s}'"),
            Token::Number(n) => write!(f, "{n}"),
            Token::Comma => f.write_str(","),
            Token::Dot => f.write_str("."),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Star => f.write_str("*"),
            Token::Equal => f.write_str("="),
            Token::NotEqual => f.write_str("!="),
            Token::Less => f.write_str("<"),
            Token::LessEq => f.write_str("<="),
            Token::Greater => f.write_str(">"),
            Token::GreaterEq => f.write_str(">="),
        }
    }
}

impl Token {
    /// `true` if this token is the given keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }
}
