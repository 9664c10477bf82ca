use fauxdoc_lexer::{Keyword, Lexer, Spanned, Token};

use crate::error::ParserError;

/// Thin cursor over a token stream, with the `expect_*`/`parse_*` helper
/// vocabulary the rest of the parser is built from.
pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    /// Offset to report if we run past the end of the token stream.
    eof_offset: usize,
}

impl Parser {
    /// Tokenizes `text` and builds a parser over the result.
    pub fn new(text: &str) -> Result<Self, ParserError> {
        let eof_offset = text.chars().count();
        let tokens = Lexer::new(text).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            eof_offset,
        })
    }

    /// Returns a reference to the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    /// Returns a reference to the token `ahead` positions from the cursor,
    /// without consuming anything (`ahead = 0` is the same as [`Self::peek`]).
    pub fn peek_ahead(&self, ahead: usize) -> Option<&Token> {
        self.tokens.get(self.pos + ahead).map(|(t, _)| t)
    }

    /// The character offset of the next token, or of end-of-input.
    pub fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, offset)| *offset)
            .unwrap_or(self.eof_offset)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// `true` iff there are no more tokens.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consumes the next token if it is the given keyword.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if matches!(self.peek(), Some(t) if t.is_keyword(keyword)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the next token if it equals `expected`.
    pub fn eat_token(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the next token, requiring it to be the given keyword.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParserError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.expected(format!("keyword {keyword}")))
        }
    }

    /// Consumes the next token, requiring it to equal `expected`.
    pub fn expect_token(&mut self, expected: &Token) -> Result<(), ParserError> {
        if self.eat_token(expected) {
            Ok(())
        } else {
            Err(self.expected(format!("{expected}")))
        }
    }

    /// Consumes the next token, requiring it to be an identifier, and
    /// returns its text.
    pub fn expect_ident(&mut self) -> Result<String, ParserError> {
        match self.peek() {
            Some(Token::Ident(_)) => {
                let Some(Token::Ident(name)) = self.advance() else {
                    unreachable!()
                };
                Ok(name)
            }
            _ => Err(self.expected("identifier")),
        }
    }

    /// Builds a `Syntax` error naming what was expected, at the current offset.
    pub fn expected(&self, what: impl std::fmt::Display) -> ParserError {
        let offset = self.offset();
        match self.peek() {
            Some(found) => ParserError::syntax(format!("expected {what}, found {found}"), offset),
            None => ParserError::syntax(format!("expected {what}, found end of input"), offset),
        }
    }
}
