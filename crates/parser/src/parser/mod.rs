mod column;
mod common;
mod ddl;
mod error;

pub use self::error::{Error, Result};

use {
    crate::lexer::{Keyword, Lexer, Token, TokenKind},
    ast::Statement,
    tracing::debug,
};

/// Recursive-descent parser over the token stream of a [`Lexer`], with one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token<'a>>,
    failed: bool,
}

/// Parses every statement of the lexer's input, failing on the first error.
pub fn parse(lexer: Lexer<'_>) -> Result<Vec<Statement>> {
    Parser::new(lexer).collect()
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            peeked: None,
            failed: false,
        }
    }

    pub fn parse(sql: &'a str) -> Result<Vec<Statement>> {
        parse(Lexer::new(sql))
    }

    fn parse_next(&mut self) -> Result<Option<Statement>> {
        self.skip_semicolons()?;

        let token = self.peek()?;
        if token.kind == TokenKind::Eof {
            return Ok(None);
        }

        let statement = self.parse_statement()?;
        if !matches!(statement, Statement::Comment { .. }) {
            self.expect_statement_end()?;
        }

        debug!(position = %token.position, statement = statement.name(), "parsed statement");

        Ok(Some(statement))
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        let token = self.next_token()?;

        match token.kind {
            TokenKind::Keyword(Keyword::DROP) => self.parse_drop(),
            TokenKind::Keyword(Keyword::CREATE) => self.parse_create(),
            TokenKind::Keyword(Keyword::ALTER) => self.parse_alter(),
            TokenKind::CommentOpen => self.parse_comment(),
            _ => Err(self.unexpected(
                token,
                &[
                    TokenKind::Keyword(Keyword::DROP),
                    TokenKind::Keyword(Keyword::CREATE),
                    TokenKind::Keyword(Keyword::ALTER),
                    TokenKind::CommentOpen,
                ],
            )),
        }
    }

    /// A statement ends with `;`, which may be omitted before the end of input.
    fn expect_statement_end(&mut self) -> Result<()> {
        let token = self.peek()?;

        match token.kind {
            TokenKind::Semicolon => {
                self.next_token()?;
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected(token, &[TokenKind::Semicolon, TokenKind::Eof])),
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.parse_next().transpose();
        if let Some(Err(err)) = &result {
            debug!(position = %err.position(), error = %err, "failed to parse statement");
            self.failed = true;
        }

        result
    }
}
