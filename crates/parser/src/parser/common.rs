use {
    super::{
        error::{Error, InvalidNumberSnafu, Result},
        Parser,
    },
    crate::lexer::{Keyword, Token, TokenKind},
    ast::{ColumnName, TableName},
    snafu::prelude::*,
};

impl<'a> Parser<'a> {
    pub(super) fn peek(&mut self) -> Result<Token<'a>> {
        match self.peeked {
            Some(token) => Ok(token),
            None => {
                let token = self.lexer.scan_token()?;
                self.peeked = Some(token);
                Ok(token)
            }
        }
    }

    pub(super) fn next_token(&mut self) -> Result<Token<'a>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.scan_token()?),
        }
    }

    pub(super) fn unexpected(&self, token: Token<'a>, expected: &[TokenKind]) -> Error {
        Error::UnexpectedToken {
            position: token.position,
            expected: expected.to_vec(),
            found: token.kind,
        }
    }

    pub(super) fn skip_semicolons(&mut self) -> Result<()> {
        while self.try_match(TokenKind::Semicolon)?.is_some() {}
        Ok(())
    }

    pub(super) fn must_match(&mut self, kind: TokenKind) -> Result<Token<'a>> {
        let token = self.next_token()?;
        if token.kind != kind {
            return Err(self.unexpected(token, &[kind]));
        }
        Ok(token)
    }

    pub(super) fn must_match_keyword(&mut self, keyword: Keyword) -> Result<Token<'a>> {
        self.must_match(TokenKind::Keyword(keyword))
    }

    pub(super) fn try_match(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>> {
        if self.peek()?.kind != kind {
            return Ok(None);
        }
        self.next_token().map(Some)
    }

    pub(super) fn try_match_keyword(&mut self, keyword: Keyword) -> Result<bool> {
        Ok(self.try_match(TokenKind::Keyword(keyword))?.is_some())
    }

    /// Reads the content of a quoted literal or identifier whose opening token has been consumed.
    pub(super) fn parse_delimited(&mut self, open: TokenKind) -> Result<&'a str> {
        let Token { literal, .. } = self.must_match(TokenKind::Raw)?;
        self.must_match(open)?;
        Ok(literal)
    }

    /// A bare identifier, a backtick-quoted one, or a data type keyword used as a name.
    pub(super) fn parse_name(&mut self) -> Result<String> {
        let token = self.next_token()?;

        match token.kind {
            TokenKind::Ident => Ok(token.literal.to_string()),
            TokenKind::Keyword(keyword) if keyword.data_type().is_some() => {
                Ok(token.literal.to_string())
            }
            TokenKind::Backtick => Ok(self.parse_delimited(TokenKind::Backtick)?.to_string()),
            _ => Err(self.unexpected(token, &[TokenKind::Ident, TokenKind::Backtick])),
        }
    }

    /// Any word, keyword or not, or a quoted literal kept with its delimiters so that it
    /// renders back verbatim. Used for charset and collation names.
    pub(super) fn parse_word(&mut self) -> Result<String> {
        let token = self.next_token()?;

        match token.kind {
            TokenKind::Ident | TokenKind::Keyword(_) => Ok(token.literal.to_string()),
            kind @ (TokenKind::Backtick | TokenKind::SingleQuote | TokenKind::DoubleQuote) => {
                let content = self.parse_delimited(kind)?;
                Ok(format!("{}{}{}", token.literal, content, token.literal))
            }
            _ => Err(self.unexpected(
                token,
                &[
                    TokenKind::Ident,
                    TokenKind::Backtick,
                    TokenKind::SingleQuote,
                    TokenKind::DoubleQuote,
                ],
            )),
        }
    }

    pub(super) fn parse_table_name(&mut self) -> Result<TableName> {
        let name = self.parse_name()?;

        if self.try_match(TokenKind::Period)?.is_some() {
            return Ok(TableName::qualified(name, self.parse_name()?));
        }

        Ok(TableName::new(name))
    }

    pub(super) fn parse_column_name(&mut self) -> Result<ColumnName> {
        self.parse_name().map(ColumnName::new)
    }

    pub(super) fn parse_number(&mut self) -> Result<u32> {
        let Token {
            literal, position, ..
        } = self.must_match(TokenKind::Number)?;

        literal
            .parse()
            .context(InvalidNumberSnafu { position, literal })
    }

    pub(super) fn parse_comma_separated_within_parentheses<T, F>(&mut self, func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        self.must_match(TokenKind::LeftParen)?;
        let result = self.parse_comma_separated(func)?;
        self.must_match(TokenKind::RightParen)?;

        Ok(result)
    }

    pub(super) fn parse_comma_separated<T, F>(&mut self, mut func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let mut v = vec![];

        loop {
            v.push(func(self)?);

            if self.try_match(TokenKind::Comma)?.is_none() {
                break;
            }
        }

        Ok(v)
    }
}

/// Consumes the next token and dispatches on the keyword it holds; any other
/// token fails with every listed keyword as the expectation.
macro_rules! match_keyword {
    ( $parser:expr, { $( $($keyword:ident)|+ => $e:expr, )+ } ) => {{
        let token = $parser.next_token()?;

        match token.kind {
            $( $( TokenKind::Keyword(Keyword::$keyword) )|+ => $e, )+
            _ => {
                return Err($parser.unexpected(
                    token,
                    &[ $( $( TokenKind::Keyword(Keyword::$keyword), )+ )+ ],
                ))
            }
        }
    }};
}

pub(super) use match_keyword;
