//! The tokenizer.
//!
//! Outside of quotes and comments the lexer is in `Normal` mode. An opening
//! backtick, quote or `/*` is emitted as its own token and switches to `Raw`
//! mode, in which everything up to the terminator becomes a single `Raw`
//! token. The terminator itself is parked in `pending` and handed out by the
//! following call, after which scanning resumes in `Normal` mode:
//!
//! ```text
//! Normal --open--> Raw { terminator } --content--> pending(close) --> Normal
//! ```

mod error;
mod token;

pub use self::{
    error::{Error, Result},
    token::{Keyword, NotKeywordError, Token, TokenKind},
};

use {
    self::error::{UnexpectedCharSnafu, UnterminatedLiteralSnafu},
    crate::common::Position,
    std::{
        iter::Peekable,
        str::{CharIndices, FromStr},
    },
    tracing::trace,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    Raw {
        terminator: &'static str,
        close: TokenKind,
        opened_at: Position,
    },
}

pub struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
    mode: Mode,
    pending: Option<Token<'a>>,
    failed: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    /// Yields tokens up to, but not including, `Eof`, and stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.scan_token() {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            }) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
            token => Some(token),
        }
    }
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
            line: 1,
            column: 1,
            mode: Mode::Normal,
            pending: None,
            failed: false,
        }
    }

    /// Returns the next token. Once the input is exhausted every call returns `Eof`.
    pub fn scan_token(&mut self) -> Result<Token<'a>> {
        let token = match (self.pending.take(), self.mode) {
            (Some(token), _) => token,
            (None, Mode::Normal) => self.scan_normal()?,
            (None, Mode::Raw {
                terminator,
                close,
                opened_at,
            }) => self.scan_raw(terminator, close, opened_at)?,
        };

        trace!(kind = ?token.kind, literal = token.literal, position = %token.position, "scanned token");

        Ok(token)
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Byte offset of the next unconsumed character.
    fn offset(&mut self) -> usize {
        self.iter.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.iter.peek().map(|&(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.iter.next()?;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    fn bump_while(&mut self, func: impl Fn(char) -> bool) {
        while self.peek_char().map_or(false, &func) {
            self.bump();
        }
    }

    fn enter_raw(
        &mut self,
        open: TokenKind,
        terminator: &'static str,
        close: TokenKind,
        opened_at: Position,
    ) -> TokenKind {
        self.mode = Mode::Raw {
            terminator,
            close,
            opened_at,
        };
        open
    }

    fn scan_normal(&mut self) -> Result<Token<'a>> {
        self.bump_while(char::is_whitespace);

        let position = self.current_position();
        let begin = self.offset();

        let kind = match self.bump() {
            None => TokenKind::Eof,
            Some(c) if c.is_alphabetic() || c == '_' => {
                self.bump_while(|c| c.is_alphanumeric() || c == '_');

                let end = self.offset();
                Keyword::from_str(&self.src[begin..end])
                    .map(TokenKind::Keyword)
                    .unwrap_or(TokenKind::Ident)
            }
            Some(c) if c.is_ascii_digit() => {
                self.bump_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }
            Some(',') => TokenKind::Comma,
            Some('.') => TokenKind::Period,
            Some(';') => TokenKind::Semicolon,
            Some('(') => TokenKind::LeftParen,
            Some(')') => TokenKind::RightParen,
            Some('=') => TokenKind::Equal,
            Some('`') => self.enter_raw(TokenKind::Backtick, "`", TokenKind::Backtick, position),
            Some('\'') => {
                self.enter_raw(TokenKind::SingleQuote, "'", TokenKind::SingleQuote, position)
            }
            Some('"') => {
                self.enter_raw(TokenKind::DoubleQuote, "\"", TokenKind::DoubleQuote, position)
            }
            Some('/') if self.peek_char() == Some('*') => {
                self.bump();
                self.enter_raw(TokenKind::CommentOpen, "*/", TokenKind::CommentClose, position)
            }
            Some(c) => return UnexpectedCharSnafu { position, c }.fail(),
        };

        let end = self.offset();
        Ok(Token::new(kind, &self.src[begin..end], position))
    }

    fn scan_raw(
        &mut self,
        terminator: &'static str,
        close: TokenKind,
        opened_at: Position,
    ) -> Result<Token<'a>> {
        let position = self.current_position();
        let begin = self.offset();

        loop {
            let offset = self.offset();

            if self.src[offset..].starts_with(terminator) {
                let close_position = self.current_position();
                for _ in terminator.chars() {
                    self.bump();
                }

                self.mode = Mode::Normal;
                self.pending = Some(Token::new(
                    close,
                    &self.src[offset..self.offset()],
                    close_position,
                ));

                return Ok(Token::new(TokenKind::Raw, &self.src[begin..offset], position));
            }

            if self.bump().is_none() {
                self.mode = Mode::Normal;
                return UnterminatedLiteralSnafu {
                    position: opened_at,
                    terminator,
                }
                .fail();
            }
        }
    }
}
