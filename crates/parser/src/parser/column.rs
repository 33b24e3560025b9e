use {
    super::{
        error::{Result, UnknownTypeKeywordSnafu},
        Parser,
    },
    crate::lexer::{Keyword, TokenKind},
    ast::{ColumnDefinition, DataTypeDefinition, DefaultDefinition},
    snafu::prelude::*,
};

impl<'a> Parser<'a> {
    /// A data type followed by `[NOT] NULL`, `AUTO_INCREMENT` and `DEFAULT ...`, each at
    /// most once and in any order.
    pub(super) fn parse_column_definition(&mut self) -> Result<ColumnDefinition> {
        let mut definition = ColumnDefinition::new(self.parse_data_type_definition()?);

        let mut nullability_seen = false;
        let mut default_seen = false;

        loop {
            match self.peek()?.kind {
                TokenKind::Keyword(Keyword::NOT) if !nullability_seen => {
                    self.next_token()?;
                    self.must_match_keyword(Keyword::NULL)?;
                    definition.nullable = false;
                    nullability_seen = true;
                }
                TokenKind::Keyword(Keyword::NULL) if !nullability_seen => {
                    self.next_token()?;
                    nullability_seen = true;
                }
                TokenKind::Keyword(Keyword::AUTO_INCREMENT) if !definition.auto_increment => {
                    self.next_token()?;
                    definition.auto_increment = true;
                }
                TokenKind::Keyword(Keyword::DEFAULT) if !default_seen => {
                    self.next_token()?;
                    definition.default = self.parse_default_definition()?;
                    default_seen = true;
                }
                _ => break,
            }
        }

        Ok(definition)
    }

    pub(super) fn parse_data_type_definition(&mut self) -> Result<DataTypeDefinition> {
        let token = self.next_token()?;
        let data_type = match token.kind {
            TokenKind::Keyword(keyword) => keyword.data_type(),
            _ => None,
        }
        .context(UnknownTypeKeywordSnafu {
            position: token.position,
            found: match token.kind {
                TokenKind::Eof => token.kind.to_string(),
                _ => token.literal.to_string(),
            },
        })?;

        let mut definition = DataTypeDefinition::bare(data_type);

        match &mut definition {
            DataTypeDefinition::Simple { .. } => {}
            DataTypeDefinition::Number {
                length,
                unsigned,
                zerofill,
                ..
            } => {
                if let Some((l, _)) = self.parse_length(false)? {
                    *length = l;
                }
                *unsigned = self.try_match_keyword(Keyword::UNSIGNED)?;
                *zerofill = self.try_match_keyword(Keyword::ZEROFILL)?;
            }
            DataTypeDefinition::Fraction {
                length,
                decimals,
                unsigned,
                zerofill,
                ..
            } => {
                if let Some((l, d)) = self.parse_length(true)? {
                    *length = l;
                    *decimals = d.unwrap_or(0);
                }
                *unsigned = self.try_match_keyword(Keyword::UNSIGNED)?;
                *zerofill = self.try_match_keyword(Keyword::ZEROFILL)?;
            }
            DataTypeDefinition::String {
                length,
                charset,
                collation,
                ..
            } => {
                if let Some((l, _)) = self.parse_length(false)? {
                    *length = l;
                }
                *charset = self.parse_charset()?;
                *collation = self.parse_collation()?;
            }
            DataTypeDefinition::TextBlob {
                binary,
                charset,
                collation,
                ..
            } => {
                *binary = self.try_match_keyword(Keyword::BINARY)?;
                *charset = self.parse_charset()?;
                *collation = self.parse_collation()?;
            }
        }

        Ok(definition)
    }

    /// `(length)`, or `(length, decimals)` when decimals are allowed.
    fn parse_length(&mut self, with_decimals: bool) -> Result<Option<(u32, Option<u32>)>> {
        if self.try_match(TokenKind::LeftParen)?.is_none() {
            return Ok(None);
        }

        let length = self.parse_number()?;
        let decimals = match with_decimals && self.try_match(TokenKind::Comma)?.is_some() {
            true => Some(self.parse_number()?),
            false => None,
        };
        self.must_match(TokenKind::RightParen)?;

        Ok(Some((length, decimals)))
    }

    fn parse_charset(&mut self) -> Result<Option<String>> {
        if !self.try_match_keyword(Keyword::CHARACTER)? {
            return Ok(None);
        }
        self.must_match_keyword(Keyword::SET)?;

        self.parse_word().map(Some)
    }

    fn parse_collation(&mut self) -> Result<Option<String>> {
        if !self.try_match_keyword(Keyword::COLLATE)? {
            return Ok(None);
        }

        self.parse_word().map(Some)
    }

    fn parse_default_definition(&mut self) -> Result<DefaultDefinition> {
        let token = self.next_token()?;

        Ok(match token.kind {
            TokenKind::Keyword(Keyword::NULL) => DefaultDefinition::Null,
            TokenKind::Keyword(Keyword::CURRENT_TIMESTAMP) => {
                let on_update = self.try_match_keyword(Keyword::ON)?;
                if on_update {
                    self.must_match_keyword(Keyword::UPDATE)?;
                    self.must_match_keyword(Keyword::CURRENT_TIMESTAMP)?;
                }

                DefaultDefinition::CurrentTimestamp { on_update }
            }
            TokenKind::SingleQuote | TokenKind::DoubleQuote => DefaultDefinition::StringLiteral {
                value: self.parse_delimited(token.kind)?.to_string(),
            },
            TokenKind::Number | TokenKind::Ident => DefaultDefinition::StringLiteral {
                value: token.literal.to_string(),
            },
            _ => {
                return Err(self.unexpected(
                    token,
                    &[
                        TokenKind::Keyword(Keyword::NULL),
                        TokenKind::Keyword(Keyword::CURRENT_TIMESTAMP),
                        TokenKind::SingleQuote,
                        TokenKind::DoubleQuote,
                        TokenKind::Number,
                        TokenKind::Ident,
                    ],
                ))
            }
        })
    }
}
