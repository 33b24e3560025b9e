use {
    super::{common::match_keyword, error::Result, Parser},
    crate::lexer::{Keyword, TokenKind},
    ast::{
        AlterSpecification, AlterTableStmt, CreateDefinition, CreateTableStmt, DatabaseName,
        IndexName, Statement, TableOption,
    },
};

impl<'a> Parser<'a> {
    pub(super) fn parse_drop(&mut self) -> Result<Statement> {
        match_keyword!(self, {
            TABLE => Ok(Statement::DropTable {
                table_names: self.parse_comma_separated(Self::parse_table_name)?,
            }),
            DATABASE => Ok(Statement::DropDatabase {
                name: DatabaseName::new(self.parse_name()?),
            }),
        })
    }

    pub(super) fn parse_create(&mut self) -> Result<Statement> {
        match_keyword!(self, {
            DATABASE => Ok(Statement::CreateDatabase {
                name: DatabaseName::new(self.parse_name()?),
            }),
            TABLE => self.parse_create_table(),
        })
    }

    pub(super) fn parse_alter(&mut self) -> Result<Statement> {
        self.must_match_keyword(Keyword::TABLE)?;

        let name = self.parse_table_name()?;
        let specs = match self.peek()?.kind {
            TokenKind::Keyword(Keyword::ADD | Keyword::DROP) => {
                self.parse_comma_separated(Self::parse_alter_specification)?
            }
            _ => vec![],
        };

        Ok(Statement::AlterTable(AlterTableStmt { name, specs }))
    }

    pub(super) fn parse_comment(&mut self) -> Result<Statement> {
        let content = self.parse_delimited(TokenKind::CommentClose)?;

        Ok(Statement::Comment {
            content: content.to_string(),
        })
    }

    fn parse_create_table(&mut self) -> Result<Statement> {
        let name = self.parse_table_name()?;
        let definitions =
            self.parse_comma_separated_within_parentheses(Self::parse_create_definition)?;

        let mut options = vec![];
        while let TokenKind::Ident | TokenKind::Keyword(_) = self.peek()?.kind {
            options.push(self.parse_table_option()?);
        }

        Ok(Statement::CreateTable(CreateTableStmt {
            name,
            definitions,
            options,
        }))
    }

    fn parse_create_definition(&mut self) -> Result<CreateDefinition> {
        match self.peek()?.kind {
            TokenKind::Keyword(Keyword::PRIMARY) => {
                self.next_token()?;
                self.must_match_keyword(Keyword::KEY)?;

                Ok(CreateDefinition::PrimaryIndex {
                    columns: self.parse_index_columns()?,
                })
            }
            TokenKind::Keyword(Keyword::UNIQUE) => {
                self.next_token()?;
                if !self.try_match_keyword(Keyword::INDEX)? {
                    self.try_match_keyword(Keyword::KEY)?;
                }

                Ok(CreateDefinition::UniqueIndex {
                    name: self.parse_index_name()?,
                    columns: self.parse_index_columns()?,
                })
            }
            TokenKind::Keyword(Keyword::INDEX | Keyword::KEY) => {
                self.next_token()?;

                Ok(CreateDefinition::Index {
                    name: self.parse_index_name()?,
                    columns: self.parse_index_columns()?,
                })
            }
            _ => Ok(CreateDefinition::Column {
                name: self.parse_column_name()?,
                definition: self.parse_column_definition()?,
            }),
        }
    }

    /// The optional name in front of an index's column list.
    fn parse_index_name(&mut self) -> Result<Option<IndexName>> {
        if self.peek()?.kind == TokenKind::LeftParen {
            return Ok(None);
        }

        self.parse_name().map(|name| Some(IndexName::new(name)))
    }

    fn parse_index_columns(&mut self) -> Result<Vec<ast::ColumnName>> {
        self.parse_comma_separated_within_parentheses(Self::parse_column_name)
    }

    /// `KEY [KEY ...] = VALUE`, e.g. `ENGINE=InnoDB` or `DEFAULT CHARSET=utf8`.
    fn parse_table_option(&mut self) -> Result<TableOption> {
        let mut words = vec![];

        loop {
            let token = self.next_token()?;

            match token.kind {
                TokenKind::Ident | TokenKind::Keyword(_) => {
                    words.push(token.literal.to_ascii_uppercase())
                }
                TokenKind::Equal if !words.is_empty() => break,
                _ => return Err(self.unexpected(token, &[TokenKind::Ident, TokenKind::Equal])),
            }
        }

        let token = self.next_token()?;
        let value = match token.kind {
            TokenKind::Ident | TokenKind::Keyword(_) | TokenKind::Number => token.literal.to_string(),
            TokenKind::SingleQuote | TokenKind::DoubleQuote => {
                let content = self.parse_delimited(token.kind)?;
                format!("{}{}{}", token.literal, content, token.literal)
            }
            _ => {
                return Err(self.unexpected(
                    token,
                    &[
                        TokenKind::Ident,
                        TokenKind::Number,
                        TokenKind::SingleQuote,
                        TokenKind::DoubleQuote,
                    ],
                ))
            }
        };

        Ok(TableOption::new(words.join(" "), value))
    }

    fn parse_alter_specification(&mut self) -> Result<AlterSpecification> {
        match_keyword!(self, {
            DROP => self.parse_alter_drop(),
            ADD => {
                self.try_match_keyword(Keyword::COLUMN)?;

                Ok(AlterSpecification::AddColumn {
                    name: self.parse_column_name()?,
                    definition: self.parse_column_definition()?,
                })
            },
        })
    }

    fn parse_alter_drop(&mut self) -> Result<AlterSpecification> {
        match self.peek()?.kind {
            TokenKind::Keyword(Keyword::INDEX | Keyword::KEY) => {
                self.next_token()?;

                Ok(AlterSpecification::DropIndex {
                    name: IndexName::new(self.parse_name()?),
                })
            }
            _ => {
                self.try_match_keyword(Keyword::COLUMN)?;

                Ok(AlterSpecification::DropColumn {
                    name: self.parse_column_name()?,
                })
            }
        }
    }
}
