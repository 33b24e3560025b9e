use {
    crate::common::Position,
    ast::DataType,
    std::fmt::{Display, Formatter, Result},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The source text of the token; for `Raw` the verbatim content between delimiters.
    pub literal: &'a str,
    pub position: Position,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, literal: &'a str, position: Position) -> Self {
        Self {
            kind,
            literal,
            position,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),

    Ident,
    Number,
    /// Content of a quoted identifier, string literal or block comment.
    Raw,

    Backtick,
    SingleQuote,
    DoubleQuote,
    CommentOpen,
    CommentClose,

    Comma,
    Period,
    Semicolon,
    LeftParen,
    RightParen,
    Equal,

    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Keyword(keyword) => write!(f, "keyword {}", keyword),
            Self::Ident => f.write_str("identifier"),
            Self::Number => f.write_str("number"),
            Self::Raw => f.write_str("literal"),
            Self::Backtick => f.write_str("backtick"),
            Self::SingleQuote => f.write_str("`'`"),
            Self::DoubleQuote => f.write_str("`\"`"),
            Self::CommentOpen => f.write_str("`/*`"),
            Self::CommentClose => f.write_str("`*/`"),
            Self::Comma => f.write_str("`,`"),
            Self::Period => f.write_str("`.`"),
            Self::Semicolon => f.write_str("`;`"),
            Self::LeftParen => f.write_str("`(`"),
            Self::RightParen => f.write_str("`)`"),
            Self::Equal => f.write_str("`=`"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        pub enum Keyword {
            $($var,)*
        }

        #[derive(Debug)]
        pub struct NotKeywordError {}

        impl Display for NotKeywordError {
            fn fmt(&self, f: &mut Formatter) -> Result {
                write!(f, "not a keyword")
            }
        }

        impl std::error::Error for NotKeywordError {}

        impl std::str::FromStr for Keyword {
            type Err = NotKeywordError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Ok(Self::$var),)*
                    _ => Err(NotKeywordError {}),
                }
            }
        }

        impl Keyword {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$var => stringify!($var),)*
                }
            }
        }
    };
}

keyword! {
    ADD,
    ALTER,
    AUTO_INCREMENT,
    BIGINT,
    BINARY,
    BIT,
    BLOB,
    CHAR,
    CHARACTER,
    COLLATE,
    COLUMN,
    CREATE,
    CURRENT_TIMESTAMP,
    DATABASE,
    DATE,
    DATETIME,
    DECIMAL,
    DEFAULT,
    DOUBLE,
    DROP,
    FLOAT,
    INDEX,
    INT,
    INTEGER,
    KEY,
    LONGBLOB,
    LONGTEXT,
    MEDIUMBLOB,
    MEDIUMINT,
    MEDIUMTEXT,
    NOT,
    NULL,
    NUMERIC,
    ON,
    PRIMARY,
    REAL,
    SET,
    SMALLINT,
    TABLE,
    TEXT,
    TIME,
    TIMESTAMP,
    TINYBLOB,
    TINYINT,
    TINYTEXT,
    UNIQUE,
    UNSIGNED,
    UPDATE,
    VARBINARY,
    VARCHAR,
    YEAR,
    ZEROFILL,
}

impl Keyword {
    /// The column type this keyword names, if any.
    pub fn data_type(&self) -> Option<DataType> {
        self.as_str().parse().ok()
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr};

    #[test]
    fn keyword_lookup_ignores_case() {
        assert_eq!(Keyword::from_str("drop").ok(), Some(Keyword::DROP));
        assert_eq!(Keyword::from_str("Auto_Increment").ok(), Some(Keyword::AUTO_INCREMENT));
        assert!(Keyword::from_str("ENGINE").is_err());
    }

    #[test]
    fn every_data_type_has_a_keyword() {
        for &data_type in DataType::ALL {
            let keyword = Keyword::from_str(data_type.keyword()).ok();

            assert_eq!(keyword.and_then(|keyword| keyword.data_type()), Some(data_type));
        }
        assert_eq!(Keyword::TABLE.data_type(), None);
    }
}
