use {
    crate::{
        common::Position,
        lexer::{self, TokenKind},
    },
    snafu::prelude::*,
    std::num::ParseIntError,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("unexpected {} at {}, expected {}", found, position, one_of(expected)))]
    UnexpectedToken {
        position: Position,
        expected: Vec<TokenKind>,
        found: TokenKind,
    },

    #[snafu(display("unknown data type `{}` at {}", found, position))]
    UnknownTypeKeyword { position: Position, found: String },

    #[snafu(display("invalid number `{}` at {}: {}", literal, position, source))]
    InvalidNumber {
        position: Position,
        literal: String,
        source: ParseIntError,
    },

    #[snafu(context(false), display("{}", source))]
    Lexing { source: lexer::Error },
}

impl Error {
    pub fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnknownTypeKeyword { position, .. }
            | Self::InvalidNumber { position, .. } => *position,
            Self::Lexing { source } => source.position(),
        }
    }
}

fn one_of(kinds: &[TokenKind]) -> String {
    match kinds {
        [kind] => kind.to_string(),
        kinds => format!(
            "one of {}",
            kinds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
