use {crate::common::Position, snafu::prelude::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, Clone, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display(
        "unterminated literal starting at {}, no closing `{}` found",
        position,
        terminator
    ))]
    UnterminatedLiteral {
        position: Position,
        terminator: &'static str,
    },

    #[snafu(display("unexpected character `{}` at {}", c, position))]
    UnexpectedChar { position: Position, c: char },
}

impl Error {
    pub fn position(&self) -> Position {
        match self {
            Self::UnterminatedLiteral { position, .. } | Self::UnexpectedChar { position, .. } => {
                *position
            }
        }
    }
}
