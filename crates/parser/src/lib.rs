mod common;
pub mod lexer;
mod parser;

pub use self::{
    common::Position,
    lexer::{Lexer, Token, TokenKind},
    parser::{parse, Error, Parser, Result},
};
