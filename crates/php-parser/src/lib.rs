#![doc = include_str!("../README.md")]

mod lexer;

pub mod cst;
mod parser;

pub use crate::lexer::Lexer;
pub use crate::lexer::{Cursor, Token, TokenKind};

pub use crate::parser::{Parser, SyntaxTree};
