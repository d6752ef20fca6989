
//! Parsing of infix arithmetic expressions.

pub mod operator;
pub mod postfix;
pub mod tokenizer;

pub use postfix::{infix_to_postfix, infix_to_postfix_with};
