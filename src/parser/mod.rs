//! Expression tokenizer
//!
//! - [`lexer`]: splits an expression on single spaces and turns each piece into
//!   a number or operator [`lexer::Token`]
//!
//! There is no syntax tree. The evaluator works directly on the flat token
//! sequence, so grouping and precedence are resolved during reduction.

pub mod lexer;
