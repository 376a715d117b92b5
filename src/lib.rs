//! # Introduction
//!
//! evalr evaluates arithmetic expressions written as space-separated tokens,
//! such as `( 2 + 3 ) * 4`. It supports the four binary operators `+ - * /`
//! and parenthesized grouping, with IEEE-754 `f64` arithmetic throughout.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Reduction loop → f64
//! ```
//!
//! 1. [`parser`] — splits the source on spaces and builds a single ordered
//!    sequence of number and operator tokens.
//! 2. [`interpreter`] — repeatedly collapses the innermost parenthesized group
//!    or the highest-priority operator until one number remains.
//!
//! ```
//! assert_eq!(evalr::evaluate("( 2 + 3 ) * 4"), Ok(20.0));
//! assert_eq!(evalr::evaluate("10 / 2 / 5"), Ok(1.0));
//! ```

pub mod interpreter;
pub mod parser;

pub use interpreter::engine::{evaluate, EvalOptions, Evaluator};
pub use interpreter::errors::EvalError;
pub use parser::lexer::TokenPolicy;
