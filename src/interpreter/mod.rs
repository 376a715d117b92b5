//! Expression reduction engine
//!
//! This module folds a token sequence into a single number:
//! - [`engine`]: the [`engine::Evaluator`] and its reduction loop
//! - [`parens`]: locating the next parenthesized group to collapse
//! - [`trace`]: optional step-by-step record of reductions
//! - [`errors`]: evaluation error types
//!
//! # Reduction Model
//!
//! Groups are collapsed innermost first, leftmost first. Once no parentheses
//! remain, the leftmost operator of the highest priority is applied to its two
//! neighbours, so `*` and `/` bind tighter than `+` and `-`, and operators of
//! equal priority reduce left to right.

pub mod engine;
pub mod errors;
pub mod parens;
pub mod trace;
