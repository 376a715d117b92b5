//! Evaluation error types
//!
//! This module defines [`EvalError`], which covers every way an expression can
//! fail to fold into a single number: malformed tokens, unbalanced groups and
//! operators stranded without operands.
//!
//! All evaluation errors are fatal for the expression being evaluated. There is
//! no recovery and no partial result.

use crate::parser::lexer::Symbol;
use std::fmt;

/// Errors that can occur while tokenizing or reducing an expression
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A piece intended as a number literal does not parse as one
    MalformedNumber { text: String, position: usize },

    /// A piece intended as an operator is not one of `+ - * / ( )`
    MalformedOperator { text: String, position: usize },

    /// An opening or closing parenthesis has no partner
    MismatchedParentheses { position: usize },

    /// Arithmetic was attempted with a parenthesis symbol.
    /// The reduction loop never produces this; seeing it means a defect.
    UnevaluableOperator { symbol: Symbol },

    /// A binary operator lacks a number on one of its sides
    MissingOperand { symbol: Symbol, position: usize },

    /// Nothing to evaluate (empty input or an empty group)
    EmptyExpression { position: usize },

    /// Numbers left over with no operator joining them
    TrailingOperand { position: usize },
}

impl EvalError {
    /// Index of the whitespace-separated piece the error points at, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::MalformedNumber { position, .. }
            | EvalError::MalformedOperator { position, .. }
            | EvalError::MismatchedParentheses { position }
            | EvalError::MissingOperand { position, .. }
            | EvalError::EmptyExpression { position }
            | EvalError::TrailingOperand { position } => Some(*position),
            EvalError::UnevaluableOperator { .. } => None,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MalformedNumber { text, position } => {
                write!(f, "Malformed number '{}' at token {}", text, position)
            }
            EvalError::MalformedOperator { text, position } => {
                write!(f, "Malformed operator '{}' at token {}", text, position)
            }
            EvalError::MismatchedParentheses { position } => {
                write!(f, "Mismatched parentheses at token {}", position)
            }
            EvalError::UnevaluableOperator { symbol } => {
                write!(f, "Operator {} cannot be evaluated", symbol)
            }
            EvalError::MissingOperand { symbol, position } => {
                write!(
                    f,
                    "Operator {} at token {} is missing an operand",
                    symbol, position
                )
            }
            EvalError::EmptyExpression { position } => {
                write!(f, "Empty expression at token {}", position)
            }
            EvalError::TrailingOperand { position } => {
                write!(
                    f,
                    "Operand at token {} is not joined by any operator",
                    position
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}
