// Reduction history for step-by-step inspection

use crate::parser::lexer::Symbol;
use std::fmt;

/// What a single reduction folded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReductionKind {
    /// A parenthesized group collapsed to its value
    Group,
    /// A binary operator applied to its two neighbours
    Binary(Symbol),
}

/// One step of the reduction loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    /// Parenthesis nesting depth the step ran at (0 = top level)
    pub depth: usize,
    pub kind: ReductionKind,
    /// Left operand; for a group, its folded value
    pub lhs: f64,
    /// Right operand; `None` for a group
    pub rhs: Option<f64>,
    pub result: f64,
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "  ".repeat(self.depth);
        match (self.kind, self.rhs) {
            (ReductionKind::Binary(symbol), Some(rhs)) => write!(
                f,
                "{}{} {} {} = {}",
                indent,
                self.lhs,
                symbol.as_char(),
                rhs,
                self.result
            ),
            _ => write!(f, "{}( ... ) = {}", indent, self.result),
        }
    }
}

/// Bounded log of reductions.
///
/// Once full, further steps are dropped and the log is marked truncated.
/// Recording never fails, so tracing cannot change an evaluation's outcome.
#[derive(Debug, Clone)]
pub struct ReductionLog {
    steps: Vec<Reduction>,
    max_steps: usize,
    truncated: bool,
}

impl ReductionLog {
    pub fn new(max_steps: usize) -> Self {
        ReductionLog {
            steps: Vec::new(),
            max_steps,
            truncated: false,
        }
    }

    /// Record a step, or mark the log truncated if it is full
    pub fn push(&mut self, step: Reduction) {
        if self.steps.len() >= self.max_steps {
            self.truncated = true;
            return;
        }

        self.steps.push(step);
    }

    pub fn clear(&mut self) {
        self.steps.clear();
        self.truncated = false;
    }

    pub fn steps(&self) -> &[Reduction] {
        &self.steps
    }

    /// Whether steps were dropped because the log was full
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}
