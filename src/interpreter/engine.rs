// Reduction engine for arithmetic expressions

use crate::interpreter::errors::EvalError;
use crate::interpreter::parens::scan_parentheses;
use crate::interpreter::trace::{Reduction, ReductionKind, ReductionLog};
use crate::parser::lexer::{Lexer, Symbol, Token, TokenPolicy};

/// Default capacity of the reduction trace
pub const DEFAULT_TRACE_LIMIT: usize = 4096;

/// Evaluator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Handling of pieces that are neither numbers nor symbols
    pub policy: TokenPolicy,
    /// Record every reduction step
    pub trace: bool,
    /// Maximum number of recorded steps per expression
    pub trace_limit: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            policy: TokenPolicy::Tolerant,
            trace: false,
            trace_limit: DEFAULT_TRACE_LIMIT,
        }
    }
}

/// Folds an expression to a single number by repeated reduction.
///
/// Each pass either collapses the innermost leftmost parenthesized group into
/// its value, or, once no parentheses remain, applies the leftmost operator of
/// the highest priority to its two neighbours. The loop ends when no operator
/// is left.
pub struct Evaluator {
    options: EvalOptions,
    log: ReductionLog,
}

impl Evaluator {
    pub fn new(options: EvalOptions) -> Self {
        Evaluator {
            options,
            log: ReductionLog::new(options.trace_limit),
        }
    }

    /// Evaluate one expression.
    ///
    /// No state carries over between calls apart from the trace of the most
    /// recent call.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvalError> {
        self.log.clear();

        let tokens = Lexer::new(expression)
            .with_policy(self.options.policy)
            .tokenize()?;

        self.reduce(tokens, 0, 0)
    }

    /// Steps recorded by the last call to [`Evaluator::evaluate`].
    /// Empty unless tracing is enabled.
    pub fn trace(&self) -> &[Reduction] {
        self.log.steps()
    }

    /// Whether the last trace dropped steps after reaching `trace_limit`
    pub fn trace_truncated(&self) -> bool {
        self.log.is_truncated()
    }

    /// Reduce a token sequence to its value.
    ///
    /// `start` is the piece position reported when the sequence turns out to be
    /// empty.
    fn reduce(&mut self, mut tokens: Vec<Token>, depth: usize, start: usize) -> Result<f64, EvalError> {
        loop {
            if let Some((open, close)) = scan_parentheses(&tokens)? {
                let position = tokens[open].position();
                // The group is innermost, so nothing before it has been closed yet
                let nesting = depth
                    + tokens[..open]
                        .iter()
                        .filter(|t| t.symbol() == Some(Symbol::LParen))
                        .count();

                let inner = tokens[open + 1..close].to_vec();
                let value = self.reduce(inner, nesting + 1, position)?;

                self.record(Reduction {
                    depth: nesting,
                    kind: ReductionKind::Group,
                    lhs: value,
                    rhs: None,
                    result: value,
                });
                tokens.splice(open..=close, [Token::Number { value, position }]);
                continue;
            }

            let Some(index) = highest_priority(&tokens) else {
                break;
            };

            let (symbol, lhs, rhs) = operands(&tokens, index)?;
            let result = symbol.apply(lhs, rhs)?;

            self.record(Reduction {
                depth,
                kind: ReductionKind::Binary(symbol),
                lhs,
                rhs: Some(rhs),
                result,
            });
            let position = tokens[index - 1].position();
            tokens.splice(
                index - 1..=index + 1,
                [Token::Number {
                    value: result,
                    position,
                }],
            );
        }

        match tokens.as_slice() {
            [] => Err(EvalError::EmptyExpression { position: start }),
            [Token::Number { value, .. }] => Ok(*value),
            [_, extra, ..] => Err(EvalError::TrailingOperand {
                position: extra.position(),
            }),
            [Token::Operator { symbol, position }] => Err(EvalError::MissingOperand {
                symbol: *symbol,
                position: *position,
            }),
        }
    }

    fn record(&mut self, step: Reduction) {
        if self.options.trace {
            self.log.push(step);
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalOptions::default())
    }
}

/// Evaluate an expression with the default (tolerant, untraced) options.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Evaluator::default().evaluate(expression)
}

/// Index of the leftmost operator with the highest priority
fn highest_priority(tokens: &[Token]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;

    for (index, token) in tokens.iter().enumerate() {
        if let Some(symbol) = token.symbol() {
            let priority = symbol.priority();
            if best.map_or(true, |(_, top)| priority > top) {
                best = Some((index, priority));
            }
        }
    }

    best.map(|(index, _)| index)
}

/// The operator at `index` and the numbers on either side of it
fn operands(tokens: &[Token], index: usize) -> Result<(Symbol, f64, f64), EvalError> {
    let (symbol, position) = match tokens[index] {
        Token::Operator { symbol, position } => (symbol, position),
        Token::Number { position, .. } => {
            return Err(EvalError::TrailingOperand { position });
        }
    };
    let missing = EvalError::MissingOperand { symbol, position };

    let lhs = index
        .checked_sub(1)
        .and_then(|i| tokens.get(i))
        .and_then(Token::value)
        .ok_or_else(|| missing.clone())?;
    let rhs = tokens
        .get(index + 1)
        .and_then(Token::value)
        .ok_or(missing)?;

    Ok((symbol, lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traced() -> Evaluator {
        Evaluator::new(EvalOptions {
            trace: true,
            ..EvalOptions::default()
        })
    }

    #[test]
    fn test_highest_priority_prefers_leftmost() {
        let tokens = Lexer::new("1 + 2 * 3 / 4").tokenize().unwrap();
        assert_eq!(highest_priority(&tokens), Some(3));

        let tokens = Lexer::new("8 - 3 - 2").tokenize().unwrap();
        assert_eq!(highest_priority(&tokens), Some(1));

        let tokens = Lexer::new("42").tokenize().unwrap();
        assert_eq!(highest_priority(&tokens), None);
    }

    #[test]
    fn test_operands_need_numeric_neighbours() {
        let tokens = Lexer::new("* 3").tokenize().unwrap();
        assert_eq!(
            operands(&tokens, 0),
            Err(EvalError::MissingOperand {
                symbol: Symbol::Star,
                position: 0
            })
        );

        let tokens = Lexer::new("3 -").tokenize().unwrap();
        assert!(operands(&tokens, 1).is_err());
    }

    #[test]
    fn test_trace_records_binary_steps() {
        let mut evaluator = traced();
        assert_eq!(evaluator.evaluate("2 * 3 + 4"), Ok(10.0));

        let steps = evaluator.trace();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].kind, ReductionKind::Binary(Symbol::Star));
        assert_eq!(steps[0].result, 6.0);
        assert_eq!(steps[1].kind, ReductionKind::Binary(Symbol::Plus));
        assert_eq!(steps[1].lhs, 6.0);
        assert_eq!(steps[1].rhs, Some(4.0));
    }

    #[test]
    fn test_trace_records_group_depth() {
        let mut evaluator = traced();
        assert_eq!(evaluator.evaluate("( 1 + ( 2 * 3 ) )"), Ok(7.0));

        let kinds: Vec<(usize, ReductionKind)> =
            evaluator.trace().iter().map(|s| (s.depth, s.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (2, ReductionKind::Binary(Symbol::Star)),
                (1, ReductionKind::Group),
                (1, ReductionKind::Binary(Symbol::Plus)),
                (0, ReductionKind::Group),
            ]
        );
    }

    #[test]
    fn test_trace_resets_between_calls() {
        let mut evaluator = traced();
        evaluator.evaluate("1 + 2 + 3").unwrap();
        assert_eq!(evaluator.trace().len(), 2);

        evaluator.evaluate("5").unwrap();
        assert!(evaluator.trace().is_empty());
    }

    #[test]
    fn test_full_trace_does_not_stop_evaluation() {
        let mut evaluator = Evaluator::new(EvalOptions {
            trace: true,
            trace_limit: 1,
            ..EvalOptions::default()
        });

        assert_eq!(evaluator.evaluate("1 + 2 + 3"), Ok(6.0));
        assert_eq!(evaluator.trace().len(), 1);
        assert_eq!(evaluator.trace()[0].result, 3.0);
        assert!(evaluator.trace_truncated());

        assert_eq!(evaluator.evaluate("1 + 2"), Ok(3.0));
        assert!(!evaluator.trace_truncated());
    }

    #[test]
    fn test_long_expression_same_with_and_without_trace() {
        let expression = vec!["1"; 5000].join(" + ");

        assert_eq!(evaluate(&expression), Ok(5000.0));
        assert_eq!(traced().evaluate(&expression), Ok(5000.0));
    }

    #[test]
    fn test_untraced_records_nothing() {
        let mut evaluator = Evaluator::default();
        evaluator.evaluate("1 + 2").unwrap();

        assert!(evaluator.trace().is_empty());
    }

    #[test]
    fn test_folded_group_keeps_open_position() {
        // Both groups fold in place; the unjoined `3` is still piece 5
        assert_eq!(
            evaluate("1 + ( 2 ) 3 ( 4 )"),
            Err(EvalError::TrailingOperand { position: 5 })
        );
    }
}
