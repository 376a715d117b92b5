// Parenthesis scanner

use crate::interpreter::errors::EvalError;
use crate::parser::lexer::{Symbol, Token};

/// Locate the innermost leftmost parenthesized group.
///
/// Returns the indices (into `tokens`) of the group's `(` and `)`: the first
/// `)` in the sequence paired with the last `(` before it. `None` means the
/// sequence holds no parentheses at all.
///
/// The whole sequence is checked for balance, so a stray `)` or an unclosed
/// `(` anywhere fails even when an earlier group is well formed.
pub fn scan_parentheses(tokens: &[Token]) -> Result<Option<(usize, usize)>, EvalError> {
    let mut open_stack: Vec<usize> = Vec::new();
    let mut group = None;

    for (index, token) in tokens.iter().enumerate() {
        match token.symbol() {
            Some(Symbol::LParen) => open_stack.push(index),
            Some(Symbol::RParen) => {
                let open = open_stack.pop().ok_or(EvalError::MismatchedParentheses {
                    position: token.position(),
                })?;
                if group.is_none() {
                    group = Some((open, index));
                }
            }
            _ => {}
        }
    }

    if let Some(&unclosed) = open_stack.last() {
        return Err(EvalError::MismatchedParentheses {
            position: tokens[unclosed].position(),
        });
    }

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn scan(input: &str) -> Result<Option<(usize, usize)>, EvalError> {
        let tokens = Lexer::new(input).tokenize().unwrap();
        scan_parentheses(&tokens)
    }

    #[test]
    fn test_no_parentheses() {
        assert_eq!(scan("1 + 2 * 3"), Ok(None));
        assert_eq!(scan(""), Ok(None));
    }

    #[test]
    fn test_group_at_start() {
        assert_eq!(scan("( 2 + 3 ) * 4"), Ok(Some((0, 4))));
    }

    #[test]
    fn test_innermost_group_first() {
        // ( 1 + ( 2 * 3 ) )
        assert_eq!(scan("( 1 + ( 2 * 3 ) )"), Ok(Some((3, 7))));
    }

    #[test]
    fn test_leftmost_sibling_first() {
        assert_eq!(scan("( 1 + 2 ) * ( 3 + 4 )"), Ok(Some((0, 4))));
    }

    #[test]
    fn test_nested_siblings() {
        // Last open before the first close, not the first open seen
        assert_eq!(scan("( ( 1 + 2 ) * ( 3 + 4 ) )"), Ok(Some((1, 5))));
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(
            scan("( 1 + 2"),
            Err(EvalError::MismatchedParentheses { position: 0 })
        );
    }

    #[test]
    fn test_stray_close() {
        assert_eq!(
            scan("1 ) + ( 2"),
            Err(EvalError::MismatchedParentheses { position: 1 })
        );
    }

    #[test]
    fn test_imbalance_after_valid_group() {
        assert_eq!(
            scan("( 1 ) + 2 )"),
            Err(EvalError::MismatchedParentheses { position: 5 })
        );
    }
}
