//! Lexer (tokenizer) for arithmetic expressions
//!
//! Expressions arrive as a single line of pieces separated by single ASCII
//! spaces. Each piece becomes at most one [`Token`]: a number literal or one of
//! the six operator symbols. The result is one ordered `Vec<Token>` that the
//! evaluator reduces in place.
//!
//! Pieces that are neither a number nor a symbol are handled according to the
//! configured [`TokenPolicy`]. Empty pieces, produced by runs of spaces, are
//! always skipped.

use crate::interpreter::errors::EvalError;
use std::fmt;

/// Operator symbols recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    LParen, // (
    RParen, // )
}

impl Symbol {
    /// Parse a whole piece as a symbol.
    pub fn parse(text: &str, position: usize) -> Result<Self, EvalError> {
        match text {
            "+" => Ok(Symbol::Plus),
            "-" => Ok(Symbol::Minus),
            "*" => Ok(Symbol::Star),
            "/" => Ok(Symbol::Slash),
            "(" => Ok(Symbol::LParen),
            ")" => Ok(Symbol::RParen),
            _ => Err(EvalError::MalformedOperator {
                text: text.to_string(),
                position,
            }),
        }
    }

    /// Reduction priority: higher binds tighter.
    ///
    /// Parentheses rank above every arithmetic operator but are only ever used
    /// to locate groups, never reduced as binary operators.
    pub fn priority(self) -> u8 {
        match self {
            Symbol::Plus | Symbol::Minus => 0,
            Symbol::Star | Symbol::Slash => 1,
            Symbol::LParen | Symbol::RParen => 2,
        }
    }

    /// Apply the operator to two operands with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN, not an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Symbol::Plus => Ok(lhs + rhs),
            Symbol::Minus => Ok(lhs - rhs),
            Symbol::Star => Ok(lhs * rhs),
            Symbol::Slash => Ok(lhs / rhs),
            Symbol::LParen | Symbol::RParen => Err(EvalError::UnevaluableOperator { symbol: self }),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Plus => '+',
            Symbol::Minus => '-',
            Symbol::Star => '*',
            Symbol::Slash => '/',
            Symbol::LParen => '(',
            Symbol::RParen => ')',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.as_char())
    }
}

/// A lexical unit of an expression.
///
/// `position` is the index of the space-separated piece the token came from.
/// Folded results inherit the position of the leftmost token they replace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number { value: f64, position: usize },
    Operator { symbol: Symbol, position: usize },
}

impl Token {
    /// Build a number token from a decimal literal piece.
    ///
    /// Only digit-led literals (after an optional sign) are accepted, so words
    /// like `inf` or `nan` are not numbers.
    pub fn number(text: &str, position: usize) -> Result<Self, EvalError> {
        let malformed = || EvalError::MalformedNumber {
            text: text.to_string(),
            position,
        };

        let digits = text.trim_start_matches(['+', '-']);
        if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Err(malformed());
        }

        text.parse::<f64>()
            .map(|value| Token::Number { value, position })
            .map_err(|_| malformed())
    }

    /// Build an operator token from a symbol piece.
    pub fn operator(text: &str, position: usize) -> Result<Self, EvalError> {
        Symbol::parse(text, position).map(|symbol| Token::Operator { symbol, position })
    }

    pub fn position(&self) -> usize {
        match self {
            Token::Number { position, .. } | Token::Operator { position, .. } => *position,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Token::Operator { symbol, .. } => Some(*symbol),
            Token::Number { .. } => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Token::Number { value, .. } => Some(*value),
            Token::Operator { .. } => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { value, .. } => write!(f, "{}", value),
            Token::Operator { symbol, .. } => write!(f, "{}", symbol.as_char()),
        }
    }
}

/// How the lexer treats pieces that are neither numbers nor symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Drop unrecognized pieces, as if they were absent from the input.
    #[default]
    Tolerant,
    /// Reject unrecognized pieces with a malformed-token error.
    Strict,
}

/// Lexer for space-separated expressions
pub struct Lexer<'a> {
    pieces: Vec<&'a str>,
    policy: TokenPolicy,
}

impl<'a> Lexer<'a> {
    /// Create a lexer that splits `input` on single spaces.
    pub fn new(input: &'a str) -> Self {
        Self::from_pieces(input.split(' ').collect())
    }

    /// Create a lexer over pieces that are already split.
    pub fn from_pieces(pieces: Vec<&'a str>) -> Self {
        Self {
            pieces,
            policy: TokenPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: TokenPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Tokenize every piece, preserving left-to-right order.
    pub fn tokenize(&self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::with_capacity(self.pieces.len());

        for (position, piece) in self.pieces.iter().copied().enumerate() {
            if piece.is_empty() {
                continue;
            }

            if let Ok(token) = Token::operator(piece, position) {
                tokens.push(token);
                continue;
            }

            match Token::number(piece, position) {
                Ok(token) => tokens.push(token),
                Err(err) => match self.policy {
                    TokenPolicy::Tolerant => continue,
                    TokenPolicy::Strict => return Err(Self::reject(piece, position, err)),
                },
            }
        }

        Ok(tokens)
    }

    /// Decide which malformed kind an unrecognized piece reports.
    /// A lone punctuation character was most likely meant as an operator.
    fn reject(piece: &str, position: usize, number_err: EvalError) -> EvalError {
        let mut chars = piece.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_alphanumeric() => EvalError::MalformedOperator {
                text: piece.to_string(),
                position,
            },
            _ => number_err,
        }
    }
}
