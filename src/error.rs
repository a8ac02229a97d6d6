use crate::tokenizer::Operator;
use std::fmt;

/// Reasons an RPN expression is rejected.
///
/// [`crate::parse`] folds all of these into `None`, use [`crate::try_parse`]
/// to find out which one happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnError {
    /// A character that is neither blank, a number nor an operator.
    UnexpectedChar { at: usize, found: char },
    /// An operator found fewer than two values on the stack.
    MissingOperands { at: usize, op: Operator },
    /// A number literal that does not fit the integer type.
    OperandOutOfRange { at: usize, lexeme: String },
    DivisionByZero { at: usize },
    /// The result of an operator does not fit the integer type.
    Overflow { at: usize, op: Operator },
    /// No value was produced, eg: blank input.
    Empty,
    /// Evaluation finished with more than one value on the stack.
    LeftoverOperands(usize),
}

impl fmt::Display for RpnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpnError::UnexpectedChar { at, found } => {
                write!(f, "Unexpected character {:?} at position {}", found, at)
            }
            RpnError::MissingOperands { at, op } => {
                write!(f, "Not enough operands for operator {} at position {}", op, at)
            }
            RpnError::OperandOutOfRange { at, lexeme } => {
                write!(f, "Number {} at position {} is out of range", lexeme, at)
            }
            RpnError::DivisionByZero { at } => write!(f, "Division by zero at position {}", at),
            RpnError::Overflow { at, op } => {
                write!(f, "Operator {} at position {} overflows", op, at)
            }
            RpnError::Empty => write!(f, "There were no numbers in the input"),
            RpnError::LeftoverOperands(n) => {
                write!(f, "Too many operands, {} left on the stack (should be one)", n)
            }
        }
    }
}

impl std::error::Error for RpnError {}
