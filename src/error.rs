use thiserror::Error;

use crate::query::Operation;
use crate::traversal::value::Kind;

/// Result type used throughout pipeline evaluation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `rhs` is `None` for single operand operations such as `length`.
    #[error("type mismatch: {} is not defined for {}", .operation, operands(.lhs, .rhs))]
    TypeMismatch {
        operation: &'static str,
        lhs: Kind,
        rhs: Option<Kind>,
    },

    #[error("nothing to compare: {side} side of {operation} produced no value")]
    NothingToCompare {
        operation: &'static str,
        side: &'static str,
    },

    #[error("arithmetic fault: {lhs} {op} {rhs}: {reason}")]
    Arithmetic {
        op: Operation,
        lhs: i64,
        rhs: i64,
        reason: &'static str,
    },
}

fn operands(lhs: &Kind, rhs: &Option<Kind>) -> String {
    match rhs {
        Some(rhs) => format!("{} and {}", lhs, rhs),
        None => lhs.to_string(),
    }
}
