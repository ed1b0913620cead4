use std::collections::HashSet;
use std::fmt;
use std::fmt::{Debug, Formatter};

use log::trace;

use crate::error::{Error, Result};
use crate::traversal::utils::output_set;
use crate::traversal::Traversal;
use crate::Value;

/// User-supplied predicate, the selector counterpart of [`crate::traversal::Generate`].
pub trait Match: Debug {
    fn matches(&self, value: &Value) -> Result<bool>;
}

/// Boolean predicate over a single value.
#[derive(Debug)]
pub enum Selector {
    /// Compares the output sets both traversals produce for the value under test.
    Compare(Traversal, Compare, Traversal),
    Or(Box<Selector>, Box<Selector>),
    And(Box<Selector>, Box<Selector>),
    Not(Box<Selector>),
    Custom(Box<dyn Match>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Compare {
    Equals,
    NotEquals,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Compare {
    /// Compares two output sets. Inequality needs a value on both sides.
    pub fn test(self, ours: &HashSet<Value>, theirs: &HashSet<Value>) -> Result<bool> {
        match self {
            Compare::Equals => Ok(!ours.is_disjoint(theirs)),
            Compare::NotEquals => {
                // more than one candidate on either side always counts as different
                if ours.len() > 1 || theirs.len() > 1 {
                    return Ok(true);
                }
                match (ours.iter().next(), theirs.iter().next()) {
                    (Some(lhs), Some(rhs)) => Ok(lhs != rhs),
                    (None, _) => Err(Error::NothingToCompare {
                        operation: "not_equals",
                        side: "left",
                    }),
                    (_, None) => Err(Error::NothingToCompare {
                        operation: "not_equals",
                        side: "right",
                    }),
                }
            }
        }
    }
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
            Operation::Modulo => "mod",
        }
    }

    /// Integer arithmetic. Division and modulo round toward negative infinity.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64> {
        let fault = |reason| Error::Arithmetic {
            op: self,
            lhs,
            rhs,
            reason,
        };
        match self {
            Operation::Add => lhs.checked_add(rhs).ok_or_else(|| fault("overflow")),
            Operation::Subtract => lhs.checked_sub(rhs).ok_or_else(|| fault("overflow")),
            Operation::Multiply => lhs.checked_mul(rhs).ok_or_else(|| fault("overflow")),
            Operation::Divide => {
                if rhs == 0 {
                    return Err(fault("division by zero"));
                }
                let quotient = lhs.checked_div(rhs).ok_or_else(|| fault("overflow"))?;
                if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
                    Ok(quotient - 1)
                } else {
                    Ok(quotient)
                }
            }
            Operation::Modulo => {
                if rhs == 0 {
                    return Err(fault("division by zero"));
                }
                let remainder = lhs.wrapping_rem(rhs);
                if remainder != 0 && (remainder < 0) != (rhs < 0) {
                    Ok(remainder + rhs)
                } else {
                    Ok(remainder)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
        };
        f.write_str(symbol)
    }
}

impl Selector {
    pub fn matches(&self, value: &Value) -> Result<bool> {
        match self {
            Selector::Compare(lhs, compare, rhs) => {
                let ours = output_set(lhs, value)?;
                let theirs = output_set(rhs, value)?;
                let selected = compare.test(&ours, &theirs)?;
                trace!("{:?} {:?} {:?} => {}", ours, compare, theirs, selected);
                Ok(selected)
            }
            Selector::Or(lhs, rhs) => Ok(lhs.matches(value)? || rhs.matches(value)?),
            Selector::And(lhs, rhs) => Ok(lhs.matches(value)? && rhs.matches(value)?),
            Selector::Not(inner) => Ok(!inner.matches(value)?),
            Selector::Custom(custom) => custom.matches(value),
        }
    }

    pub fn or(self, other: Selector) -> Selector {
        Selector::Or(Box::new(self), Box::new(other))
    }

    pub fn and(self, other: Selector) -> Selector {
        Selector::And(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Selector {
        Selector::Not(Box::new(self))
    }

    pub fn custom<M: Match + 'static>(matcher: M) -> Selector {
        Selector::Custom(Box::new(matcher))
    }
}

/// Matches when at least one output of `lhs` equals one output of `rhs`.
pub fn equals(lhs: impl Into<Traversal>, rhs: impl Into<Traversal>) -> Selector {
    Selector::Compare(lhs.into(), Compare::Equals, rhs.into())
}

/// Matches when either side is ambiguous or the single outputs differ.
pub fn not_equals(lhs: impl Into<Traversal>, rhs: impl Into<Traversal>) -> Selector {
    Selector::Compare(lhs.into(), Compare::NotEquals, rhs.into())
}

pub fn or(lhs: Selector, rhs: Selector) -> Selector {
    lhs.or(rhs)
}

pub fn and(lhs: Selector, rhs: Selector) -> Selector {
    lhs.and(rhs)
}

pub fn not(selector: Selector) -> Selector {
    selector.negate()
}
