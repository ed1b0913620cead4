use std::collections::HashSet;
use std::iter;

use crate::error::{Error, Result};
use crate::traversal::{Traversal, Values};
use crate::Value;

pub fn single<'a>(value: Value) -> Values<'a> {
    Box::new(iter::once(Ok(value)))
}

pub fn fail<'a>(error: Error) -> Values<'a> {
    Box::new(iter::once(Err(error)))
}

pub fn nothing<'a>() -> Values<'a> {
    Box::new(iter::empty())
}

/// Every distinct output of `traversal` for `value`; fails on the first error.
pub fn output_set(traversal: &Traversal, value: &Value) -> Result<HashSet<Value>> {
    traversal.generate(value.clone()).collect()
}
