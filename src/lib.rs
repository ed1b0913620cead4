pub use crate::error::{Error, Result};
pub use crate::query::Selector;
pub use crate::traversal::value::{Kind, Value};
pub use crate::traversal::Traversal;

pub mod driver;
pub mod error;
pub mod query;
pub mod sample;
pub mod traversal;

#[cfg(test)]
mod tests;
