use log::*;

use crate::error::Result;
use crate::traversal::utils::{fail, nothing, single};
use crate::traversal::{Traversal, Values};

use super::value::Value;

/** entry point */
impl Traversal {
    /// Lazily produces every output for `input`.
    ///
    /// Operands are pulled only when the consumer asks for the next value, so
    /// stopping early never evaluates the rest of a pipeline.
    pub fn generate<'a>(&'a self, input: Value) -> Values<'a> {
        match self {
            Traversal::Constant(value) => single(value.clone()),
            Traversal::Identity => single(input),
            Traversal::Seed => single(Value::Unit),
            Traversal::Elements => match input {
                Value::Sequence(items) => {
                    Box::new((0..items.len()).map(move |i| Ok(items[i].clone())))
                }
                other => {
                    trace!("elements of non-iterable {}", other.kind());
                    nothing()
                }
            },
            Traversal::TypeOf => single(Value::TypeTag(input.kind())),
            Traversal::Length => Box::new(std::iter::once_with(move || input.length())),
            Traversal::Collect(parts) => {
                Box::new(std::iter::once_with(move || collect_outputs(parts, &input)))
            }
            Traversal::Compose(base, stages) => {
                Box::new(base.generate(input).flat_map(move |item| -> Values<'a> {
                    match item {
                        Ok(value) => Box::new(
                            stages
                                .iter()
                                .flat_map(move |stage| stage.generate(value.clone())),
                        ),
                        Err(err) => fail(err),
                    }
                }))
            }
            Traversal::Filter(base, selector) => {
                Box::new(base.generate(input).filter_map(move |item| match item {
                    Ok(value) => match selector.matches(&value) {
                        Ok(true) => Some(Ok(value)),
                        Ok(false) => None,
                        Err(err) => Some(Err(err)),
                    },
                    Err(err) => Some(Err(err)),
                }))
            }
            Traversal::Calculate(lhs, op, rhs) => {
                let op = *op;
                Box::new(lhs.generate(input.clone()).flat_map(move |item| -> Values<'a> {
                    match item {
                        Ok(a) => Box::new(
                            rhs.generate(input.clone())
                                .map(move |b| b.and_then(|b| a.calculate(op, &b))),
                        ),
                        Err(err) => fail(err),
                    }
                }))
            }
            Traversal::Custom(generator) => generator.generate(input),
        }
    }
}

fn collect_outputs(parts: &[Traversal], input: &Value) -> Result<Value> {
    let mut items = Vec::new();
    for part in parts {
        for value in part.generate(input.clone()) {
            items.push(value?);
        }
    }
    trace!("collected {} values", items.len());
    Ok(Value::from(items))
}
