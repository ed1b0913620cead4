use log::*;

use crate::error::Result;
use crate::traversal::Traversal;
use crate::Value;

#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Maximum amount of outputs pulled from a pipeline.
    pub limit: Option<usize>,
}

/// Pulls a traversal to completion from a seed input.
#[derive(Debug, Default)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Driver { config }
    }

    /// All outputs in order, or the error that aborted evaluation.
    pub fn run(&self, traversal: &Traversal, seed: Value) -> Result<Vec<Value>> {
        let mut output = Vec::new();
        self.for_each(traversal, seed, |value| output.push(value))?;
        Ok(output)
    }

    /// Hands every output to `action` as soon as it is produced. Values
    /// produced before a failure have already been handed over when the
    /// error is returned.
    pub fn for_each<F>(&self, traversal: &Traversal, seed: Value, mut action: F) -> Result<usize>
    where
        F: FnMut(Value),
    {
        let limit = self.config.limit.unwrap_or(usize::MAX);
        let mut count = 0;
        for item in traversal.generate(seed).take(limit) {
            match item {
                Ok(value) => {
                    trace!("output #{}: {}", count, value);
                    action(value);
                    count += 1;
                }
                Err(err) => {
                    debug!("evaluation aborted after {} outputs: {}", count, err);
                    return Err(err);
                }
            }
        }
        debug!("evaluation produced {} outputs", count);
        Ok(count)
    }
}

/// Evaluates from the conventional `Unit` seed with no limit.
pub fn run(traversal: &Traversal) -> Result<Vec<Value>> {
    Driver::default().run(traversal, Value::Unit)
}

/// Space separated rendering of a finished output sequence.
pub fn dump(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
