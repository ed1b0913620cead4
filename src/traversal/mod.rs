use std::fmt::Debug;

use crate::error::Result;
use crate::query::{equals, not_equals, Operation, Selector};
use crate::traversal::value::{Kind, Value};

pub mod value;
mod traverse;
pub(crate) mod utils;

/// Lazy output of one traversal for one input. Errors end the evaluation.
pub type Values<'a> = Box<dyn Iterator<Item = Result<Value>> + 'a>;

/// User-supplied leaf traversal, e.g. a source enumerating external nodes.
///
/// Implementations must be restartable: generating twice from the same input
/// yields the same sequence.
pub trait Generate: Debug {
    fn generate<'a>(&'a self, input: Value) -> Values<'a>;
}

/// Lazy, multi-valued transformation of one input value.
///
/// Every operand slot accepts `impl Into<Traversal>`; bare values are lifted
/// to [`Traversal::Constant`] once, when the pipeline is built.
#[derive(Debug)]
pub enum Traversal {
    /// Yields the wrapped value once, whatever the input.
    Constant(Value),
    /// Yields the input unchanged.
    Identity,
    /// Yields `Unit`; starts a pipeline.
    Seed,
    /// Yields the elements of a sequence input, nothing for other inputs.
    Elements,
    /// Yields the type tag of the input.
    TypeOf,
    /// Yields the element count of a sequence or character count of a text.
    Length,
    /// Concatenates the outputs of all parts into one sequence value.
    Collect(Vec<Traversal>),
    /// Feeds every output of the base through each stage, left to right.
    Compose(Box<Traversal>, Vec<Traversal>),
    Filter(Box<Traversal>, Box<Selector>),
    /// Cross product of both sides' outputs, left side major.
    Calculate(Box<Traversal>, Operation, Box<Traversal>),
    Custom(Box<dyn Generate>),
}

/// Lifts a bare value, or passes a traversal through unchanged.
pub fn as_traversal(operand: impl Into<Traversal>) -> Traversal {
    operand.into()
}

pub fn constant(value: impl Into<Value>) -> Traversal {
    Traversal::Constant(value.into())
}

pub fn identity() -> Traversal {
    Traversal::Identity
}

pub fn seed() -> Traversal {
    Traversal::Seed
}

pub fn elements() -> Traversal {
    Traversal::Elements
}

pub fn type_of() -> Traversal {
    Traversal::TypeOf
}

pub fn length() -> Traversal {
    Traversal::Length
}

pub fn collect<I, T>(parts: I) -> Traversal
where
    I: IntoIterator<Item = T>,
    T: Into<Traversal>,
{
    Traversal::Collect(parts.into_iter().map(Into::into).collect())
}

impl Traversal {
    pub fn custom<G: Generate + 'static>(generator: G) -> Traversal {
        Traversal::Custom(Box::new(generator))
    }

    /// Threads each output of `self` into `stage`.
    pub fn then(self, stage: impl Into<Traversal>) -> Traversal {
        self.then_all([stage])
    }

    /// Threads each output of `self` into every stage in turn.
    pub fn then_all<I, T>(self, stages: I) -> Traversal
    where
        I: IntoIterator<Item = T>,
        T: Into<Traversal>,
    {
        Traversal::Compose(
            Box::new(self),
            stages.into_iter().map(Into::into).collect(),
        )
    }

    pub fn filter(self, selector: Selector) -> Traversal {
        Traversal::Filter(Box::new(self), Box::new(selector))
    }

    pub fn calculate(self, op: Operation, rhs: impl Into<Traversal>) -> Traversal {
        Traversal::Calculate(Box::new(self), op, Box::new(rhs.into()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: impl Into<Traversal>) -> Traversal {
        self.calculate(Operation::Add, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, rhs: impl Into<Traversal>) -> Traversal {
        self.calculate(Operation::Subtract, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, rhs: impl Into<Traversal>) -> Traversal {
        self.calculate(Operation::Multiply, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn div(self, rhs: impl Into<Traversal>) -> Traversal {
        self.calculate(Operation::Divide, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn rem(self, rhs: impl Into<Traversal>) -> Traversal {
        self.calculate(Operation::Modulo, rhs)
    }

    pub fn equals(self, rhs: impl Into<Traversal>) -> Selector {
        equals(self, rhs)
    }

    pub fn not_equals(self, rhs: impl Into<Traversal>) -> Selector {
        not_equals(self, rhs)
    }
}

impl From<Value> for Traversal {
    fn from(value: Value) -> Self {
        Traversal::Constant(value)
    }
}

impl From<i64> for Traversal {
    fn from(value: i64) -> Self {
        Traversal::Constant(Value::from(value))
    }
}

impl From<i32> for Traversal {
    fn from(value: i32) -> Self {
        Traversal::Constant(Value::from(value))
    }
}

impl From<&str> for Traversal {
    fn from(text: &str) -> Self {
        Traversal::Constant(Value::from(text))
    }
}

impl From<String> for Traversal {
    fn from(text: String) -> Self {
        Traversal::Constant(Value::from(text))
    }
}

impl From<Vec<Value>> for Traversal {
    fn from(items: Vec<Value>) -> Self {
        Traversal::Constant(Value::from(items))
    }
}

impl From<Kind> for Traversal {
    fn from(kind: Kind) -> Self {
        Traversal::Constant(Value::TypeTag(kind))
    }
}
