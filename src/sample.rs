//! Sample leaf source and the demonstration pipelines built over it.

use crate::query::not;
use crate::traversal::{collect, constant, elements, identity, length, seed, type_of};
use crate::traversal::{Generate, Traversal, Values};
use crate::Value;

/// Leaf traversal yielding a fixed list of values regardless of its input.
#[derive(Debug, Clone)]
pub struct Literal {
    values: Vec<Value>,
}

impl Literal {
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Literal {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Generate for Literal {
    fn generate<'a>(&'a self, _input: Value) -> Values<'a> {
        Box::new(self.values.iter().cloned().map(Ok))
    }
}

/// Stand-in for a source of tree nodes: `1 2 3 "hello" "world"`.
pub fn winfo() -> Traversal {
    Traversal::custom(Literal::new([
        Value::Integer(1),
        Value::Integer(2),
        Value::Integer(3),
        Value::text("hello"),
        Value::text("world"),
    ]))
}

/// The type tag of text values, derived from a text literal.
pub fn text_type() -> Traversal {
    constant("a string").then(type_of())
}

pub fn integer_type() -> Traversal {
    constant(0).then(type_of())
}

pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> Traversal,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "winfo",
            description: "every value of the sample source",
            build: || seed().then(winfo()),
        },
        Scenario {
            name: "not-hello",
            description: "sample values different from \"hello\"",
            build: || seed().then(winfo()).filter(identity().not_equals("hello")),
        },
        Scenario {
            name: "strings",
            description: "sample values whose type is text",
            build: || seed().then(winfo()).filter(type_of().equals(text_type())),
        },
        Scenario {
            name: "even-sums",
            description: "even sums of every pair of sample integers",
            build: || {
                let integers = || winfo().filter(type_of().equals(integer_type()));
                seed()
                    .then(integers().add(integers()))
                    .filter(identity().rem(2).equals(0))
            },
        },
        Scenario {
            name: "uniform",
            description: "sequences whose elements are all the same value",
            build: || {
                let sequences = Literal::new([
                    Value::from(vec![Value::Integer(1), Value::Integer(1)]),
                    Value::from(vec![Value::Integer(1), Value::Integer(2)]),
                    Value::from(vec![Value::Integer(3)]),
                ]);
                seed()
                    .then(Traversal::custom(sequences))
                    .filter(not(elements().not_equals(elements())))
            },
        },
        Scenario {
            name: "collected",
            description: "the whole sample source as one sequence",
            build: || seed().then(collect([winfo()])),
        },
        Scenario {
            name: "round-trip",
            description: "collect the sample source, then expand it again",
            build: || seed().then(collect([winfo()])).then(elements()),
        },
        Scenario {
            name: "range",
            description: "a sequence of ten literals, expanded",
            build: || seed().then(collect(0..10)).then(elements()),
        },
        Scenario {
            name: "lengths",
            description: "character counts of the text values",
            build: || {
                seed()
                    .then(winfo())
                    .filter(type_of().equals(text_type()))
                    .then(length())
            },
        },
        Scenario {
            name: "increment",
            description: "adds one to every sample value, aborting on the first text",
            build: || seed().then(winfo()).then(identity().add(1)),
        },
    ]
}

pub fn scenario(name: &str) -> Option<Scenario> {
    scenarios().into_iter().find(|scenario| scenario.name == name)
}
