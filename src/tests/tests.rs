#[cfg(test)]
mod tests {
    use crate::tests::test_util::{process, process_err};
    use crate::traversal::{constant, elements, identity, length, seed, type_of};
    use crate::{Error, Kind, Value};

    fn generate(traversal: &crate::Traversal, input: Value) -> Vec<Value> {
        traversal
            .generate(input)
            .collect::<crate::Result<_>>()
            .expect("evaluation")
    }

    fn samples() -> Vec<Value> {
        vec![
            Value::Integer(42),
            Value::text("abc"),
            Value::Unit,
            Value::from(vec![Value::Integer(1), Value::sequence(Vec::new())]),
            Value::TypeTag(Kind::Sequence),
        ]
    }

    #[test]
    fn identity_yields_its_input() {
        for value in samples() {
            assert_eq!(generate(&identity(), value.clone()), vec![value]);
        }
    }

    #[test]
    fn constant_ignores_its_input() {
        let five = constant(5);
        for value in samples() {
            assert_eq!(generate(&five, value), vec![Value::Integer(5)]);
        }
    }

    #[test]
    fn seed_yields_unit() {
        let result = process(seed());
        assert_eq!(result, vec!["null"]);
    }

    #[test]
    fn expand_elements() {
        let result = process(seed().then(vec![Value::Integer(0), Value::text("a")]).then(elements()));
        assert_eq!(result, vec!["0", r#""a""#]);
    }

    #[test]
    fn elements_of_non_sequence_is_empty() {
        assert!(generate(&elements(), Value::Integer(42)).is_empty());
        assert!(generate(&elements(), Value::text("hello")).is_empty());
        assert!(generate(&elements(), Value::Unit).is_empty());
    }

    #[test]
    fn elements_keep_nesting() {
        let nested = Value::from(vec![Value::from(vec![Value::Integer(1)]), Value::Integer(2)]);
        let result = process(seed().then(nested).then(elements()));
        assert_eq!(result, vec!["[1]", "2"]);
    }

    #[test]
    fn type_of_each_variant() {
        let kinds: Vec<Value> = samples()
            .into_iter()
            .flat_map(|value| generate(&type_of(), value))
            .collect();
        assert_eq!(
            kinds,
            vec![
                Value::TypeTag(Kind::Integer),
                Value::TypeTag(Kind::Text),
                Value::TypeTag(Kind::Unit),
                Value::TypeTag(Kind::Sequence),
                Value::TypeTag(Kind::TypeTag),
            ]
        );
    }

    #[test]
    fn length_of_sequence_and_text() {
        let result = process(seed().then(vec![Value::Integer(0), Value::Unit]).then(length()));
        assert_eq!(result, vec!["2"]);

        let result = process(seed().then("hello").then(length()));
        assert_eq!(result, vec!["5"]);
    }

    #[test]
    fn length_of_integer_fails() {
        let error = process_err(seed().then(3).then(length()));
        assert_eq!(
            error,
            Error::TypeMismatch {
                operation: "length",
                lhs: Kind::Integer,
                rhs: None
            }
        );
    }

    #[test]
    fn compose_runs_every_stage_in_order() {
        let result = process(seed().then_all([constant(1), constant(2), identity()]));
        assert_eq!(result, vec!["1", "2", "null"]);
    }

    #[test]
    fn compose_threads_each_output() {
        let numbers = vec![Value::Integer(1), Value::Integer(2)];
        let result = process(seed().then(numbers).then(elements()).then_all([identity(), identity()]));
        assert_eq!(result, vec!["1", "1", "2", "2"]);
    }

    #[test]
    fn compose_is_associative() {
        let source = || {
            constant(Value::from(vec![
                Value::from(vec![Value::Integer(1), Value::Integer(2)]),
                Value::from(vec![Value::Integer(3)]),
            ]))
        };

        let left = seed().then(source()).then(elements()).then(elements());
        let right = seed().then(source().then(elements().then(elements())));
        assert_eq!(process(left), vec!["1", "2", "3"]);
        assert_eq!(
            process(seed().then(source()).then(elements()).then(elements())),
            process(right)
        );
    }

    #[test]
    fn filter_is_a_subsequence() {
        let numbers = (0..10).map(Value::Integer).collect::<Vec<_>>();
        let pipeline = seed()
            .then(numbers)
            .then(elements())
            .filter(identity().rem(3).equals(0));
        assert_eq!(process(pipeline), vec!["0", "3", "6", "9"]);
    }

    #[test]
    fn filter_keeps_duplicates() {
        let pipeline = seed()
            .then_all([1, 1, 2, 1])
            .filter(identity().equals(1));
        assert_eq!(process(pipeline), vec!["1", "1", "1"]);
    }

    #[test]
    fn evaluation_is_restartable() {
        let pipeline = seed().then(crate::sample::winfo()).filter(identity().not_equals(2));
        let first = process_twice(&pipeline);
        assert_eq!(first.0, first.1);
    }

    fn process_twice(traversal: &crate::Traversal) -> (Vec<Value>, Vec<Value>) {
        (generate(traversal, Value::Unit), generate(traversal, Value::Unit))
    }
}
