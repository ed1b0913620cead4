#[cfg(test)]
mod collections {
    use crate::sample::winfo;
    use crate::tests::test_util::{process, process_err};
    use crate::traversal::{collect, constant, elements, identity, seed};
    use crate::{Error, Value};

    #[test]
    fn collect_empty() {
        let result = process(seed().then(collect(Vec::<crate::Traversal>::new())));
        assert_eq!(result, vec!["[]"]);
    }

    #[test]
    fn collect_literals() {
        let result = process(seed().then(collect([0, 1, 2])));
        assert_eq!(result, vec!["[0,1,2]"]);
    }

    #[test]
    fn collect_one_element() {
        let result = process(seed().then(collect([0])));
        assert_eq!(result, vec!["[0]"]);
    }

    #[test]
    fn collect_aggregates_into_one_value() {
        let source = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        let result = process(seed().then(source).then(collect([elements()])));
        assert_eq!(result, vec!["[1,2,3]"]);
    }

    #[test]
    fn collect_concatenates_parts_in_order() {
        let result = process(seed().then(collect([
            seed().then_all([1, 2]),
            constant("x"),
            seed().then_all([3]),
        ])));
        assert_eq!(result, vec![r#"[1,2,"x",3]"#]);
    }

    #[test]
    fn collect_flattens_one_level_only() {
        let nested = Value::from(vec![Value::Integer(1)]);
        let result = process(seed().then(collect([constant(nested.clone()), constant(nested)])));
        assert_eq!(result, vec!["[[1],[1]]"]);
    }

    #[test]
    fn collect_sees_the_current_input() {
        let result = process(seed().then_all([1, 2]).then(collect([identity(), identity().add(10)])));
        assert_eq!(result, vec!["[1,11]", "[2,12]"]);
    }

    #[test]
    fn collect_then_iterate() {
        let result = process(seed().then(collect(0..10)).then(elements()));
        assert_eq!(result, vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn collect_sample_source() {
        let result = process(seed().then(collect([winfo()])));
        assert_eq!(result, vec![r#"[1,2,3,"hello","world"]"#]);
    }

    #[test]
    fn collect_propagates_errors() {
        let error = process_err(seed().then(collect([constant("a").add(1)])));
        assert!(matches!(error, Error::TypeMismatch { .. }));
    }
}
