mod collections;
mod tests;

#[cfg(test)]
pub mod test_util {
    use crate::driver::run;
    use crate::{Error, Traversal};

    pub fn process(traversal: Traversal) -> Vec<String> {
        println!("Pipeline: {:?}", traversal);

        let values = run(&traversal).expect("evaluation");
        values
            .iter()
            .map(|item| serde_json::to_string(item).expect("serialized"))
            .collect()
    }

    pub fn process_err(traversal: Traversal) -> Error {
        run(&traversal).expect_err("evaluation should fail")
    }
}
