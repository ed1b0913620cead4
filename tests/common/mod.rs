use trav_query_lib::driver::run;
use trav_query_lib::sample::scenario;
use trav_query_lib::{Error, Traversal};

#[allow(dead_code)]
pub fn process(traversal: Traversal) -> Vec<String> {
    run(&traversal)
        .expect("evaluation")
        .iter()
        .map(|item| item.to_string())
        .collect()
}

#[allow(dead_code)]
pub fn process_scenario(name: &str) -> Result<Vec<String>, Error> {
    let scenario = scenario(name).expect("known scenario");
    let pipeline = (scenario.build)();
    run(&pipeline).map(|values| values.iter().map(|item| item.to_string()).collect())
}
