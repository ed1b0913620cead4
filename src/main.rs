extern crate log;
extern crate simplelog;

use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser};
use log::*;
use simplelog::*;

use trav_query_lib::driver::{dump, Driver, DriverConfig};
use trav_query_lib::sample::{scenario, scenarios, Scenario};
use trav_query_lib::Value;

#[derive(Parser, Debug)]
#[command(
    name = "Traversal query",
    version = "0.1.0",
    about = "Evaluate traversal pipelines over a sample source"
)]
struct Args {
    /// Pipeline to evaluate, may be repeated. Evaluates all of them by default.
    #[arg(short, long = "scenario", value_name = "NAME")]
    scenarios: Vec<String>,

    /// Amount of values to output per pipeline. Useful when exploring.
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print every value as pretty JSON instead of one line per pipeline.
    #[arg(long)]
    json: bool,

    /// List the available pipelines and exit.
    #[arg(long)]
    list: bool,

    /// Sets the level of verbosity
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    CombinedLogger::init(vec![TermLogger::new(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .expect("logger");

    if args.list {
        for scenario in scenarios() {
            println!("{:<14} {}", scenario.name, scenario.description);
        }
        return;
    }

    let selected: Vec<Scenario> = if args.scenarios.is_empty() {
        scenarios()
    } else {
        args.scenarios
            .iter()
            .map(|name| {
                scenario(name).unwrap_or_else(|| {
                    error!("Unknown scenario: {}", name);
                    process::exit(-1);
                })
            })
            .collect()
    };

    let driver = Driver::new(DriverConfig { limit: args.limit });
    let mut failed = false;
    for scenario in selected {
        let now = Instant::now();
        let pipeline = (scenario.build)();
        debug!("pipeline {}: {:?}", scenario.name, pipeline);

        let mut line = Vec::new();
        let result = driver.for_each(&pipeline, Value::Unit, |value| {
            if args.json {
                let serialized = serde_json::to_string_pretty(&value).expect("serialized");
                println!("{}", serialized);
            } else {
                line.push(value);
            }
        });
        if !args.json {
            println!("{}: {}", scenario.name, dump(&line));
        }
        if let Err(err) = result {
            error!("{} failed: {}", scenario.name, err);
            failed = true;
        }
        info!("{} spent: {}ms", scenario.name, now.elapsed().as_millis());
    }

    if failed {
        process::exit(1);
    }
}
