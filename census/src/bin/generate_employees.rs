//! Stage 1: synthesize the roster and write it to the delimited store.

use std::process::ExitCode;

use census::pipeline::{generate_stage, run_stage};
use census::telemetry;

fn main() -> ExitCode {
    telemetry::init();
    run_stage("generate_employees", |config| {
        let count = generate_stage(config)?;
        println!(
            "Ok. File '{}' created with {} records.",
            config.store_path.display(),
            count
        );
        Ok(())
    })
}
