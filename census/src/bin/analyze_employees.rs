//! Stage 3: print counts by gender, by age bracket and by both, with bar charts.

use std::process::ExitCode;

use census::pipeline::{analyze_stage, reference_date, run_stage};
use census::telemetry;

fn main() -> ExitCode {
    telemetry::init();
    run_stage("analyze_employees", |config| {
        let report = analyze_stage(config, reference_date())?;
        println!("Ok. CSV file '{}' loaded successfully.\n", config.store_path.display());
        println!("{}", report);
        Ok(())
    })
}
