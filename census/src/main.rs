//! Staff Census - full run
//!
//! Generates the roster, writes the store, then exports the workbook and prints
//! the report from one census taken against a single reference date.

use std::process::ExitCode;

use census::pipeline::{reference_date, run_all, run_stage};
use census::telemetry;
use tracing::info;

fn main() -> ExitCode {
    telemetry::init();
    run_stage("census", |config| {
        let today = reference_date();
        info!("Staff census starting, reference date {}", today);

        let output = run_all(config, today)?;
        println!(
            "Ok. File '{}' created with {} records.",
            config.store_path.display(),
            output.records_written
        );
        println!(
            "Ok. XLSX file '{}' created with {} sheets.\n",
            config.workbook_path.display(),
            output.workbook.sheets.len()
        );
        println!("{}", output.report);
        Ok(())
    })
}
