//! Stage 2: re-export the stored roster as a workbook with one sheet per age bracket.

use std::process::ExitCode;

use census::pipeline::{export_stage, reference_date, run_stage};
use census::telemetry;

fn main() -> ExitCode {
    telemetry::init();
    run_stage("export_workbook", |config| {
        let stats = export_stage(config, reference_date())?;
        for (sheet, rows) in &stats.sheets {
            println!("{}: {} rows", sheet, rows);
        }
        println!(
            "Ok. XLSX file '{}' created successfully.",
            config.workbook_path.display()
        );
        Ok(())
    })
}
