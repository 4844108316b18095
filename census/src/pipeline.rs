//! Pipeline stages
//!
//! Each stage is a standalone entry point: it loads the configuration, does its
//! work, and reports failure as a logged diagnostic and a failing exit code.

use std::process::ExitCode;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tracing::{error, info};

use crate::census::Census;
use crate::config::CensusConfig;
use crate::generator::generate_roster;
use crate::report::render_report;
use crate::store::{read_records, write_records};
use crate::workbook::{write_workbook, WorkbookStats};

/// Generate the roster and write it to the store. Returns the record count.
pub fn generate_stage(config: &CensusConfig) -> anyhow::Result<usize> {
    let records = generate_roster(&config.generator).context("generating employee records")?;
    let written = write_records(&config.store_path, &records)?;
    Ok(written)
}

/// Read the store and take the census as of `reference_date`.
pub fn take_census(config: &CensusConfig, reference_date: NaiveDate) -> anyhow::Result<Census> {
    let records = read_records(&config.store_path)?;
    info!(
        "Loaded {} records from {}",
        records.len(),
        config.store_path.display()
    );
    Ok(Census::new(records, config.brackets.clone(), reference_date))
}

pub fn export_stage(config: &CensusConfig, reference_date: NaiveDate) -> anyhow::Result<WorkbookStats> {
    let census = take_census(config, reference_date)?;
    let stats = write_workbook(&config.workbook_path, &census)?;
    Ok(stats)
}

/// Console report (tables and charts) for the stored roster.
pub fn analyze_stage(config: &CensusConfig, reference_date: NaiveDate) -> anyhow::Result<String> {
    let census = take_census(config, reference_date)?;
    Ok(render_report(&census.summary()))
}

/// Outputs of a full run, all drawn from one census.
pub struct RunOutput {
    pub records_written: usize,
    pub workbook: WorkbookStats,
    pub report: String,
}

/// Generate, store, re-read, export and report with a single reference date.
pub fn run_all(config: &CensusConfig, reference_date: NaiveDate) -> anyhow::Result<RunOutput> {
    let records_written = generate_stage(config)?;
    let census = take_census(config, reference_date)?;
    let workbook = write_workbook(&config.workbook_path, &census)?;
    let report = render_report(&census.summary());
    Ok(RunOutput {
        records_written,
        workbook,
        report,
    })
}

/// Today's local date, read once per run.
pub fn reference_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Run a stage body, turning any error into a logged diagnostic.
pub fn run_stage<F>(name: &str, body: F) -> ExitCode
where
    F: FnOnce(&CensusConfig) -> anyhow::Result<()>,
{
    run_stage_with(name, CensusConfig::load(), body)
}

/// As [`run_stage`], with the configuration already loaded.
pub fn run_stage_with<F>(name: &str, config: crate::error::Result<CensusConfig>, body: F) -> ExitCode
where
    F: FnOnce(&CensusConfig) -> anyhow::Result<()>,
{
    let outcome = config
        .context("loading configuration")
        .and_then(|config| body(&config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{} failed: {:#}", name, err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> CensusConfig {
        CensusConfig {
            generator: GeneratorConfig {
                record_count: 40,
                seed: Some(11),
                ..GeneratorConfig::default()
            },
            store_path: dir.join("employees.csv"),
            workbook_path: dir.join("employees.xlsx"),
            ..CensusConfig::default()
        }
    }

    #[test]
    fn test_run_all() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let output = run_all(&config, reference).unwrap();
        assert_eq!(output.records_written, 40);
        assert_eq!(output.workbook.rows_in("all"), Some(40));
        let bracket_rows: usize = output.workbook.sheets[1..].iter().map(|(_, n)| n).sum();
        assert_eq!(bracket_rows, 40);
        assert!(output.report.contains("female: 16"));
        assert!(config.workbook_path.exists());
    }

    #[test]
    fn test_stages_fail_cleanly_without_store() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let err = export_stage(&config, reference).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(!config.workbook_path.exists());
        assert!(analyze_stage(&config, reference).is_err());
    }

    #[test]
    fn test_failing_stage_exits_with_failure() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let code = run_stage_with("analyze", Ok(config), |config| {
            analyze_stage(config, reference).map(|_| ())
        });
        assert_eq!(code, ExitCode::FAILURE);

        let code = run_stage_with("export", Ok(CensusConfig::default()), |_| {
            anyhow::bail!("disk full")
        });
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_missing_config_file_exits_with_failure() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let mut ran = false;

        let code = run_stage_with("generate", CensusConfig::load_from(Some(&missing)), |_| {
            ran = true;
            Ok(())
        });
        assert_eq!(code, ExitCode::FAILURE);
        assert!(!ran);
    }

    #[test]
    fn test_stage_with_config_file_succeeds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("census.json");
        let store = dir.path().join("roster.csv");
        std::fs::write(
            &path,
            format!(
                r#"{{ "store_path": {:?}, "generator": {{ "record_count": 10, "seed": 3 }} }}"#,
                store.display().to_string()
            ),
        )
        .unwrap();

        let code = run_stage_with("generate", CensusConfig::load_from(Some(&path)), |config| {
            generate_stage(config).map(|_| ())
        });
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(store.exists());
    }
}
