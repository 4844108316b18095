//! Tabular Store
//!
//! Semicolon-delimited UTF-8 text with a fixed header row. Writes go to a
//! temporary file beside the destination and are renamed into place, so a failed
//! write never leaves a truncated store behind.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{CensusError, Result};
use crate::record::{EmployeeRecord, COLUMNS};

pub const DELIMITER: u8 = b';';

fn destination_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Create `path`'s directory if needed and open a temporary file inside it.
pub(crate) fn staging_file(path: &Path) -> Result<NamedTempFile> {
    let dir = destination_dir(path);
    fs::create_dir_all(dir).map_err(|e| CensusError::write_failure(path, e))?;
    NamedTempFile::new_in(dir).map_err(|e| CensusError::write_failure(path, e))
}

/// Move a finished staging file over `path`.
pub(crate) fn commit(staged: NamedTempFile, path: &Path) -> Result<()> {
    staged
        .persist(path)
        .map_err(|e| CensusError::write_failure(path, e.error))?;
    Ok(())
}

/// Write all records under the fixed header. Returns the number of rows written.
pub fn write_records(path: &Path, records: &[EmployeeRecord]) -> Result<usize> {
    let staged = staging_file(path)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(staged);

    writer
        .write_record(COLUMNS)
        .map_err(|e| CensusError::write_failure(path, e.into()))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| CensusError::write_failure(path, e.into()))?;
    }

    let staged = writer
        .into_inner()
        .map_err(|e| CensusError::write_failure(path, e.into_error()))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| CensusError::write_failure(path, e))?;
    commit(staged, path)?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}

/// Read every record. Birth dates are passed through unvalidated.
pub fn read_records(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CensusError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => CensusError::Read {
            path: path.to_path_buf(),
            source: e.into(),
        },
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| CensusError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    if !headers.iter().eq(COLUMNS.iter().copied()) {
        return Err(CensusError::MalformedRow {
            line: 1,
            message: format!(
                "unexpected header '{}', expected '{}'",
                headers.iter().collect::<Vec<_>>().join(";"),
                COLUMNS.join(";")
            ),
        });
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<EmployeeRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => {
                return Err(CensusError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
            Err(e) => {
                let line = e
                    .position()
                    .map(|pos| pos.line())
                    .unwrap_or(index as u64 + 2);
                return Err(CensusError::MalformedRow {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}
