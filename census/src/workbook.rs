//! Workbook exporter
//!
//! Writes the census as an xlsx workbook: an `all` sheet with every employee,
//! then one sheet per age bracket in canonical order. Only name fields, the birth
//! date and the derived age are exported.

use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};
use umya_spreadsheet::helper::coordinate::coordinate_from_index;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::bracket::UNKNOWN;
use crate::census::{CategorizedRecord, Census};
use crate::error::{CensusError, Result};
use crate::store::{commit, staging_file};

pub const ALL_SHEET: &str = "all";

/// Column headers of every sheet.
pub const SHEET_COLUMNS: [&str; 5] = ["surname", "given_name", "patronymic", "birth_date", "age"];

/// Sheet names and data row counts, in workbook order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookStats {
    pub sheets: Vec<(String, usize)>,
}

impl WorkbookStats {
    pub fn rows_in(&self, sheet: &str) -> Option<usize> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, rows)| *rows)
    }
}

fn cell<'a>(sheet: &'a mut Worksheet, col: u32, row: u32) -> &'a mut umya_spreadsheet::Cell {
    sheet.get_cell_mut(coordinate_from_index(&col, &row).as_str())
}

fn fill_sheet<'a, I>(sheet: &mut Worksheet, entries: I) -> usize
where
    I: IntoIterator<Item = &'a CategorizedRecord>,
{
    for (idx, title) in SHEET_COLUMNS.iter().enumerate() {
        cell(sheet, idx as u32 + 1, 1).set_value(*title);
    }

    let mut rows = 0;
    for (offset, entry) in entries.into_iter().enumerate() {
        let row = offset as u32 + 2;
        let record = &entry.record;
        cell(sheet, 1, row).set_value(record.surname.as_str());
        cell(sheet, 2, row).set_value(record.given_name.as_str());
        cell(sheet, 3, row).set_value(record.patronymic.as_str());
        cell(sheet, 4, row).set_value(record.birth_date.as_str());
        match entry.age.years() {
            Some(years) => {
                cell(sheet, 5, row).set_value_number(years);
            }
            None => {
                cell(sheet, 5, row).set_value(UNKNOWN);
            }
        }
        rows += 1;
    }
    rows
}

fn add_sheet<'b>(book: &'b mut Spreadsheet, name: &str) -> Result<&'b mut Worksheet> {
    book.new_sheet(name)
        .map_err(|e| CensusError::Workbook(format!("cannot create sheet '{}': {}", name, e)))
}

/// Build the workbook in memory.
pub fn build_workbook(census: &Census) -> Result<(Spreadsheet, WorkbookStats)> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let mut sheets = Vec::new();

    let sheet = add_sheet(&mut book, ALL_SHEET)?;
    let rows = fill_sheet(sheet, census.entries());
    sheets.push((ALL_SHEET.to_string(), rows));

    let scheme = census.scheme();
    for category in scheme.brackets() {
        let name = scheme.name(category);
        let sheet = add_sheet(&mut book, name)?;
        let rows = fill_sheet(sheet, census.in_category(category));
        debug!("Sheet '{}': {} rows", name, rows);
        sheets.push((name.to_string(), rows));
    }

    Ok((book, WorkbookStats { sheets }))
}

/// Build and write the workbook. Nothing is left at `path` if writing fails.
pub fn write_workbook(path: &Path, census: &Census) -> Result<WorkbookStats> {
    let (book, stats) = build_workbook(census)?;

    let mut staged = staging_file(path)?;
    let mut writer = BufWriter::new(staged.as_file_mut());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut writer)
        .map_err(|e| CensusError::Workbook(format!("cannot write {}: {}", path.display(), e)))?;
    writer
        .flush()
        .map_err(|e| CensusError::write_failure(path, e))?;
    drop(writer);
    commit(staged, path)?;

    info!(
        "Wrote workbook {} with {} sheets",
        path.display(),
        stats.sheets.len()
    );
    Ok(stats)
}
