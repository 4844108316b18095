//! Age Engine
//!
//! Derives the age in full elapsed years from a birth date and a reference date.
//! Ages are never stored; they are recomputed from the record on every run.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{CensusError, Result};

/// Canonical on-disk date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Age in full years.
///
/// [`Age::INVALID`] marks a birth date that could not be parsed. It lies
/// outside every bracket range, as does any negative age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(i32);

impl Age {
    pub const INVALID: Age = Age(-1);

    pub fn new(years: i32) -> Self {
        Self(years)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Full years, or `None` for the sentinel and negative ages.
    pub fn years(self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.years() {
            Some(years) => write!(f, "{}", years),
            None => f.write_str("unknown"),
        }
    }
}

pub fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| CensusError::InvalidDate {
        value: value.to_string(),
    })
}

pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Age of someone born on `birth` as of `reference`.
///
/// A 29 February birthday counts as reached on 1 March in non-leap years.
/// A birth date after `reference` gives a negative age.
pub fn age_of_date(birth: NaiveDate, reference: NaiveDate) -> Age {
    let mut years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Age(years)
}

/// Age from the stored text form. Unparsable input yields [`Age::INVALID`].
pub fn age_of(birth: &str, reference: NaiveDate) -> Age {
    match parse_birth_date(birth) {
        Ok(date) => age_of_date(date, reference),
        Err(_) => Age::INVALID,
    }
}
