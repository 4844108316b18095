//! Staff Census
//!
//! Synthesizes a roster of fictitious employees, stores it as semicolon-delimited
//! text, and reports on it by gender and age bracket: an xlsx workbook with one
//! sheet per bracket, console tables and bar charts.
//!
//! Every consumer reads one [`Census`], taken against a single reference date,
//! and one [`Summary`] computed from it.

pub mod age;
pub mod aggregate;
pub mod bracket;
pub mod census;
pub mod config;
pub mod error;
pub mod generator;
pub mod names;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod store;
pub mod telemetry;
pub mod workbook;

pub use age::{age_of, age_of_date, Age};
pub use aggregate::{summarize, Summary};
pub use bracket::{AgeRange, BracketDef, BracketScheme, Category};
pub use census::{CategorizedRecord, Census};
pub use config::{CensusConfig, GeneratorConfig};
pub use error::{CensusError, Result};
pub use record::{EmployeeRecord, Gender};
