//! Employee records and the fixed column schema of the store

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Gender
// ============================================================================

/// Declaration order is the canonical report order: female first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Employee Record
// ============================================================================

/// Column names of the delimited store, in field order.
pub const COLUMNS: [&str; 10] = [
    "surname",
    "given_name",
    "patronymic",
    "gender",
    "birth_date",
    "job_title",
    "city",
    "address",
    "phone",
    "email",
];

/// One synthetic employee as persisted in the store.
///
/// `birth_date` keeps the stored text (`YYYY-MM-DD`) so a record reads back
/// byte-identical and a malformed date still loads; the age engine decides
/// what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub surname: String,
    pub given_name: String,
    pub patronymic: String,
    pub gender: Gender,
    pub birth_date: String,
    pub job_title: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl EmployeeRecord {
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.surname, self.given_name, self.patronymic)
    }
}
