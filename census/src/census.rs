//! Census - one run's categorized snapshot of the roster
//!
//! The reference date is fixed once when the census is taken and every record is
//! aged and bracketed exactly once. The workbook, the printed report and the charts
//! all read from the same census, so they cannot disagree.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::age::{age_of, Age};
use crate::aggregate::{summarize, Summary};
use crate::bracket::{BracketScheme, Category};
use crate::record::EmployeeRecord;

/// Employee record with its derived age and bracket. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedRecord {
    pub record: EmployeeRecord,
    pub age: Age,
    pub category: Category,
}

pub struct Census {
    reference_date: NaiveDate,
    scheme: BracketScheme,
    entries: Vec<CategorizedRecord>,
}

impl Census {
    pub fn new(records: Vec<EmployeeRecord>, scheme: BracketScheme, reference_date: NaiveDate) -> Self {
        let entries: Vec<CategorizedRecord> = records
            .into_iter()
            .map(|record| {
                let age = age_of(&record.birth_date, reference_date);
                let category = scheme.classify(age);
                if category == Category::Unknown {
                    warn!(
                        "Indeterminate age for {} (birth date '{}')",
                        record.full_name(),
                        record.birth_date
                    );
                }
                CategorizedRecord {
                    record,
                    age,
                    category,
                }
            })
            .collect();

        debug!(
            "Census of {} records taken as of {}",
            entries.len(),
            reference_date
        );

        Self {
            reference_date,
            scheme,
            entries,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn scheme(&self) -> &BracketScheme {
        &self.scheme
    }

    pub fn entries(&self) -> &[CategorizedRecord] {
        &self.entries
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CategorizedRecord> + '_ {
        self.entries.iter().filter(move |entry| entry.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.entries, &self.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Gender;

    fn record(gender: Gender, birth_date: &str) -> EmployeeRecord {
        EmployeeRecord {
            surname: "Коваль".into(),
            given_name: "Олена".into(),
            patronymic: "Іванівна".into(),
            gender,
            birth_date: birth_date.into(),
            job_title: "Інженер".into(),
            city: "Львів".into(),
            address: "вул. Шевченка, 1".into(),
            phone: "+380 67 123 45 67".into(),
            email: "olena@example.com".into(),
        }
    }

    #[test]
    fn test_entries_are_aged_against_reference() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let census = Census::new(
            vec![
                record(Gender::Female, "2000-06-15"),
                record(Gender::Male, "2006-06-16"),
                record(Gender::Male, "garbage"),
            ],
            BracketScheme::canonical(),
            reference,
        );

        let ages: Vec<Age> = census.entries().iter().map(|e| e.age).collect();
        assert_eq!(ages, vec![Age::new(24), Age::new(17), Age::INVALID]);

        let names: Vec<&str> = census
            .entries()
            .iter()
            .map(|e| census.scheme().name(e.category))
            .collect();
        assert_eq!(names, vec!["18-45", "younger_18", "unknown"]);
        assert_eq!(census.reference_date(), reference);
    }

    #[test]
    fn test_in_category_filters() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let census = Census::new(
            vec![
                record(Gender::Female, "1950-01-01"),
                record(Gender::Male, "1990-01-01"),
                record(Gender::Male, "1940-05-05"),
            ],
            BracketScheme::canonical(),
            reference,
        );
        assert_eq!(census.in_category(Category::Bracket(3)).count(), 2);
        assert_eq!(census.in_category(Category::Bracket(0)).count(), 0);
        assert_eq!(census.in_category(Category::Unknown).count(), 0);
        assert_eq!(census.len(), 3);
    }
}
