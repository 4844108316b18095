//! Aggregator
//!
//! Counts categorized records by gender, by age bracket, and by the cross of
//! both. All three views come out of one pass over a zero-filled
//! bracket x gender table, so their totals always agree.

use indexmap::IndexMap;
use serde::Serialize;

use crate::bracket::{BracketScheme, Category};
use crate::census::CategorizedRecord;
use crate::record::Gender;

/// Aggregate counts, keyed in canonical order with every category present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// Female, then male.
    pub by_gender: IndexMap<Gender, usize>,
    /// Brackets in declaration order, `unknown` last.
    pub by_bracket: IndexMap<String, usize>,
    /// Rows as in `by_bracket`, columns as in `by_gender`.
    pub by_bracket_and_gender: IndexMap<String, IndexMap<Gender, usize>>,
}

impl Summary {
    pub fn gender_count(&self, gender: Gender) -> usize {
        self.by_gender.get(&gender).copied().unwrap_or(0)
    }

    pub fn bracket_count(&self, bracket: &str) -> usize {
        self.by_bracket.get(bracket).copied().unwrap_or(0)
    }

    pub fn cell(&self, bracket: &str, gender: Gender) -> usize {
        self.by_bracket_and_gender
            .get(bracket)
            .and_then(|row| row.get(&gender))
            .copied()
            .unwrap_or(0)
    }

    /// Every view sums to `total`, and the table's marginals match the
    /// one-dimensional counts.
    pub fn is_consistent(&self) -> bool {
        let bracket_sum: usize = self.by_bracket.values().sum();
        let gender_sum: usize = self.by_gender.values().sum();
        let table_sum: usize = self
            .by_bracket_and_gender
            .values()
            .flat_map(|row| row.values())
            .sum();

        let rows_match = self.by_bracket.iter().all(|(bracket, count)| {
            self.by_bracket_and_gender
                .get(bracket)
                .map(|row| row.values().sum::<usize>() == *count)
                .unwrap_or(false)
        });
        let columns_match = self.by_gender.iter().all(|(gender, count)| {
            self.by_bracket_and_gender
                .values()
                .map(|row| row.get(gender).copied().unwrap_or(0))
                .sum::<usize>()
                == *count
        });

        bracket_sum == self.total
            && gender_sum == self.total
            && table_sum == self.total
            && rows_match
            && columns_match
    }
}

/// Aggregate categorized records under `scheme`.
///
/// A category the scheme does not declare is counted as `unknown`; no record
/// is ever dropped.
pub fn summarize<'a, I>(entries: I, scheme: &BracketScheme) -> Summary
where
    I: IntoIterator<Item = &'a CategorizedRecord>,
{
    let zero_row: IndexMap<Gender, usize> = Gender::ALL.iter().map(|g| (*g, 0)).collect();
    let mut table: IndexMap<Category, IndexMap<Gender, usize>> = scheme
        .categories()
        .map(|category| (category, zero_row.clone()))
        .collect();

    let mut total = 0;
    for entry in entries {
        let category = if table.contains_key(&entry.category) {
            entry.category
        } else {
            Category::Unknown
        };
        table[&category][&entry.record.gender] += 1;
        total += 1;
    }

    let mut by_gender = zero_row;
    for row in table.values() {
        for (gender, count) in row {
            by_gender[gender] += count;
        }
    }

    let by_bracket: IndexMap<String, usize> = table
        .iter()
        .map(|(category, row)| (scheme.name(*category).to_string(), row.values().sum::<usize>()))
        .collect();

    let by_bracket_and_gender: IndexMap<String, IndexMap<Gender, usize>> = table
        .into_iter()
        .map(|(category, row)| (scheme.name(category).to_string(), row))
        .collect();

    Summary {
        total,
        by_gender,
        by_bracket,
        by_bracket_and_gender,
    }
}
