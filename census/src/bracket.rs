//! Age Brackets
//!
//! An ordered, exhaustive, non-overlapping partition of non-negative ages into
//! named ranges. Anything outside that domain (the invalid-age sentinel, negative
//! ages) falls into the distinguished `unknown` category.

use serde::{Deserialize, Serialize};

use crate::age::Age;
use crate::error::{CensusError, Result};

/// Label of the category holding ages outside every bracket.
pub const UNKNOWN: &str = "unknown";

/// Range of ages covered by one bracket. Upper bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRange {
    /// `age < n`
    Below(u32),
    /// `lo <= age < hi`
    Between(u32, u32),
    /// `age >= n`
    AtLeast(u32),
}

impl AgeRange {
    /// Negative ages are never contained.
    pub fn contains(&self, age: i32) -> bool {
        let Ok(age) = u32::try_from(age) else {
            return false;
        };
        match *self {
            AgeRange::Below(n) => age < n,
            AgeRange::Between(lo, hi) => lo <= age && age < hi,
            AgeRange::AtLeast(n) => age >= n,
        }
    }

    /// Half-open interval `[lo, hi)`; `None` means unbounded above.
    fn bounds(&self) -> (u32, Option<u32>) {
        match *self {
            AgeRange::Below(n) => (0, Some(n)),
            AgeRange::Between(lo, hi) => (lo, Some(hi)),
            AgeRange::AtLeast(n) => (n, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketDef {
    pub name: String,
    pub range: AgeRange,
}

impl BracketDef {
    pub fn new(name: impl Into<String>, range: AgeRange) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }
}

/// Result of bracketing one age.
///
/// The derived ordering is the canonical one: brackets in declaration order,
/// then `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Bracket(usize),
    Unknown,
}

/// Validated bracket partition, evaluated first-match in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BracketDef>", into = "Vec<BracketDef>")]
pub struct BracketScheme {
    brackets: Vec<BracketDef>,
}

impl BracketScheme {
    /// Build a scheme, rejecting any set of ranges that leaves a gap, overlaps,
    /// or reuses a name.
    pub fn new(brackets: Vec<BracketDef>) -> Result<Self> {
        validate(&brackets)?;
        Ok(Self { brackets })
    }

    /// `younger_18`, `18-45`, `45-70`, `older_70`.
    pub fn canonical() -> Self {
        Self {
            brackets: vec![
                BracketDef::new("younger_18", AgeRange::Below(18)),
                BracketDef::new("18-45", AgeRange::Between(18, 45)),
                BracketDef::new("45-70", AgeRange::Between(45, 70)),
                BracketDef::new("older_70", AgeRange::AtLeast(70)),
            ],
        }
    }

    pub fn bracket_of(&self, age: i32) -> Category {
        if age < 0 {
            return Category::Unknown;
        }
        self.brackets
            .iter()
            .position(|def| def.range.contains(age))
            .map(Category::Bracket)
            .unwrap_or(Category::Unknown)
    }

    pub fn classify(&self, age: Age) -> Category {
        self.bracket_of(age.get())
    }

    pub fn name(&self, category: Category) -> &str {
        match category {
            Category::Bracket(index) => self
                .brackets
                .get(index)
                .map(|def| def.name.as_str())
                .unwrap_or(UNKNOWN),
            Category::Unknown => UNKNOWN,
        }
    }

    /// Named brackets only, in canonical order.
    pub fn brackets(&self) -> impl Iterator<Item = Category> + '_ {
        (0..self.brackets.len()).map(Category::Bracket)
    }

    /// Full codomain in canonical order, `unknown` last.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.brackets().chain(std::iter::once(Category::Unknown))
    }

    pub fn definitions(&self) -> &[BracketDef] {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}

impl Default for BracketScheme {
    fn default() -> Self {
        Self::canonical()
    }
}

impl TryFrom<Vec<BracketDef>> for BracketScheme {
    type Error = CensusError;

    fn try_from(brackets: Vec<BracketDef>) -> Result<Self> {
        Self::new(brackets)
    }
}

impl From<BracketScheme> for Vec<BracketDef> {
    fn from(scheme: BracketScheme) -> Self {
        scheme.brackets
    }
}

fn validate(brackets: &[BracketDef]) -> Result<()> {
    if brackets.is_empty() {
        return Err(CensusError::InvalidBrackets("no brackets defined".into()));
    }

    for (i, def) in brackets.iter().enumerate() {
        if def.name.is_empty() || def.name == UNKNOWN {
            return Err(CensusError::InvalidBrackets(format!(
                "bracket name '{}' is reserved or empty",
                def.name
            )));
        }
        if brackets[..i].iter().any(|other| other.name == def.name) {
            return Err(CensusError::InvalidBrackets(format!(
                "duplicate bracket name '{}'",
                def.name
            )));
        }
        if let (lo, Some(hi)) = def.range.bounds() {
            if lo >= hi {
                return Err(CensusError::InvalidBrackets(format!(
                    "bracket '{}' is empty",
                    def.name
                )));
            }
        }
    }

    let mut intervals: Vec<(u32, Option<u32>, &str)> = brackets
        .iter()
        .map(|def| {
            let (lo, hi) = def.range.bounds();
            (lo, hi, def.name.as_str())
        })
        .collect();
    intervals.sort_by_key(|(lo, _, _)| *lo);

    let mut expected = Some(0u32);
    for (lo, hi, name) in intervals {
        match expected {
            None => {
                return Err(CensusError::InvalidBrackets(format!(
                    "bracket '{}' overlaps an unbounded bracket",
                    name
                )))
            }
            Some(next) if lo < next => {
                return Err(CensusError::InvalidBrackets(format!(
                    "bracket '{}' overlaps ages below {}",
                    name, next
                )))
            }
            Some(next) if lo > next => {
                return Err(CensusError::InvalidBrackets(format!(
                    "ages {}..{} are not covered",
                    next, lo
                )))
            }
            Some(_) => expected = hi,
        }
    }

    if let Some(next) = expected {
        return Err(CensusError::InvalidBrackets(format!(
            "ages from {} upwards are not covered",
            next
        )));
    }

    Ok(())
}
