//! Record Generator
//!
//! Synthesizes a shuffled roster with a fixed female share and birth dates drawn
//! uniformly from an inclusive date range.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::age::format_birth_date;
use crate::config::GeneratorConfig;
use crate::error::{CensusError, Result};
use crate::names;
use crate::record::{EmployeeRecord, Gender};

const JOB_TITLES: &[&str] = &[
    "Бухгалтер", "Інженер", "Програміст", "Менеджер з продажу", "Юрист", "Економіст",
    "Лікар", "Вчитель", "Дизайнер", "Аналітик", "Адміністратор", "Технолог",
    "Логіст", "Маркетолог", "Електрик", "Водій", "Кухар", "Фармацевт",
];

const CITIES: &[&str] = &[
    "Київ", "Львів", "Одеса", "Харків", "Дніпро", "Запоріжжя", "Вінниця", "Полтава",
    "Чернігів", "Житомир", "Тернопіль", "Ужгород", "Івано-Франківськ", "Луцьк",
    "Рівне", "Суми", "Черкаси", "Херсон",
];

const STREETS: &[&str] = &[
    "вул. Шевченка", "вул. Франка", "вул. Лесі Українки", "просп. Свободи",
    "вул. Грушевського", "вул. Садова", "вул. Миру", "вул. Соборна", "вул. Зелена",
    "бульв. Незалежності", "вул. Героїв", "вул. Хмельницького",
];

const PHONE_PREFIXES: &[&str] = &["50", "63", "66", "67", "68", "73", "93", "95", "96", "97", "98", "99"];

const EMAIL_WORDS: &[&str] = &[
    "sonyah", "kalyna", "dnipro", "karpaty", "verba", "lelka", "bereza", "yavir",
    "chaika", "zirka", "hryb", "kashtan", "barvinok", "tops", "myr",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "ukr.test"];

/// Shuffled genders, female share rounded down.
pub fn gender_list<R: Rng + ?Sized>(total: usize, female_ratio: f64, rng: &mut R) -> Vec<Gender> {
    let females = ((total as f64 * female_ratio).floor() as usize).min(total);
    let mut genders = vec![Gender::Female; females];
    genders.resize(total, Gender::Male);
    genders.shuffle(rng);
    genders
}

/// Uniform date in `[start, end]`, both inclusive.
pub fn random_birth_date<R: Rng + ?Sized>(start: NaiveDate, end: NaiveDate, rng: &mut R) -> Result<NaiveDate> {
    let span = (end - start).num_days();
    if span < 0 {
        return Err(CensusError::InvalidConfig(format!(
            "birth date range {}..={} is empty",
            start, end
        )));
    }
    let offset = rng.gen_range(0..=span as u64);
    start.checked_add_days(Days::new(offset)).ok_or_else(|| {
        CensusError::InvalidConfig(format!("birth date {} + {} days is out of range", start, offset))
    })
}

fn pick<R: Rng + ?Sized>(list: &[&str], rng: &mut R) -> String {
    list.choose(rng).copied().unwrap_or_default().to_string()
}

fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+380 {} {:03} {:02} {:02}",
        pick(PHONE_PREFIXES, rng),
        rng.gen_range(0..1000),
        rng.gen_range(0..100),
        rng.gen_range(0..100)
    )
}

fn random_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}{}@{}",
        pick(EMAIL_WORDS, rng),
        pick(EMAIL_WORDS, rng),
        rng.gen_range(1..1000),
        pick(EMAIL_DOMAINS, rng)
    )
}

fn random_record<R: Rng + ?Sized>(gender: Gender, birth_date: NaiveDate, rng: &mut R) -> EmployeeRecord {
    EmployeeRecord {
        surname: names::random_surname(gender, rng).to_string(),
        given_name: names::random_given_name(gender, rng).to_string(),
        patronymic: names::random_patronymic(gender, rng).to_string(),
        gender,
        birth_date: format_birth_date(birth_date),
        job_title: pick(JOB_TITLES, rng),
        city: pick(CITIES, rng),
        address: format!("{}, {}", pick(STREETS, rng), rng.gen_range(1..200)),
        phone: random_phone(rng),
        email: random_email(rng),
    }
}

/// Generate `config.record_count` records using `rng`.
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Vec<EmployeeRecord>> {
    config.validate()?;

    let genders = gender_list(config.record_count, config.female_ratio, rng);
    let females = genders.iter().filter(|g| **g == Gender::Female).count();
    debug!(
        "Generating {} records ({} female, {} male)",
        genders.len(),
        females,
        genders.len() - females
    );

    genders
        .into_iter()
        .map(|gender| {
            let birth_date = random_birth_date(config.birth_start, config.birth_end, rng)?;
            Ok(random_record(gender, birth_date, rng))
        })
        .collect()
}

/// Generate with the configured seed, or from entropy when none is set.
pub fn generate_roster(config: &GeneratorConfig) -> Result<Vec<EmployeeRecord>> {
    let mut rng = match config.seed {
        Some(seed) => {
            info!("Generating roster with seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    generate(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::parse_birth_date;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gender_ratio_rounds_female_down() {
        let mut rng = StdRng::seed_from_u64(1);
        let genders = gender_list(7, 0.4, &mut rng);
        assert_eq!(genders.len(), 7);
        assert_eq!(genders.iter().filter(|g| **g == Gender::Female).count(), 2);

        let genders = gender_list(500, 0.4, &mut rng);
        assert_eq!(genders.iter().filter(|g| **g == Gender::Female).count(), 200);

        assert!(gender_list(3, 0.0, &mut rng).iter().all(|g| *g == Gender::Male));
        assert!(gender_list(3, 1.0, &mut rng).iter().all(|g| *g == Gender::Female));
        assert!(gender_list(0, 0.5, &mut rng).is_empty());
    }

    #[test]
    fn test_birth_dates_within_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = date(2000, 1, 1);
        let end = date(2000, 1, 3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let d = random_birth_date(start, end, &mut rng).unwrap();
            assert!(d >= start && d <= end);
            seen.insert(d);
        }
        assert_eq!(seen.len(), 3);

        assert_eq!(random_birth_date(start, start, &mut rng).unwrap(), start);
        assert!(random_birth_date(end, start, &mut rng).is_err());
    }

    #[test]
    fn test_generate_roster() {
        let config = GeneratorConfig {
            record_count: 50,
            seed: Some(42),
            ..GeneratorConfig::default()
        };
        let records = generate_roster(&config).unwrap();
        assert_eq!(records.len(), 50);
        assert_eq!(records.iter().filter(|r| r.gender == Gender::Female).count(), 20);

        for record in &records {
            let birth = parse_birth_date(&record.birth_date).unwrap();
            assert!(birth >= config.birth_start && birth <= config.birth_end);
            assert!(!record.surname.is_empty());
            assert!(record.email.contains('@'));
            assert!(record.phone.starts_with("+380 "));
        }

        let again = generate_roster(&config).unwrap();
        assert_eq!(records, again);
    }

    #[test]
    fn test_generate_rejects_bad_ratio() {
        let config = GeneratorConfig {
            female_ratio: -0.1,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(generate(&config, &mut rng), Err(CensusError::InvalidConfig(_))));
    }
}
