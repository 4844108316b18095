//! Console report and bar charts
//!
//! Everything here is rendered from a [`Summary`]; nothing recounts records.
//! Charts are ratatui `BarChart`s drawn into an off-screen buffer and flattened
//! to text so they can be printed after the tables.

use std::fmt::Write as _;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Widget};

use crate::aggregate::Summary;
use crate::bracket::UNKNOWN;
use crate::record::Gender;

pub const GENDER_TITLE: &str = "Employees by gender";
pub const BRACKET_TITLE: &str = "Employees by age bracket";
pub const CROSSTAB_TITLE: &str = "Employees by age bracket and gender";

const CHART_HEIGHT: u16 = 14;
const BAR_GAP: u16 = 2;
const GROUP_GAP: u16 = 3;

fn buffer_to_string(buf: &Buffer) -> String {
    let width = buf.area.width.max(1) as usize;
    buf.content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw(chart: BarChart<'_>, width: u16) -> String {
    let area = Rect::new(0, 0, width, CHART_HEIGHT);
    let mut buf = Buffer::empty(area);
    chart.render(area, &mut buf);
    buffer_to_string(&buf)
}

/// One bar per `(label, value)` pair, in the given order.
pub fn render_bar_chart(title: &str, data: &[(String, usize)]) -> String {
    let bar_width = data
        .iter()
        .map(|(label, value)| label.chars().count().max(value.to_string().len()))
        .max()
        .unwrap_or(1)
        .max(3) as u16;
    let max = data.iter().map(|(_, v)| *v as u64).max().unwrap_or(0).max(1);

    let bars: Vec<Bar> = data
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.clone()))
                .value(*value as u64)
        })
        .collect();

    let width = (data.len() as u16 * (bar_width + BAR_GAP))
        .max(title.chars().count() as u16 + 2)
        + 2;
    let chart = BarChart::default()
        .block(Block::bordered().title(title.to_string()))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(max)
        .data(BarGroup::default().bars(&bars));
    draw(chart, width)
}

/// One group per bracket with a bar per gender. The `unknown` row is only
/// drawn when it holds records.
pub fn render_grouped_chart(title: &str, summary: &Summary) -> String {
    let rows: Vec<(&String, Vec<(Gender, usize)>)> = summary
        .by_bracket_and_gender
        .iter()
        .filter(|(bracket, row)| bracket.as_str() != UNKNOWN || row.values().sum::<usize>() > 0)
        .map(|(bracket, row)| (bracket, row.iter().map(|(g, c)| (*g, *c)).collect()))
        .collect();

    let bar_width = Gender::ALL
        .iter()
        .map(|g| g.label().len())
        .max()
        .unwrap_or(4) as u16;
    let max = rows
        .iter()
        .flat_map(|(_, cells)| cells.iter().map(|(_, c)| *c as u64))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = BarChart::default()
        .block(Block::bordered().title(title.to_string()))
        .bar_width(bar_width)
        .bar_gap(1)
        .group_gap(GROUP_GAP)
        .max(max);

    let mut width: u16 = 2;
    for (bracket, cells) in &rows {
        let bars: Vec<Bar> = cells
            .iter()
            .map(|(gender, count)| {
                Bar::default()
                    .label(Line::from(gender.label()))
                    .value(*count as u64)
            })
            .collect();
        width += cells.len() as u16 * (bar_width + 1) + GROUP_GAP;
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(bracket.to_string()))
                .bars(&bars),
        );
    }

    draw(chart, width.max(title.chars().count() as u16 + 4))
}

pub fn gender_table(summary: &Summary) -> String {
    let mut out = format!("{}:\n", GENDER_TITLE);
    for (gender, count) in &summary.by_gender {
        let _ = writeln!(out, "{}: {}", gender, count);
    }
    out
}

pub fn bracket_table(summary: &Summary) -> String {
    let mut out = format!("{}:\n", BRACKET_TITLE);
    for (bracket, count) in &summary.by_bracket {
        let _ = writeln!(out, "{}: {}", bracket, count);
    }
    out
}

pub fn crosstab_table(summary: &Summary) -> String {
    let label_width = summary
        .by_bracket_and_gender
        .keys()
        .map(|k| k.chars().count())
        .chain(std::iter::once("bracket".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}:\n", CROSSTAB_TITLE);
    let _ = write!(out, "{:<width$}", "bracket", width = label_width);
    for gender in summary.by_gender.keys() {
        let _ = write!(out, " {:>8}", gender.label());
    }
    let _ = writeln!(out, " {:>8}", "total");

    for (bracket, row) in &summary.by_bracket_and_gender {
        let _ = write!(out, "{:<width$}", bracket, width = label_width);
        for count in row.values() {
            let _ = write!(out, " {:>8}", count);
        }
        let _ = writeln!(out, " {:>8}", row.values().sum::<usize>());
    }

    let _ = write!(out, "{:<width$}", "total", width = label_width);
    for count in summary.by_gender.values() {
        let _ = write!(out, " {:>8}", count);
    }
    let _ = writeln!(out, " {:>8}", summary.total);
    out
}

/// All three tables without charts.
pub fn render_summary(summary: &Summary) -> String {
    [
        gender_table(summary),
        bracket_table(summary),
        crosstab_table(summary),
    ]
    .join("\n")
}

/// Tables, each followed by its chart.
pub fn render_report(summary: &Summary) -> String {
    let gender_data: Vec<(String, usize)> = summary
        .by_gender
        .iter()
        .map(|(g, c)| (g.label().to_string(), *c))
        .collect();
    let bracket_data: Vec<(String, usize)> = summary
        .by_bracket
        .iter()
        .map(|(b, c)| (b.clone(), *c))
        .collect();

    [
        gender_table(summary),
        render_bar_chart(GENDER_TITLE, &gender_data),
        String::new(),
        bracket_table(summary),
        render_bar_chart(BRACKET_TITLE, &bracket_data),
        String::new(),
        crosstab_table(summary),
        render_grouped_chart(CROSSTAB_TITLE, summary),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::bracket::BracketScheme;
    use crate::census::Census;
    use crate::record::EmployeeRecord;
    use chrono::NaiveDate;

    fn record(gender: Gender, birth_date: &str) -> EmployeeRecord {
        EmployeeRecord {
            surname: "Гончаренко".into(),
            given_name: "Ігор".into(),
            patronymic: "Юрійович".into(),
            gender,
            birth_date: birth_date.into(),
            job_title: "Логіст".into(),
            city: "Суми".into(),
            address: "вул. Миру, 9".into(),
            phone: "+380 99 000 11 22".into(),
            email: "igor@example.com".into(),
        }
    }

    fn summary() -> Summary {
        Census::new(
            vec![
                record(Gender::Male, "1990-01-01"),
                record(Gender::Male, "1991-01-01"),
                record(Gender::Female, "1950-01-01"),
                record(Gender::Female, "bad"),
            ],
            BracketScheme::canonical(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .summary()
    }

    #[test]
    fn test_tables_follow_canonical_order() {
        let text = render_summary(&summary());
        assert!(text.contains("female: 2\nmale: 2\n"));
        assert!(text.contains(
            "younger_18: 0\n18-45: 2\n45-70: 0\nolder_70: 1\nunknown: 1\n"
        ));

        let table = crosstab_table(&summary());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], format!("{}:", CROSSTAB_TITLE));
        assert!(lines[1].starts_with("bracket"));
        assert!(lines[3].starts_with("18-45"));
        assert!(lines[3].ends_with(" 2"));
        assert!(lines[6].starts_with("unknown"));
        assert!(lines[7].starts_with("total"));
        assert!(lines[7].ends_with(" 4"));
    }

    #[test]
    fn test_bar_chart_contains_labels_and_values() {
        let chart = render_bar_chart(
            "Employees by gender",
            &[("female".to_string(), 3), ("male".to_string(), 7)],
        );
        assert!(chart.contains("Employees by gender"));
        assert!(chart.contains("female"));
        assert!(chart.contains("male"));
        assert!(chart.contains('7'));
        assert_eq!(chart.lines().count(), CHART_HEIGHT as usize);
    }

    #[test]
    fn test_grouped_chart_hides_empty_unknown() {
        let scheme = BracketScheme::canonical();
        let empty: Vec<crate::census::CategorizedRecord> = Vec::new();
        let chart = render_grouped_chart(CROSSTAB_TITLE, &summarize(&empty, &scheme));
        assert!(chart.contains("older_70"));
        assert!(!chart.contains(UNKNOWN));

        let chart = render_grouped_chart(CROSSTAB_TITLE, &summary());
        assert!(chart.contains(UNKNOWN));
    }

    #[test]
    fn test_report_includes_every_section() {
        let report = render_report(&summary());
        for title in [GENDER_TITLE, BRACKET_TITLE, CROSSTAB_TITLE] {
            assert!(report.matches(title).count() >= 2, "missing chart or table for {}", title);
        }
    }
}
