//! Derived metrics for the populated dashboard: week-over-week deltas,
//! summary card values and table rows.
//!
//! Every function here expects rows in fetch order (newest week first).

use api::{JobCategory, RowId, WeeklyJobRow};
use time::Date;

/// Change between the latest week and the one before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekOverWeek {
    pub change: i64,
    /// Percent change rounded to one decimal.
    pub percent: f64,
}

impl WeekOverWeek {
    /// `None` when the previous week was zero.
    pub fn between(current: u32, previous: u32) -> Option<Self> {
        if previous == 0 {
            return None;
        }
        let change = i64::from(current) - i64::from(previous);
        let percent = round_one_decimal(change as f64 / f64::from(previous) * 100.0);
        Some(Self { change, percent })
    }

    pub fn is_increase(&self) -> bool {
        self.change >= 0
    }
}

/// Rounds half away from zero at one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Delta for `category` between `rows[0]` and `rows[1]`, if both exist and
/// the earlier week is non-zero.
pub fn week_over_week(rows: &[WeeklyJobRow], category: JobCategory) -> Option<WeekOverWeek> {
    match rows {
        [latest, previous, ..] => {
            WeekOverWeek::between(category.count(latest), category.count(previous))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub category: JobCategory,
    pub value: u32,
    pub change: Option<WeekOverWeek>,
    pub week: Date,
}

/// One card per category for the latest week. Empty when there are no rows.
pub fn summary_cards(rows: &[WeeklyJobRow]) -> Vec<SummaryCard> {
    let Some(latest) = rows.first() else {
        return Vec::new();
    };

    JobCategory::ALL
        .iter()
        .map(|&category| SummaryCard {
            category,
            value: category.count(latest),
            change: week_over_week(rows, category),
            week: latest.week_starting,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: RowId,
    pub week: Date,
    pub data_engineer: u32,
    pub junior: u32,
    pub senior: u32,
    pub sum: u64,
    pub is_latest: bool,
}

/// Table rows in fetch order, newest highlighted.
pub fn table_rows(rows: &[WeeklyJobRow]) -> Vec<TableRow> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| TableRow {
            id: row.id.clone(),
            week: row.week_starting,
            data_engineer: row.data_engineer,
            junior: row.junior_data_engineer,
            senior: row.senior_data_engineer,
            sum: row.total(),
            is_latest: idx == 0,
        })
        .collect()
}
