//! The single read the dashboard issues, rendered as PostgREST query parameters.

use time::{macros::format_description, Date, Month};

/// How much history a load covers. Exactly one strategy applies per load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryBound {
    /// Rows whose `week_starting` is on or after the same day one year ago.
    #[default]
    SinceOneYear,
    /// The newest `n` rows.
    LatestWeeks(u32),
}

impl HistoryBound {
    pub const DEFAULT_WEEKS: u32 = 12;

    /// Earliest `week_starting` to include, computed from `today`.
    pub fn earliest_week(&self, today: Date) -> Option<Date> {
        match self {
            Self::SinceOneYear => Some(one_year_before(today)),
            Self::LatestWeeks(_) => None,
        }
    }

    pub fn row_limit(&self) -> Option<u32> {
        match self {
            Self::SinceOneYear => None,
            Self::LatestWeeks(n) => Some(*n),
        }
    }
}

/// Same calendar day in the previous year; Feb 29 becomes Feb 28.
pub fn one_year_before(today: Date) -> Date {
    let year = today.year() - 1;
    Date::from_calendar_date(year, today.month(), today.day())
        .or_else(|_| Date::from_calendar_date(year, Month::February, 28))
        .unwrap_or(today)
}

/// Filter, bound and ordering for one load of weekly rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowQuery {
    pub location: String,
    pub earliest_week: Option<Date>,
    pub limit: Option<u32>,
}

impl RowQuery {
    /// Build the query for `location`, resolving the bound against `today` once.
    pub fn new(location: impl Into<String>, bound: HistoryBound, today: Date) -> Self {
        Self {
            location: location.into(),
            earliest_week: bound.earliest_week(today),
            limit: bound.row_limit(),
        }
    }

    /// Query pairs in request order. Ordering is always newest week first.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("select", "*".to_string()),
            ("location", format!("eq.{}", self.location)),
        ];

        if let Some(earliest) = self.earliest_week {
            params.push(("week_starting", format!("gte.{}", iso_date(earliest))));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params.push(("order", "week_starting.desc".to_string()));
        params
    }
}

pub(crate) fn iso_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn year_bound_filters_on_week_starting() {
        let query = RowQuery::new("Berlin, Germany", HistoryBound::SinceOneYear, date!(2024 - 03 - 15));
        assert_eq!(
            query.to_params(),
            vec![
                ("select", "*".to_string()),
                ("location", "eq.Berlin, Germany".to_string()),
                ("week_starting", "gte.2023-03-15".to_string()),
                ("order", "week_starting.desc".to_string()),
            ]
        );
    }

    #[test]
    fn week_bound_uses_limit_instead_of_date_filter() {
        let query = RowQuery::new("Berlin, Germany", HistoryBound::LatestWeeks(12), date!(2024 - 03 - 15));
        let params = query.to_params();
        assert!(params.iter().all(|(key, _)| *key != "week_starting"));
        assert!(params.contains(&("limit", "12".to_string())));
        assert_eq!(params.last(), Some(&("order", "week_starting.desc".to_string())));
    }

    #[test]
    fn leap_day_falls_back_to_february_28() {
        assert_eq!(one_year_before(date!(2024 - 02 - 29)), date!(2023 - 02 - 28));
        assert_eq!(one_year_before(date!(2025 - 01 - 06)), date!(2024 - 01 - 06));
    }
}
