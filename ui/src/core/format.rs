//! Formatting helpers for presenting counts, deltas and dates.

use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

use super::metrics::WeekOverWeek;

/// Signed delta; zero renders as `+0`.
pub fn format_signed(change: i64) -> String {
    if change >= 0 {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

pub fn format_percent(percent: f64) -> String {
    if percent.is_finite() {
        format!("{percent:.1}%")
    } else {
        "n/a".to_string()
    }
}

/// `+5 (11.1%)`
pub fn format_change(wow: &WeekOverWeek) -> String {
    format!(
        "{} ({})",
        format_signed(wow.change),
        format_percent(wow.percent)
    )
}

/// Compact x-axis label, e.g. `Jan 8, 24`.
pub fn format_week_axis(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none], [year repr:last_two]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Table and badge label, e.g. `Jan 8, 2024`.
pub fn format_week_long(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Footer stamp in UTC, e.g. `Jan 8, 2024, 09:00 AM UTC`.
pub fn format_sync_stamp(stamp: OffsetDateTime) -> String {
    let utc = stamp.to_offset(UtcOffset::UTC);
    match utc.format(&format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
    )) {
        Ok(label) => format!("{label} UTC"),
        Err(_) => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn changes_carry_sign_and_one_decimal() {
        let up = WeekOverWeek {
            change: 5,
            percent: 11.1,
        };
        assert_eq!(format_change(&up), "+5 (11.1%)");

        let down = WeekOverWeek {
            change: -2,
            percent: -6.7,
        };
        assert_eq!(format_change(&down), "-2 (-6.7%)");

        let flat = WeekOverWeek {
            change: 0,
            percent: 0.0,
        };
        assert_eq!(format_change(&flat), "+0 (0.0%)");
    }

    #[test]
    fn non_finite_percent_reads_not_available() {
        assert_eq!(format_percent(f64::INFINITY), "n/a");
        assert_eq!(format_percent(f64::NAN), "n/a");
    }

    #[test]
    fn week_labels() {
        assert_eq!(format_week_axis(date!(2024 - 01 - 08)), "Jan 8, 24");
        assert_eq!(format_week_long(date!(2024 - 12 - 30)), "Dec 30, 2024");
    }

    #[test]
    fn sync_stamp_is_rendered_in_utc() {
        assert_eq!(
            format_sync_stamp(datetime!(2024-01-08 10:05 +01:00)),
            "Jan 8, 2024, 09:05 AM UTC"
        );
        assert_eq!(
            format_sync_stamp(datetime!(2024-01-08 21:30 UTC)),
            "Jan 8, 2024, 09:30 PM UTC"
        );
    }
}
