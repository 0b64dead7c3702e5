//! Weekly job-count rows as stored by the ingestion job.

use std::fmt;

use serde::{Deserialize, Deserializer};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

/// Row primary key. The store hands out integers, but text keys are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// One (location, week) snapshot. Read-only once written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeeklyJobRow {
    pub id: RowId,
    pub location: String,
    #[serde(deserialize_with = "deserialize_week")]
    pub week_starting: Date,
    pub data_engineer: u32,
    pub junior_data_engineer: u32,
    pub senior_data_engineer: u32,
    #[serde(deserialize_with = "deserialize_collected_at")]
    pub collected_at: OffsetDateTime,
}

impl WeeklyJobRow {
    /// Sum of the three category counts.
    pub fn total(&self) -> u64 {
        JobCategory::ALL
            .iter()
            .map(|category| u64::from(category.count(self)))
            .sum()
    }
}

/// The three search terms tracked per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobCategory {
    DataEngineer,
    JuniorDataEngineer,
    SeniorDataEngineer,
}

impl JobCategory {
    pub const ALL: [JobCategory; 3] = [
        JobCategory::DataEngineer,
        JobCategory::JuniorDataEngineer,
        JobCategory::SeniorDataEngineer,
    ];

    pub fn count(self, row: &WeeklyJobRow) -> u32 {
        match self {
            Self::DataEngineer => row.data_engineer,
            Self::JuniorDataEngineer => row.junior_data_engineer,
            Self::SeniorDataEngineer => row.senior_data_engineer,
        }
    }
}

pub fn parse_week(raw: &str) -> Result<Date, time::error::Parse> {
    // Timestamps are accepted too; only the date part matters.
    let day = raw.get(..10).unwrap_or(raw);
    Date::parse(day, &format_description!("[year]-[month]-[day]"))
}

/// RFC 3339, or a naive ISO timestamp taken as UTC.
pub fn parse_collected_at(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(raw, &Rfc3339).or_else(|_| {
        PrimitiveDateTime::parse(
            raw,
            &format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
            ),
        )
        .map(PrimitiveDateTime::assume_utc)
    })
}

fn deserialize_week<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_week(&raw).map_err(|err| serde::de::Error::custom(format!("week_starting {raw:?}: {err}")))
}

fn deserialize_collected_at<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_collected_at(&raw)
        .map_err(|err| serde::de::Error::custom(format!("collected_at {raw:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn decodes_a_row_store_payload() {
        let rows: Vec<WeeklyJobRow> = serde_json::from_str(
            r#"[{
                "id": 42,
                "location": "Berlin, Germany",
                "week_starting": "2024-01-08",
                "data_engineer": 237,
                "junior_data_engineer": 10,
                "senior_data_engineer": 191,
                "collected_at": "2024-01-08T09:00:12.5+00:00"
            }]"#,
        )
        .unwrap();

        let row = &rows[0];
        assert_eq!(row.id, RowId::Int(42));
        assert_eq!(row.week_starting, date!(2024 - 01 - 08));
        assert_eq!(row.collected_at, datetime!(2024-01-08 09:00:12.5 UTC));
        assert_eq!(row.total(), 438);
    }

    #[test]
    fn naive_timestamps_are_taken_as_utc() {
        let parsed = parse_collected_at("2024-01-08T09:00:12.345678").unwrap();
        assert_eq!(parsed, datetime!(2024-01-08 09:00:12.345678 UTC));

        let whole_seconds = parse_collected_at("2024-01-08T09:00:12").unwrap();
        assert_eq!(whole_seconds, datetime!(2024-01-08 09:00:12 UTC));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let result: Result<WeeklyJobRow, _> = serde_json::from_str(
            r#"{
                "id": "row-1",
                "location": "Berlin, Germany",
                "week_starting": "2024-01-08",
                "data_engineer": -5,
                "junior_data_engineer": 10,
                "senior_data_engineer": 191,
                "collected_at": "2024-01-08T09:00:00Z"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn week_accepts_a_full_timestamp() {
        assert_eq!(parse_week("2024-01-08T00:00:00+00:00").unwrap(), date!(2024 - 01 - 08));
        assert!(parse_week("08.01.2024").is_err());
    }

    #[test]
    fn categories_read_their_own_column() {
        let row: WeeklyJobRow = serde_json::from_str(
            r#"{
                "id": "a",
                "location": "Berlin, Germany",
                "week_starting": "2024-01-01",
                "data_engineer": 45,
                "junior_data_engineer": 18,
                "senior_data_engineer": 9,
                "collected_at": "2024-01-01T09:00:00Z"
            }"#,
        )
        .unwrap();

        let counts: Vec<u32> = JobCategory::ALL.iter().map(|c| c.count(&row)).collect();
        assert_eq!(counts, vec![45, 18, 9]);
        assert_eq!(row.id.to_string(), "a");
    }
}
