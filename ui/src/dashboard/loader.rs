//! One load of weekly rows, caught at the boundary and turned into display state.

use api::{RowQuery, RowSource, WeeklyJobRow};
use time::{Date, OffsetDateTime};
use tracing::{error, info};

use crate::core::view_state::LoadFailure;

/// Current UTC date; the history bound is resolved against this once per load.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Run `query` against `source`. Rows come back newest week first regardless
/// of how the source ordered them.
pub async fn load_rows<S: RowSource>(
    source: &S,
    query: &RowQuery,
) -> Result<Vec<WeeklyJobRow>, LoadFailure> {
    match source.fetch_rows(query).await {
        Ok(mut rows) => {
            rows.sort_by(|a, b| b.week_starting.cmp(&a.week_starting));
            info!(rows = rows.len(), location = %query.location, "loaded weekly rows");
            Ok(rows)
        }
        Err(err) => {
            error!(error = %err, "loading weekly rows failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use api::{HistoryBound, LoadError};
    use futures::executor::block_on;
    use time::macros::date;

    use super::*;
    use crate::core::metrics::fixtures::row;

    struct StaticRows {
        rows: Vec<WeeklyJobRow>,
        seen: RefCell<Vec<RowQuery>>,
    }

    impl RowSource for StaticRows {
        async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<WeeklyJobRow>, LoadError> {
            self.seen.borrow_mut().push(query.clone());
            Ok(self.rows.clone())
        }
    }

    struct Failing {
        calls: Cell<u32>,
    }

    impl RowSource for Failing {
        async fn fetch_rows(&self, _query: &RowQuery) -> Result<Vec<WeeklyJobRow>, LoadError> {
            self.calls.set(self.calls.get() + 1);
            Err(LoadError::Status {
                status: 503,
                message: "Service Unavailable".into(),
            })
        }
    }

    fn query() -> RowQuery {
        RowQuery::new("Berlin, Germany", HistoryBound::SinceOneYear, date!(2024 - 02 - 05))
    }

    #[test]
    fn rows_are_returned_newest_first() {
        let source = StaticRows {
            rows: vec![
                row(date!(2024 - 01 - 01), 1, 0, 0),
                row(date!(2024 - 01 - 15), 3, 0, 0),
                row(date!(2024 - 01 - 08), 2, 0, 0),
            ],
            seen: RefCell::new(Vec::new()),
        };

        let rows = block_on(load_rows(&source, &query())).unwrap();
        let weeks: Vec<_> = rows.iter().map(|r| r.week_starting).collect();
        assert_eq!(
            weeks,
            vec![date!(2024 - 01 - 15), date!(2024 - 01 - 08), date!(2024 - 01 - 01)]
        );
        assert_eq!(source.seen.borrow().as_slice(), &[query()]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let source = StaticRows {
            rows: Vec::new(),
            seen: RefCell::new(Vec::new()),
        };
        assert_eq!(block_on(load_rows(&source, &query())), Ok(Vec::new()));
    }

    #[test]
    fn failures_carry_the_message_and_each_retry_reissues_the_read() {
        let source = Failing {
            calls: Cell::new(0),
        };

        let first = block_on(load_rows(&source, &query())).unwrap_err();
        assert_eq!(first.message, "row store returned 503: Service Unavailable");

        let _ = block_on(load_rows(&source, &query()));
        assert_eq!(source.calls.get(), 2);
    }
}
