//! Read-only access to the weekly job-count rows written by the ingestion job.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;

pub use client::{RowSource, RowStoreClient};
pub use config::RowStoreConfig;
pub use error::{ConfigError, LoadError};
pub use model::{JobCategory, RowId, WeeklyJobRow};
pub use query::{HistoryBound, RowQuery};
