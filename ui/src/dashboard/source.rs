//! Where the dashboard gets its rows from.

use api::{
    ConfigError, HistoryBound, LoadError, RowQuery, RowSource, RowStoreClient, RowStoreConfig,
    WeeklyJobRow,
};
use once_cell::sync::OnceCell;
use time::Date;

static STORE_CONFIG: OnceCell<Result<RowStoreConfig, ConfigError>> = OnceCell::new();

/// Platforms resolve their configuration before launch and register it here.
/// Only the first registration counts.
pub fn register_config(config: Result<RowStoreConfig, ConfigError>) {
    let _ = STORE_CONFIG.set(config);
}

/// The configured row store, or the reason it couldn't be configured.
/// A misconfigured source fails every load with the configuration message.
#[derive(Debug, Clone)]
pub enum DashboardSource {
    Store(RowStoreClient),
    Misconfigured(ConfigError),
}

impl DashboardSource {
    pub fn from_config(config: Result<RowStoreConfig, ConfigError>) -> Self {
        match config {
            Ok(config) => Self::Store(RowStoreClient::new(config)),
            Err(err) => Self::Misconfigured(err),
        }
    }

    /// Build from whatever the platform registered.
    pub fn registered() -> Self {
        let config = STORE_CONFIG
            .get()
            .cloned()
            .unwrap_or_else(RowStoreConfig::from_env);
        Self::from_config(config)
    }

    pub fn bound(&self) -> HistoryBound {
        match self {
            Self::Store(client) => client.config().bound,
            Self::Misconfigured(_) => HistoryBound::default(),
        }
    }

    pub fn query_for(&self, today: Date) -> RowQuery {
        match self {
            Self::Store(client) => client.query_for(today),
            Self::Misconfigured(_) => {
                RowQuery::new(api::config::DEFAULT_LOCATION, HistoryBound::default(), today)
            }
        }
    }
}

impl RowSource for DashboardSource {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<WeeklyJobRow>, LoadError> {
        match self {
            Self::Store(client) => client.fetch_rows(query).await,
            Self::Misconfigured(err) => Err(LoadError::Config(err.clone())),
        }
    }
}
