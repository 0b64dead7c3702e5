//! Error types for configuration and row store reads.

use thiserror::Error;

/// Problems assembling a [`crate::config::RowStoreConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set to reach the row store")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("couldn't read config file: {0}")]
    File(String),
}

/// Everything that can go wrong while loading weekly rows.
///
/// The `Display` text is what ends up on the error panel, so keep it readable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("couldn't reach the row store: {0}")]
    Transport(String),
    #[error("row store returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("couldn't decode weekly rows: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_is_human_readable() {
        let err = LoadError::Status {
            status: 401,
            message: "Invalid API key".into(),
        };
        assert_eq!(err.to_string(), "row store returned 401: Invalid API key");
    }

    #[test]
    fn config_errors_wrap_into_load_errors() {
        let err: LoadError = ConfigError::Missing("SUPABASE_URL").into();
        assert_eq!(
            err.to_string(),
            "configuration error: SUPABASE_URL must be set to reach the row store"
        );
    }
}
