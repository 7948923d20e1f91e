use std::path::PathBuf;

use qualpal_core::{ConfigError, ParseColorError, QualpalError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read request file {path}: {source}")]
    ReadRequest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid request file {path}: {source}")]
    ParseRequest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Qualpal(#[from] QualpalError),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Qualpal(e.into())
    }
}

impl From<ParseColorError> for AppError {
    fn from(e: ParseColorError) -> Self {
        AppError::Qualpal(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualpal_core::ErrorKind;

    #[test]
    fn test_config_error_converts() {
        let err = AppError::from(ConfigError::ZeroPoolSize);
        match err {
            AppError::Qualpal(inner) => assert_eq!(inner.kind(), ErrorKind::Configuration),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_qualpal_error_message_is_transparent() {
        let err = AppError::from(QualpalError::NotEnoughCandidates {
            requested: 9,
            available: 4,
        });
        assert_eq!(err.to_string(), "requested 9 colors but only 4 are available");
    }

    #[test]
    fn test_read_error_names_path() {
        let err = AppError::ReadRequest {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.yaml"));
    }
}
