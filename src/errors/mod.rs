use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

/// Fault raised by a storage gateway while persisting or reading records.
#[derive(Debug)]
pub enum StorageError {
    Database(sqlx::Error),
    Migration(sqlx::migrate::MigrateError),
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Database(err) => write!(f, "Database Error: {}", err),
            StorageError::Migration(err) => write!(f, "Migration Error: {}", err),
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Database(err) => Some(err),
            StorageError::Migration(err) => Some(err),
            StorageError::Unavailable(_) => None,
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err)
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::Migration(err)
    }
}

/// Missing or malformed environment setting.
#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {}: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Outcome of a failed employee use case. Callers only ever see the status
/// code; the body is always empty.
#[derive(Debug)]
pub enum AppError {
    Storage(StorageError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn storage_error_renders_as_empty_500() {
        let err = AppError::from(StorageError::Unavailable("connection refused".to_string()));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: "many".to_string() };
        assert_eq!(err.to_string(), "invalid value for DB_MAX_CONNECTIONS: \"many\"");
        assert_eq!(ConfigError::Missing("DATABASE_URL").to_string(), "DATABASE_URL must be set");
    }
}
