use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Malformed embedding payload for bill {bill_id}: {source}")]
    EmbeddingPayload {
        bill_id: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_error_conversion() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, Error::Sqlite(_)));
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_embedding_payload_message_names_bill() {
        let source = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        let err = Error::EmbeddingPayload {
            bill_id: "15432-07".to_string(),
            source,
        };
        assert!(err.to_string().contains("15432-07"));
    }
}
