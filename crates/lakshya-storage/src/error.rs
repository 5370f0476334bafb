use thiserror::Error;

use lakshya_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document at key {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode document for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("refusing to store invalid value: {0}")]
    Invalid(#[from] CoreError),

    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}
