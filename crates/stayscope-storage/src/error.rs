use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("report not found: {id}")]
    NotFound { id: String },

    #[error("report already exists: {id}")]
    AlreadyExists { id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),
}
