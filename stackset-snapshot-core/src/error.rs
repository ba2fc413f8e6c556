//! Error types for snapshot collection.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("CloudFormation API error: {0}")]
    Api(String),
    #[error("unusable API response: {0}")]
    Response(String),
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
