//! Error types for the scoring engine

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while computing scores.
///
/// Missing records are not errors. Only a failing record fetch or a stored
/// record the extractor cannot interpret aborts a computation.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("record store error: {0}")]
    Store(#[from] StoreError),

    #[error("malformed stored record: {0}")]
    MalformedRecord(String),
}
