//! Store Errors
//!
//! Everything that can go wrong talking to the remote food store.

use thiserror::Error;

/// Transport-level failure of a store operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("store responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("invalid store url: {0}")]
    Url(String),
}

impl StoreError {
    /// True when the store answered but rejected the request
    pub fn is_status(&self) -> bool {
        matches!(self, StoreError::Status(_))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
