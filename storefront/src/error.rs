use thiserror::Error;

/// Failures a store action can run into while retrieving data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Order source error: {0}")]
    Source(String),
    #[error("Request cancelled")]
    Cancelled,
}
