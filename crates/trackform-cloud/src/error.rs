//! Reconciliation error types

use std::num::ParseIntError;
use thiserror::Error;

use crate::schema::SchemaError;

/// Boxed error returned by a remote client
pub type RemoteError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by resource lifecycle operations
#[derive(Error, Debug)]
pub enum CloudError {
    /// The stored identity is not a base-10 integer. The record is corrupt;
    /// the remote side was never contacted.
    #[error("conversion of id failed: {id:?} is not a valid identifier: {source}")]
    InvalidIdentifier {
        id: String,
        #[source]
        source: ParseIntError,
    },

    #[error("resource has no identity; it was never created or imported")]
    MissingIdentifier,

    /// The remote client returned an error. `context` names the lifecycle phase.
    #[error("{context}: {source}")]
    RemoteCall {
        context: &'static str,
        #[source]
        source: RemoteError,
    },

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl CloudError {
    /// Wrap a remote client error with the phase it happened in
    pub fn remote(context: &'static str, source: impl Into<RemoteError>) -> Self {
        CloudError::RemoteCall {
            context,
            source: source.into(),
        }
    }

    /// Whether the host may retry the operation that produced this error
    pub fn is_retryable(&self) -> bool {
        matches!(self, CloudError::RemoteCall { .. })
    }

    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, CloudError::InvalidIdentifier { .. })
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;
