//! Numeric remote identifiers
//!
//! Identity travels through the host as an opaque string. Providers whose
//! remote API keys objects by integer decode it once per operation with
//! [`NumericId::parse`].

use crate::error::{CloudError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remote-assigned integer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericId(i64);

impl NumericId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Decode a stored identity string
    pub fn parse(raw: &str) -> Result<Self> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|source| CloudError::InvalidIdentifier {
                id: raw.to_string(),
                source,
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Zero and negative ids denote an object the remote side does not have
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl FromStr for NumericId {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NumericId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NumericId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
