use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ValidationError};

/// Non-negative execution duration in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceDuration(u64);

impl TraceDuration {
    pub const ZERO: TraceDuration = TraceDuration(0);

    /// Validate a backend duration value
    pub fn from_millis(ms: i64) -> Result<Self> {
        u64::try_from(ms)
            .map(Self)
            .map_err(|_| ValidationError::NegativeDuration(ms))
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Duration as a signed millisecond count, saturating at `i64::MAX`
    pub fn as_millis_i64(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

impl From<u64> for TraceDuration {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}

impl fmt::Display for TraceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
