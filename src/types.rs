//! Shared types for password generation.
//!
//! Contains the request structures, the process-wide defaults, and the
//! error type used throughout the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised for malformed generation requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid length range: min {min} is greater than max {max}")]
    InvalidRange { min: usize, max: usize },
}

/// Requested password length: either an exact value or an inclusive range
/// the final length is drawn from uniformly at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Fixed(usize),
    Range { min: usize, max: usize },
}

impl Default for Length {
    fn default() -> Self {
        DEFAULTS.length
    }
}

impl From<usize> for Length {
    fn from(n: usize) -> Self {
        Length::Fixed(n)
    }
}

impl From<(usize, usize)> for Length {
    fn from((min, max): (usize, usize)) -> Self {
        Length::Range { min, max }
    }
}

/// Per-class character count overrides.
///
/// Absent fields fall back to [`DEFAULTS`]. Requested counts are clamped to
/// the length still unallocated when their class comes up, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub specials: Option<usize>,
    pub nums: Option<usize>,
    pub uppers: Option<usize>,
    pub lowers: Option<usize>,
}

/// Process-wide generation defaults. Read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub length: Length,
    pub specials: usize,
    pub nums: usize,
    pub uppers: usize,
    pub lowers: usize,
}

pub const DEFAULTS: Defaults = Defaults {
    length: Length::Range { min: 7, max: 10 },
    specials: 1,
    nums: 2,
    uppers: 2,
    lowers: 3,
};
