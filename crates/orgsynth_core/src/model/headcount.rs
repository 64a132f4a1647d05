//! Validated target headcount.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Smallest accepted headcount: the root alone.
pub const MIN_HEADCOUNT: u32 = 1;
/// Largest accepted headcount.
pub const MAX_HEADCOUNT: u32 = 20_000;

/// Number of employees to synthesize, always within
/// `MIN_HEADCOUNT..=MAX_HEADCOUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Headcount(u32);

impl Headcount {
    /// Headcount used when the caller does not provide one.
    pub const DEFAULT: Headcount = Headcount(1000);

    pub fn new(value: u32) -> Result<Self, HeadcountError> {
        if (MIN_HEADCOUNT..=MAX_HEADCOUNT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(HeadcountError::OutOfRange(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Headcount as a `usize`, for sizing collections.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for Headcount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Headcount {
    type Error = HeadcountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Headcount> for u32 {
    fn from(value: Headcount) -> Self {
        value.0
    }
}

impl Display for Headcount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Headcount validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadcountError {
    OutOfRange(u32),
}

impl Display for HeadcountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "headcount must be between {MIN_HEADCOUNT} and {MAX_HEADCOUNT}, got {value}"
            ),
        }
    }
}

impl Error for HeadcountError {}
