use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// A whole-second duration written as `m:ss` on score sheets.
///
/// Minutes are not capped at two digits, so every value prints in a form
/// that parses back to itself.
///
/// Completion times and time caps are both expressed this way, so ordering
/// is plain ordering on the total number of seconds.
///
/// ```
/// use scoring::models::ClockTime;
///
/// let time: ClockTime = "10:30".parse().unwrap();
/// assert_eq!(time.as_seconds(), 630);
/// assert_eq!(time.to_string(), "10:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime(0);

    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    /// `None` when the total does not fit in whole seconds.
    pub fn from_minutes_seconds(minutes: u32, seconds: u32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(|total| total.checked_add(seconds))
            .map(Self)
    }

    pub fn as_seconds(&self) -> u32 {
        self.0
    }

    pub fn minutes(&self) -> u32 {
        self.0 / 60
    }

    pub fn seconds(&self) -> u32 {
        self.0 % 60
    }

    /// Strictly later than `cap`. Finishing exactly on the cap is allowed.
    pub fn exceeds(&self, cap: ClockTime) -> bool {
        self.0 > cap.0
    }
}

impl FromStr for ClockTime {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScoringError::InvalidTime(s.to_string());

        let (minutes, seconds) = s.trim().split_once(':').ok_or_else(invalid)?;

        let minutes_ok = !minutes.is_empty() && minutes.bytes().all(|b| b.is_ascii_digit());
        let seconds_ok = seconds.len() == 2 && seconds.bytes().all(|b| b.is_ascii_digit());
        if !minutes_ok || !seconds_ok {
            return Err(invalid());
        }

        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u32 = seconds.parse().map_err(|_| invalid())?;
        if seconds >= 60 {
            return Err(invalid());
        }

        Self::from_minutes_seconds(minutes, seconds).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}
