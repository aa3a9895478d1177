//! Time-of-day slots and offsets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;

/// Errors from building or parsing clock values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("hour {0} is out of range (0-23)")]
    HourOutOfRange(u32),
    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(u32),
    #[error("invalid clock text {0:?}, expected H:MM")]
    Malformed(String),
}

/// A wall-clock minute of the game day, `00:00` to `23:59`.
///
/// Ordering follows the day: `06:30 < 07:00 < 23:59`. Serialized as `"HH:MM"`
/// text so it can be used as a map key in JSON and TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Create a clock time, rejecting hours past 23 and minutes past 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ClockError> {
        if u32::from(hour) >= HOURS_PER_DAY {
            return Err(ClockError::HourOutOfRange(hour.into()));
        }
        if u32::from(minute) >= MINUTES_PER_HOUR {
            return Err(ClockError::MinuteOutOfRange(minute.into()));
        }
        Ok(Self { hour, minute })
    }

    /// Build from minutes since midnight, wrapping whole days away.
    pub fn from_minutes_of_day(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: (minutes / MINUTES_PER_HOUR) as u8,
            minute: (minutes % MINUTES_PER_HOUR) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_of_day(&self) -> u32 {
        u32::from(self.hour) * MINUTES_PER_HOUR + u32::from(self.minute)
    }

    /// The slot `offset` later, wrapping past midnight.
    pub fn advanced_by(&self, offset: ClockOffset) -> Self {
        let total = u64::from(self.minutes_of_day()) + offset.total_minutes();
        Self::from_minutes_of_day((total % u64::from(MINUTES_PER_DAY)) as u32)
    }

    /// The following minute; `23:59` rolls over to `00:00`.
    pub fn next_minute(&self) -> Self {
        Self::from_minutes_of_day(self.minutes_of_day() + 1)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = split_clock_text(s)?;
        if hour >= HOURS_PER_DAY {
            return Err(ClockError::HourOutOfRange(hour));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// A delay of `hours` and `minutes`.
///
/// Neither field is normalized: `0:90` and `1:30` are the same delay once
/// applied to a [`ClockTime`]. Text is always `H:MM` with minutes below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockOffset {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockOffset {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn minutes(minutes: u32) -> Self {
        Self { hours: 0, minutes }
    }

    pub fn hours(hours: u32) -> Self {
        Self { hours, minutes: 0 }
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * u64::from(MINUTES_PER_HOUR) + u64::from(self.minutes)
    }
}

impl std::fmt::Display for ClockOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.total_minutes();
        let per_hour = u64::from(MINUTES_PER_HOUR);
        write!(f, "{}:{:02}", total / per_hour, total % per_hour)
    }
}

impl FromStr for ClockOffset {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = split_clock_text(s)?;
        Ok(Self { hours, minutes })
    }
}

impl TryFrom<String> for ClockOffset {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockOffset> for String {
    fn from(value: ClockOffset) -> Self {
        value.to_string()
    }
}

/// Split `H:MM` text. Hours are one or more digits, minutes exactly two.
fn split_clock_text(s: &str) -> Result<(u32, u32), ClockError> {
    let malformed = || ClockError::Malformed(s.to_string());
    let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || !all_digits(minutes) || minutes.len() != 2 {
        return Err(malformed());
    }
    let hours = hours.parse::<u32>().map_err(|_| malformed())?;
    let minutes = minutes.parse::<u32>().map_err(|_| malformed())?;
    if minutes >= MINUTES_PER_HOUR {
        return Err(ClockError::MinuteOutOfRange(minutes));
    }
    Ok((hours, minutes))
}
