//! Clock time handling for timetable cells.
//!
//! The timetable page prints arrival times as 12-hour clock strings such as
//! "2:15am" or "11:04pm". This module parses them into a naive hour:minute
//! value with no date or timezone attached.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when parsing an invalid clock string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {text:?}: {reason}")]
pub struct TimeError {
    text: String,
    reason: &'static str,
}

impl TimeError {
    fn new(text: &str, reason: &'static str) -> Self {
        Self {
            text: text.to_string(),
            reason,
        }
    }

    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A naive hour:minute time of day.
///
/// Ordering is chronological within a single day: an earlier hour is always
/// less, and equal hours compare by minute.
///
/// # Examples
///
/// ```
/// use caltrain_arrivals::domain::ClockTime;
///
/// let t = ClockTime::parse_ampm("2:15pm").unwrap();
/// assert_eq!(t.hour(), 14);
/// assert_eq!(t.minute(), 15);
/// assert_eq!(t.to_string(), "14:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a time from 24-hour components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new(&format!("{hour}:{minute:02}"), "out of range"))
    }

    /// Create a time from a chrono time, dropping seconds.
    pub fn from_naive(time: NaiveTime) -> Self {
        // hour() and minute() are always in range
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    /// Parse a 12-hour clock string of the form `H:MMam`, `HH:MMam`, `H:MMpm`
    /// or `HH:MMpm`.
    ///
    /// The suffix is case-sensitive. The hour must be 1-12; `12:xxam` is just
    /// after midnight and `12:xxpm` is just after noon.
    ///
    /// # Examples
    ///
    /// ```
    /// use caltrain_arrivals::domain::ClockTime;
    ///
    /// assert_eq!(ClockTime::parse_ampm("9:05am").unwrap().to_string(), "9:05");
    /// assert_eq!(ClockTime::parse_ampm("12:30am").unwrap().to_string(), "0:30");
    /// assert_eq!(ClockTime::parse_ampm("12:30pm").unwrap().to_string(), "12:30");
    ///
    /// assert!(ClockTime::parse_ampm("9:05").is_err());
    /// assert!(ClockTime::parse_ampm("9:05AM").is_err());
    /// assert!(ClockTime::parse_ampm("13:05pm").is_err());
    /// ```
    pub fn parse_ampm(s: &str) -> Result<Self, TimeError> {
        let (clock, pm) = if let Some(clock) = s.strip_suffix("am") {
            (clock, false)
        } else if let Some(clock) = s.strip_suffix("pm") {
            (clock, true)
        } else {
            return Err(TimeError::new(s, "expected am or pm suffix"));
        };

        let (hour, minute) = clock
            .split_once(':')
            .ok_or_else(|| TimeError::new(s, "expected colon"))?;

        if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new(s, "invalid hour digits"));
        }
        if minute.len() != 2 || !minute.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new(s, "invalid minute digits"));
        }

        let hour: u32 = hour
            .parse()
            .map_err(|_| TimeError::new(s, "invalid hour digits"))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| TimeError::new(s, "invalid minute digits"))?;

        if !(1..=12).contains(&hour) {
            return Err(TimeError::new(s, "hour must be 1-12"));
        }
        if minute > 59 {
            return Err(TimeError::new(s, "minute must be 0-59"));
        }

        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };

        Self::from_hm(hour, minute).map_err(|_| TimeError::new(s, "invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying chrono time.
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// True iff `self` is at the same minute as `other` or later in the day.
    pub fn is_after_or_equal(&self, other: &ClockTime) -> bool {
        self.hour() > other.hour()
            || (self.hour() == other.hour() && self.minute() >= other.minute())
    }

    /// Minutes from `self` forward to `later`, wrapping past midnight.
    ///
    /// ```
    /// use caltrain_arrivals::domain::ClockTime;
    ///
    /// let a = ClockTime::from_hm(23, 50).unwrap();
    /// let b = ClockTime::from_hm(0, 20).unwrap();
    /// assert_eq!(a.minutes_until(&b), 30);
    /// assert_eq!(b.minutes_until(&a), 23 * 60 + 30);
    /// ```
    pub fn minutes_until(&self, later: &ClockTime) -> i64 {
        let delta = later.0.signed_duration_since(self.0).num_minutes();
        delta.rem_euclid(MINUTES_PER_DAY)
    }

    /// The time `duration` later, wrapping past midnight.
    pub fn wrapping_add(&self, duration: Duration) -> Self {
        let (time, _) = self.0.overflowing_add_signed(duration);
        Self::from_naive(time)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_ampm(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}
