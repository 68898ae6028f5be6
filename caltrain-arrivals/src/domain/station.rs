//! Station type.

use std::fmt;

/// A station as printed on one timetable row.
///
/// Stations are rebuilt for every row they appear on and are not interned;
/// two rows naming the same station in the same zone compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    /// Display name, e.g. "San Jose Diridon".
    pub name: String,
    /// Fare zone.
    pub zone: u32,
}

impl Station {
    /// Creates a new station.
    pub fn new(name: impl Into<String>, zone: u32) -> Self {
        Self {
            name: name.into(),
            zone,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
