//! Trips between two stations on a single train.

use crate::domain::{ClockTime, Stop, Train};

/// Boarding at one stop and alighting at a later one on the same train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip<'a> {
    pub train: &'a Train,
    pub departure: &'a Stop,
    pub arrival: &'a Stop,
}

impl Trip<'_> {
    /// Ride time in minutes. Trips running past midnight wrap.
    pub fn duration_minutes(&self) -> i64 {
        self.departure.time.minutes_until(&self.arrival.time)
    }
}

/// Find trips from `from` to `to` leaving at or after `after`, soonest
/// departure first.
///
/// Each train contributes at most one trip: its first qualifying stop at
/// `from`, and the first stop at `to` after it in route order. Trains that
/// reach `to` only before `from` are running the other way and are skipped.
pub fn next_trips<'a, I>(trains: I, from: &str, to: &str, after: ClockTime) -> Vec<Trip<'a>>
where
    I: IntoIterator<Item = &'a Train>,
{
    let mut trips: Vec<Trip<'a>> = trains
        .into_iter()
        .filter_map(|train| {
            let stops = train.stops();
            let board = stops
                .iter()
                .position(|s| s.station.name == from && s.time.is_after_or_equal(&after))?;
            let arrival = stops[board + 1..].iter().find(|s| s.station.name == to)?;
            Some(Trip {
                train,
                departure: &stops[board],
                arrival,
            })
        })
        .collect();

    trips.sort_by(|a, b| a.departure.time.cmp(&b.departure.time));
    trips
}
