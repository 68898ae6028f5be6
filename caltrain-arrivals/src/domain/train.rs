//! Trains and their stops.
//!
//! A `Train` is one column of a direction table. Its stops are kept in the
//! table's row order, which is the physical order along the route rather
//! than time order.

use std::fmt;

use super::{ClockTime, ServiceType, Station};

/// Direction of travel; each direction has its own table on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northbound,
    Southbound,
}

impl Direction {
    /// Lowercase display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Northbound => "northbound",
            Direction::Southbound => "southbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled arrival of a train at a station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stop {
    pub station: Station,
    pub time: ClockTime,
}

impl Stop {
    pub fn new(station: Station, time: ClockTime) -> Self {
        Self { station, time }
    }
}

/// A train and its ordered stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    /// Train number; unique within one direction's table.
    pub number: u32,
    pub direction: Direction,
    pub service: ServiceType,
    stops: Vec<Stop>,
}

impl Train {
    /// Creates a train with no stops.
    pub fn new(number: u32, direction: Direction, service: ServiceType) -> Self {
        Self {
            number,
            direction,
            service,
            stops: Vec::new(),
        }
    }

    /// Builder-style helper that appends a stop.
    #[cfg(test)]
    pub fn with_stop(mut self, stop: Stop) -> Self {
        self.stops.push(stop);
        self
    }

    /// Appends a stop after all existing stops.
    pub fn push_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Stops in route order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stops at the named station, in route order.
    pub fn stops_at(&self, station_name: &str) -> impl Iterator<Item = &Stop> {
        self.stops
            .iter()
            .filter(move |stop| stop.station.name == station_name)
    }

    /// Returns true if the train calls at the named station at all.
    pub fn calls_at(&self, station_name: &str) -> bool {
        self.stops_at(station_name).next().is_some()
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train {} ({}, {})",
            self.number, self.direction, self.service
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(name: &str, zone: u32, hour: u32, minute: u32) -> Stop {
        Stop::new(
            Station::new(name, zone),
            ClockTime::from_hm(hour, minute).unwrap(),
        )
    }

    #[test]
    fn stops_keep_insertion_order() {
        let mut train = Train::new(101, Direction::Northbound, ServiceType::Local);
        train.push_stop(stop("Gilroy", 6, 5, 0));
        train.push_stop(stop("San Martin", 6, 5, 10));
        train.push_stop(stop("Morgan Hill", 5, 5, 16));

        let names: Vec<_> = train.stops().iter().map(|s| s.station.name.as_str()).collect();
        assert_eq!(names, ["Gilroy", "San Martin", "Morgan Hill"]);
    }

    #[test]
    fn stops_at_filters_by_name() {
        let train = Train::new(101, Direction::Northbound, ServiceType::Local)
            .with_stop(stop("Gilroy", 6, 5, 0))
            .with_stop(stop("Tamien", 4, 5, 40));

        assert!(train.calls_at("Gilroy"));
        assert!(!train.calls_at("gilroy"));
        assert_eq!(train.stops_at("Tamien").count(), 1);
    }

    #[test]
    fn stop_equality() {
        assert_eq!(stop("Gilroy", 6, 2, 15), stop("Gilroy", 6, 2, 15));
        assert_ne!(stop("Gilroy", 6, 2, 15), stop("Gilroy", 6, 2, 16));
        assert_ne!(stop("Gilroy", 6, 2, 15), stop("Gilroy", 5, 2, 15));
    }

    #[test]
    fn display() {
        let train = Train::new(102, Direction::Southbound, ServiceType::Bullet);
        assert_eq!(train.to_string(), "Train 102 (southbound, bullet)");
    }
}
