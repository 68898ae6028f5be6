//! Presentation of query results.
//!
//! Text output is one line per result. JSON output uses the DTOs below.

use std::fmt;

use serde::Serialize;

use crate::domain::{Station, Train};
use crate::query::{Arrival, Connection, Trip, Via};

impl fmt::Display for Arrival<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train {} ({}, {}) arrives at {} at {}",
            self.train.number,
            self.train.direction,
            self.train.service,
            self.stop.station.name,
            self.stop.time
        )
    }
}

impl fmt::Display for Trip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train {} ({}, {}) departs {} at {}, arrives {} at {} ({} min)",
            self.train.number,
            self.train.direction,
            self.train.service,
            self.departure.station.name,
            self.departure.time,
            self.arrival.station.name,
            self.arrival.time,
            self.duration_minutes()
        )
    }
}

impl fmt::Display for Connection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.via {
            Via::Train(train) => write!(
                f,
                "Train {} ({}, {}) from {} at {}",
                train.number, train.direction, train.service, self.from.name, self.departure
            )?,
            Via::Walk { after } => write!(
                f,
                "Walk from {} at {} after train {}",
                self.from.name, self.departure, after.number
            )?,
        }
        write!(
            f,
            ", arrives at {} ({} min)",
            self.arrival,
            self.duration_minutes()
        )
    }
}

/// A train in JSON output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TrainInfo {
    pub number: u32,
    pub direction: &'static str,
    pub service: &'static str,
}

impl TrainInfo {
    pub fn from_train(train: &Train) -> Self {
        Self {
            number: train.number,
            direction: train.direction.as_str(),
            service: train.service.as_str(),
        }
    }
}

/// A station in JSON output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationInfo {
    pub name: String,
    pub zone: u32,
}

impl StationInfo {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            zone: station.zone,
        }
    }
}

/// One arrival in JSON output.
#[derive(Debug, Serialize)]
pub struct ArrivalDto {
    pub train: TrainInfo,
    pub station: StationInfo,
    /// 24-hour "H:MM"
    pub time: String,
}

impl ArrivalDto {
    pub fn from_arrival(arrival: &Arrival<'_>) -> Self {
        Self {
            train: TrainInfo::from_train(arrival.train),
            station: StationInfo::from_station(&arrival.stop.station),
            time: arrival.stop.time.to_string(),
        }
    }
}

/// One trip in JSON output.
#[derive(Debug, Serialize)]
pub struct TripDto {
    pub train: TrainInfo,
    pub from: StationInfo,
    pub departure: String,
    pub to: StationInfo,
    pub arrival: String,
    pub duration_mins: i64,
}

impl TripDto {
    pub fn from_trip(trip: &Trip<'_>) -> Self {
        Self {
            train: TrainInfo::from_train(trip.train),
            from: StationInfo::from_station(&trip.departure.station),
            departure: trip.departure.time.to_string(),
            to: StationInfo::from_station(&trip.arrival.station),
            arrival: trip.arrival.time.to_string(),
            duration_mins: trip.duration_minutes(),
        }
    }
}

/// One incoming connection in JSON output.
#[derive(Debug, Serialize)]
pub struct ConnectionDto {
    /// "train" or "walk"
    pub mode: &'static str,
    /// The train ridden, or the one left before walking.
    pub train: TrainInfo,
    pub from: StationInfo,
    pub departure: String,
    pub arrival: String,
    pub duration_mins: i64,
}

impl ConnectionDto {
    pub fn from_connection(connection: &Connection<'_>) -> Self {
        let mode = match connection.via {
            Via::Train(_) => "train",
            Via::Walk { .. } => "walk",
        };
        Self {
            mode,
            train: TrainInfo::from_train(connection.train()),
            from: StationInfo::from_station(connection.from),
            departure: connection.departure.to_string(),
            arrival: connection.arrival.to_string(),
            duration_mins: connection.duration_minutes(),
        }
    }
}
