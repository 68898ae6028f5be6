//! The fetch → extract pipeline and the resulting schedule.
//!
//! A `Schedule` is built once per run and then only read. Nothing here is
//! process-global; callers pass the URL or file they want loaded.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{ClockTime, Station, Train};
use crate::fetch::{FetchError, TimetableClient, TimetableClientConfig};
use crate::query::{
    Arrival, Connection, QueryConfig, Trip, incoming_connections, next_arrivals, next_trips,
};
use crate::stations::StationDirectory;
use crate::timetable::{ExtractError, Timetable, extract_from_html};
use crate::walkable::WalkableConnections;

/// Errors from loading a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("failed to fetch timetable: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to extract timetable: {0}")]
    Extract(#[from] ExtractError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Every train of both directions, northbound first, and every station
/// the timetable lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    trains: Vec<Train>,
    stations: Vec<Station>,
}

impl Schedule {
    /// A schedule whose stations are exactly those the trains stop at.
    pub fn from_trains(trains: Vec<Train>) -> Self {
        let stations = StationDirectory::from_trains(&trains).stations().to_vec();
        Self { trains, stations }
    }

    pub fn from_timetable(timetable: Timetable) -> Self {
        Self {
            trains: timetable.trains,
            stations: timetable.stations,
        }
    }

    /// Extract a schedule from a timetable page.
    pub fn from_html(html: &str) -> Result<Self, ExtractError> {
        let timetable = extract_from_html(html)?;
        info!(
            trains = timetable.trains.len(),
            stations = timetable.stations.len(),
            "extracted schedule"
        );
        Ok(Self::from_timetable(timetable))
    }

    /// Extract a schedule from a saved timetable page.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_html(&html)?)
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Every station the timetable lists, served or not.
    pub fn stations(&self) -> StationDirectory {
        StationDirectory::from_stations(&self.stations)
    }

    /// Next arrival of each admitted train at `station`, soonest first.
    pub fn next_arrivals(
        &self,
        station: &str,
        after: ClockTime,
        config: &QueryConfig,
    ) -> Vec<Arrival<'_>> {
        let admitted = self.trains.iter().filter(|train| config.admits(train));
        config.limit(next_arrivals(admitted, station, after))
    }

    /// Trips from `from` to `to` on admitted trains, soonest departure first.
    pub fn next_trips(
        &self,
        from: &str,
        to: &str,
        after: ClockTime,
        config: &QueryConfig,
    ) -> Vec<Trip<'_>> {
        let admitted = self.trains.iter().filter(|train| config.admits(train));
        config.limit(next_trips(admitted, from, to, after))
    }

    /// Rides and walks into `station` on admitted trains, soonest arrival
    /// first.
    pub fn incoming_connections(
        &self,
        station: &str,
        after: ClockTime,
        walkable: &WalkableConnections,
        config: &QueryConfig,
    ) -> Vec<Connection<'_>> {
        let admitted = self.trains.iter().filter(|train| config.admits(train));
        config.limit(incoming_connections(admitted, walkable, station, after))
    }
}

/// Fetch the page with `client` and extract its schedule.
pub async fn load_schedule(client: &TimetableClient) -> Result<Schedule, ScheduleError> {
    let html = client.fetch_page().await?;
    Ok(Schedule::from_html(&html)?)
}

/// Fetch and extract the timetable at `url` with default client settings.
pub async fn fetch_schedule(url: &str) -> Result<Schedule, ScheduleError> {
    let client = TimetableClient::new(TimetableClientConfig::new().with_url(url))?;
    load_schedule(&client).await
}
