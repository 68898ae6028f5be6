//! Walkable connections between stations.
//!
//! Some neighbouring stations are close enough to walk between, which
//! opens connections the timetable itself doesn't list. Stations are keyed
//! by [`canonical_key`], so any alias of a station finds its walks.

use std::collections::HashMap;

use chrono::Duration;

use crate::stations::canonical_key;

/// A collection of walkable connections between stations.
///
/// Connections are symmetric: walking from A to B takes as long as walking
/// from B to A.
#[derive(Debug, Clone, Default)]
pub struct WalkableConnections {
    /// (from, to) canonical keys to walk time in minutes, stored both ways.
    connections: HashMap<(String, String), i64>,
}

impl WalkableConnections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a walkable connection between two stations, both ways.
    ///
    /// A station is never walkable to itself; such pairs are ignored.
    pub fn add(&mut self, from: &str, to: &str, duration_minutes: i64) {
        let from = canonical_key(from);
        let to = canonical_key(to);
        if from == to {
            return;
        }
        self.connections
            .insert((from.clone(), to.clone()), duration_minutes);
        self.connections.insert((to, from), duration_minutes);
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, from: &str, to: &str, duration_minutes: i64) -> Self {
        self.add(from, to, duration_minutes);
        self
    }

    /// Walk time between two stations, or `None` if they aren't walkable.
    pub fn get(&self, from: &str, to: &str) -> Option<Duration> {
        self.connections
            .get(&(canonical_key(from), canonical_key(to)))
            .map(|mins| Duration::minutes(*mins))
    }

    pub fn is_walkable(&self, from: &str, to: &str) -> bool {
        self.get(from, to).is_some()
    }

    /// Canonical keys of every station walkable from `from`, with walk times.
    pub fn walkable_from(&self, from: &str) -> Vec<(String, Duration)> {
        let from = canonical_key(from);
        let mut walks: Vec<_> = self
            .connections
            .iter()
            .filter(|((f, _), _)| *f == from)
            .map(|((_, t), mins)| (t.clone(), Duration::minutes(*mins)))
            .collect();
        walks.sort();
        walks
    }

    /// Number of walkable pairs, counting A→B and B→A once.
    pub fn len(&self) -> usize {
        self.connections.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

/// Walks between neighbouring Caltrain stations, in minutes.
pub fn caltrain_connections() -> WalkableConnections {
    WalkableConnections::new()
        .with("San Jose Diridon", "Tamien", 45)
        .with("Sunnyvale", "Lawrence", 43)
        .with("Mountain View", "San Antonio", 43)
        .with("California Avenue", "Palo Alto", 36)
        .with("Menlo Park", "Palo Alto", 25)
        .with("Redwood City", "San Carlos", 45)
        .with("San Carlos", "Belmont", 26)
        .with("Hillsdale", "Belmont", 43)
        .with("Hillsdale", "Hayward Park", 16)
        .with("Hayward Park", "San Mateo", 27)
        .with("San Mateo", "Burlingame", 30)
        .with("San Bruno", "South San Francisco", 39)
        .with("22nd Street", "San Francisco", 30)
}
