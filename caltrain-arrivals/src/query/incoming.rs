//! Every way of reaching a station: riding in from an earlier stop, or
//! getting off at a walkable neighbour and walking over.

use crate::domain::{ClockTime, Station, Train};
use crate::stations::canonical_key;
use crate::walkable::WalkableConnections;

/// How a connection reaches the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via<'a> {
    /// Riding this train from `from`.
    Train(&'a Train),
    /// Walking from `from` after getting off this train there.
    Walk { after: &'a Train },
}

/// One way of arriving at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection<'a> {
    pub from: &'a Station,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    pub via: Via<'a>,
}

impl Connection<'_> {
    /// Travel time in minutes. Connections running past midnight wrap.
    pub fn duration_minutes(&self) -> i64 {
        self.departure.minutes_until(&self.arrival)
    }

    /// The train ridden, or the one left before walking.
    pub fn train(&self) -> &Train {
        match self.via {
            Via::Train(train) | Via::Walk { after: train } => train,
        }
    }
}

/// Find every connection into `station` arriving at or after `after`,
/// soonest arrival first.
///
/// A train calling at `station` contributes one connection from each of
/// its earlier stops. Every stop at a station walkable to `station`
/// contributes a walk arriving the walk time after that stop. Equal
/// arrival times keep their input order.
pub fn incoming_connections<'a, I>(
    trains: I,
    walkable: &WalkableConnections,
    station: &str,
    after: ClockTime,
) -> Vec<Connection<'a>>
where
    I: IntoIterator<Item = &'a Train>,
{
    let target = canonical_key(station);
    let mut connections = Vec::new();

    for train in trains {
        let stops = train.stops();

        for (idx, stop) in stops.iter().enumerate() {
            if stop.station.name == station && stop.time.is_after_or_equal(&after) {
                connections.extend(stops[..idx].iter().map(|earlier| Connection {
                    from: &earlier.station,
                    departure: earlier.time,
                    arrival: stop.time,
                    via: Via::Train(train),
                }));
            }

            if canonical_key(&stop.station.name) == target {
                continue;
            }
            if let Some(walk) = walkable.get(&stop.station.name, station) {
                let arrival = stop.time.wrapping_add(walk);
                if arrival.is_after_or_equal(&after) {
                    connections.push(Connection {
                        from: &stop.station,
                        departure: stop.time,
                        arrival,
                        via: Via::Walk { after: train },
                    });
                }
            }
        }
    }

    // sort_by is stable
    connections.sort_by(|a, b| a.arrival.cmp(&b.arrival));
    connections
}
