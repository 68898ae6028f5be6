//! Next arrivals at a station.

use crate::domain::{ClockTime, Stop, Train};

/// A train paired with the stop that qualified it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival<'a> {
    pub train: &'a Train,
    pub stop: &'a Stop,
}

/// Find the next arrival of each train at `station`, soonest first.
///
/// A stop qualifies when its station name equals `station` exactly and its
/// time is at or after `after`. Trains without a qualifying stop are left
/// out. A train that qualifies more than once appears once, keyed on its
/// earliest qualifying stop. Equal times keep their input order.
pub fn next_arrivals<'a, I>(trains: I, station: &str, after: ClockTime) -> Vec<Arrival<'a>>
where
    I: IntoIterator<Item = &'a Train>,
{
    let mut arrivals: Vec<Arrival<'a>> = trains
        .into_iter()
        .filter_map(|train| {
            train
                .stops_at(station)
                .filter(|stop| stop.time.is_after_or_equal(&after))
                .min_by_key(|stop| stop.time)
                .map(|stop| Arrival { train, stop })
        })
        .collect();

    // sort_by is stable
    arrivals.sort_by(|a, b| a.stop.time.cmp(&b.stop.time));
    arrivals
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Direction, ServiceType, Station};
    use proptest::prelude::*;

    const STATIONS: [&str; 3] = ["Gilroy", "Tamien", "Palo Alto"];

    prop_compose! {
        fn arb_stop()(station in 0usize..3, hour in 0u32..24, minute in 0u32..60) -> Stop {
            Stop::new(
                Station::new(STATIONS[station], 1),
                ClockTime::from_hm(hour, minute).unwrap(),
            )
        }
    }

    prop_compose! {
        fn arb_trains()(stops in prop::collection::vec(prop::collection::vec(arb_stop(), 0..6), 0..12)) -> Vec<Train> {
            stops
                .into_iter()
                .enumerate()
                .map(|(i, stops)| {
                    stops.into_iter().fold(
                        Train::new(i as u32, Direction::Southbound, ServiceType::Local),
                        Train::with_stop,
                    )
                })
                .collect()
        }
    }

    proptest! {
        /// Results are ascending by qualifying stop time
        #[test]
        fn results_sorted(trains in arb_trains(), hour in 0u32..24, minute in 0u32..60, station in 0usize..3) {
            let after = ClockTime::from_hm(hour, minute).unwrap();
            let arrivals = next_arrivals(&trains, STATIONS[station], after);
            for pair in arrivals.windows(2) {
                prop_assert!(
                    !pair[0].stop.time.is_after_or_equal(&pair[1].stop.time)
                        || pair[0].stop.time == pair[1].stop.time
                );
            }
        }

        /// A train is present iff it has a qualifying stop, and every
        /// returned stop qualifies
        #[test]
        fn exactly_the_qualifying_trains(trains in arb_trains(), hour in 0u32..24, minute in 0u32..60, station in 0usize..3) {
            let name = STATIONS[station];
            let after = ClockTime::from_hm(hour, minute).unwrap();
            let arrivals = next_arrivals(&trains, name, after);

            for arrival in &arrivals {
                prop_assert_eq!(arrival.stop.station.name.as_str(), name);
                prop_assert!(arrival.stop.time.is_after_or_equal(&after));
            }

            let expected = trains
                .iter()
                .filter(|t| t.stops_at(name).any(|s| s.time.is_after_or_equal(&after)))
                .count();
            prop_assert_eq!(arrivals.len(), expected);
        }
    }
}
