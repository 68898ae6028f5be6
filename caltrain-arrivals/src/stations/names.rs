//! Station name resolution.
//!
//! Users type station names loosely ("SF", "mt view", "Diridon"). The
//! timetable prints one canonical spelling. Resolution sanitizes both
//! sides and falls back to a table of known alias groups.

use std::collections::HashMap;

use crate::domain::{Station, Train};

use super::error::UnknownStation;

/// Groups of names that refer to the same station. The first entry is the
/// usual spelling; any member may be the one the timetable prints.
const ALIAS_GROUPS: &[&[&str]] = &[
    &["San Francisco", "SF", "San Fran", "4th and King"],
    &["22nd Street", "22nd St", "Twenty-Second Street", "Twenty-Second St", "22nd", "22"],
    &[
        "South San Francisco",
        "So. San Francisco",
        "S San Francisco",
        "So San Francisco",
        "South SF",
        "South San Fran",
        "S San Fran",
        "S SF",
        "So SF",
        "So San Fran",
    ],
    &["Mountain View", "Mt View", "Mtn View"],
    &[
        "California Avenue",
        "California Ave",
        "California Av",
        "California",
        "Cal Ave",
        "Cal Av",
        "Cal",
    ],
    &["Redwood City", "Redwood"],
    &["San Jose Diridon", "San Jose", "Diridon", "SJ Diridon", "SJ"],
    &["College Park", "College"],
    &["Blossom Hill", "Blossom"],
    &["Morgan Hill", "Morgan"],
    &["Hayward Park", "Hayward"],
    &["Menlo Park", "Menlo"],
];

/// Reduce a station name to a comparison key: ASCII alphanumerics only,
/// lowercased, with the word "station" removed.
///
/// ```
/// use caltrain_arrivals::stations::sanitize_name;
///
/// assert_eq!(sanitize_name("San Jose Diridon Station"), "sanjosediridon");
/// assert_eq!(sanitize_name("So. San Francisco"), "sosanfrancisco");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let key: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    key.replace("station", "")
}

/// Key shared by every spelling of one station: the sanitized usual
/// spelling when `name` belongs to an alias group, the sanitized name
/// otherwise.
///
/// ```
/// use caltrain_arrivals::stations::canonical_key;
///
/// assert_eq!(canonical_key("SJ Diridon"), canonical_key("San Jose"));
/// assert_eq!(canonical_key("Palo Alto"), "paloalto");
/// ```
pub fn canonical_key(name: &str) -> String {
    let key = sanitize_name(name);
    ALIAS_GROUPS
        .iter()
        .find(|group| group.iter().any(|alias| sanitize_name(alias) == key))
        .map(|group| sanitize_name(group[0]))
        .unwrap_or(key)
}

/// The distinct stations of a schedule, searchable by loose name.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    /// Stations in first-seen order.
    stations: Vec<Station>,
    /// Sanitized name → index into `stations`.
    by_key: HashMap<String, usize>,
}

impl StationDirectory {
    /// Collect the given stations.
    ///
    /// Stations are keyed by sanitized name; the first spelling seen wins.
    pub fn from_stations<'a, I>(stations: I) -> Self
    where
        I: IntoIterator<Item = &'a Station>,
    {
        let mut directory = Self::default();
        for station in stations {
            directory.insert(station);
        }
        directory
    }

    /// Collect every station the trains stop at.
    pub fn from_trains<'a, I>(trains: I) -> Self
    where
        I: IntoIterator<Item = &'a Train>,
    {
        Self::from_stations(
            trains
                .into_iter()
                .flat_map(|train| train.stops())
                .map(|stop| &stop.station),
        )
    }

    fn insert(&mut self, station: &Station) {
        let key = sanitize_name(&station.name);
        if !self.by_key.contains_key(&key) {
            self.by_key.insert(key, self.stations.len());
            self.stations.push(station.clone());
        }
    }

    /// Resolve a user-supplied name to a known station.
    pub fn resolve(&self, name: &str) -> Result<&Station, UnknownStation> {
        let key = sanitize_name(name);

        if let Some(&idx) = self.by_key.get(&key) {
            return Ok(&self.stations[idx]);
        }

        ALIAS_GROUPS
            .iter()
            .filter(|group| group.iter().any(|alias| sanitize_name(alias) == key))
            .flat_map(|group| group.iter())
            .find_map(|alias| self.by_key.get(&sanitize_name(alias)))
            .map(|&idx| &self.stations[idx])
            .ok_or_else(|| UnknownStation(name.to_string()))
    }

    /// All stations in first-seen order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, Direction, ServiceType, Stop};

    fn directory(names: &[&str]) -> StationDirectory {
        let stations: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(zone, name)| Station::new(*name, zone as u32))
            .collect();
        StationDirectory::from_stations(&stations)
    }

    #[test]
    fn from_trains_only_sees_served_stations() {
        let train = ["Gilroy", "San Martin"].iter().fold(
            Train::new(1, Direction::Southbound, ServiceType::Local),
            |train, name| {
                train.with_stop(Stop::new(
                    Station::new(*name, 6),
                    ClockTime::from_hm(6, 0).unwrap(),
                ))
            },
        );
        let dir = StationDirectory::from_trains([&train]);
        assert_eq!(dir.len(), 2);
        assert!(dir.resolve("San Martin").is_ok());
    }

    #[test]
    fn exact_and_loose_matches() {
        let dir = directory(&["San Francisco", "Palo Alto"]);

        assert_eq!(dir.resolve("Palo Alto").unwrap().name, "Palo Alto");
        assert_eq!(dir.resolve("palo alto").unwrap().name, "Palo Alto");
        assert_eq!(dir.resolve("PaloAlto station").unwrap().name, "Palo Alto");
    }

    #[test]
    fn aliases_resolve_to_printed_name() {
        let dir = directory(&["San Francisco", "22nd Street", "Mountain View", "San Jose Diridon"]);

        assert_eq!(dir.resolve("SF").unwrap().name, "San Francisco");
        assert_eq!(dir.resolve("22nd st").unwrap().name, "22nd Street");
        assert_eq!(dir.resolve("Mt. View").unwrap().name, "Mountain View");
        assert_eq!(dir.resolve("Diridon").unwrap().name, "San Jose Diridon");
        assert_eq!(dir.resolve("san jose").unwrap().name, "San Jose Diridon");
    }

    #[test]
    fn alias_works_when_page_prints_short_form() {
        let dir = directory(&["California Ave"]);
        assert_eq!(dir.resolve("California Avenue").unwrap().name, "California Ave");
        assert_eq!(dir.resolve("cal ave").unwrap().name, "California Ave");
    }

    #[test]
    fn unknown_station() {
        let dir = directory(&["Palo Alto"]);
        assert_eq!(
            dir.resolve("Atlantis").unwrap_err(),
            UnknownStation("Atlantis".to_string())
        );
        // Alias group exists, but the station is not in this schedule
        assert!(dir.resolve("SF").is_err());
    }

    #[test]
    fn canonical_keys_collapse_alias_groups() {
        assert_eq!(canonical_key("Mt. View"), "mountainview");
        assert_eq!(canonical_key("California Ave"), canonical_key("Cal"));
        assert_eq!(canonical_key("22nd St"), "22ndstreet");
        assert_eq!(canonical_key("Tamien Station"), "tamien");
    }

    #[test]
    fn stations_deduplicated_in_first_seen_order() {
        let dir = directory(&["Gilroy", "Tamien", "gilroy", "Tamien"]);
        let names: Vec<_> = dir.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Gilroy", "Tamien"]);
        assert_eq!(dir.len(), 2);
    }
}
