//! Conversion from direction tables to trains.
//!
//! Each direction table has the same layout once filtered:
//!
//! ```text
//! row 0   | -    | -       | 101    | 102   | ...   train numbers
//! row 1   | -    | -       | L1     | B7    | ...   service codes
//! row 2.. | zone | station | 2:15am | --    | ...   arrival per train
//! ```
//!
//! A `--` cell means the train does not stop at that row's station.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{ClockTime, Direction, ServiceType, Station, Stop, Train};

use super::error::{ExtractError, ParseError, StructuralError};
use super::grid::{Grid, TableNode};

/// Placeholder for "does not stop here".
pub const NO_STOP: &str = "--";

/// Cells before the first train column: zone and station name.
const LEADING_CELLS: usize = 2;

/// Table order on the page.
const DIRECTIONS: [Direction; 2] = [Direction::Northbound, Direction::Southbound];

/// What one or more direction tables hold.
///
/// `stations` lists every stop row in table order, including rows where
/// no train stops, so a station is known even when it has no service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    pub trains: Vec<Train>,
    pub stations: Vec<Station>,
}

impl Timetable {
    fn append(&mut self, other: Timetable) {
        self.trains.extend(other.trains);
        for station in other.stations {
            if !self.stations.contains(&station) {
                self.stations.push(station);
            }
        }
    }
}

/// Extract every train from the page's direction tables.
///
/// `tables` are the table bodies in document order: the first is
/// northbound, the second southbound. Any error aborts the whole
/// extraction; no partial schedule is returned.
pub fn extract_trains<N: TableNode>(tables: &[N]) -> Result<Timetable, ExtractError> {
    if tables.len() < DIRECTIONS.len() {
        return Err(StructuralError::MissingTables {
            found: tables.len(),
        }
        .into());
    }
    if tables.len() > DIRECTIONS.len() {
        warn!(
            found = tables.len(),
            "ignoring table bodies after the two direction tables"
        );
    }

    let mut timetable = Timetable::default();
    for (table, direction) in tables.iter().zip(DIRECTIONS) {
        let grid = Grid::from_table(table);
        timetable.append(extract_direction(&grid, direction)?);
    }

    Ok(timetable)
}

/// Extract the trains and stop-row stations of one direction table.
pub fn extract_direction(grid: &Grid, direction: Direction) -> Result<Timetable, ExtractError> {
    let rows = grid.rows();
    let [numbers_row, services_row, stop_rows @ ..] = rows else {
        return Err(StructuralError::MissingHeaderRows { found: rows.len() }.into());
    };

    let numbers = parse_train_numbers(numbers_row)?;
    let expected = LEADING_CELLS + numbers.len();

    if services_row.len() != expected {
        return Err(StructuralError::ColumnMismatch {
            row: 1,
            expected,
            found: services_row.len(),
        }
        .into());
    }

    let mut trains = numbers
        .iter()
        .zip(&services_row[LEADING_CELLS..])
        .enumerate()
        .map(|(column, (&number, code))| -> Result<Train, ExtractError> {
            let service = ServiceType::from_code(code)
                .map_err(|source| ParseError::ServiceCode { column, source })?;
            Ok(Train::new(number, direction, service))
        })
        .collect::<Result<Vec<_>, ExtractError>>()?;

    let mut stations = Vec::with_capacity(stop_rows.len());

    for (offset, cells) in stop_rows.iter().enumerate() {
        let row = offset + 2;

        if cells.len() != expected {
            return Err(StructuralError::ColumnMismatch {
                row,
                expected,
                found: cells.len(),
            }
            .into());
        }

        let station = parse_station(row, &cells[0], &cells[1])?;

        for (column, (train, text)) in trains
            .iter_mut()
            .zip(&cells[LEADING_CELLS..])
            .enumerate()
        {
            if text == NO_STOP {
                continue;
            }
            let time = ClockTime::parse_ampm(text)
                .map_err(|source| ParseError::Time { row, column, source })?;
            train.push_stop(Stop::new(station.clone(), time));
        }
        stations.push(station);
    }

    debug!(
        %direction,
        trains = trains.len(),
        stations = stations.len(),
        "extracted direction table"
    );

    Ok(Timetable { trains, stations })
}

/// Parse the header row's train numbers, rejecting duplicates.
fn parse_train_numbers(row: &[String]) -> Result<Vec<u32>, ExtractError> {
    let Some(cells) = row.get(LEADING_CELLS..) else {
        return Err(StructuralError::ColumnMismatch {
            row: 0,
            expected: LEADING_CELLS,
            found: row.len(),
        }
        .into());
    };

    let mut seen = HashSet::new();
    let mut numbers = Vec::with_capacity(cells.len());

    for (column, text) in cells.iter().enumerate() {
        let number: u32 = text.parse().map_err(|_| ParseError::TrainNumber {
            column,
            text: text.clone(),
        })?;
        if !seen.insert(number) {
            return Err(StructuralError::DuplicateTrain { number }.into());
        }
        numbers.push(number);
    }

    Ok(numbers)
}

fn parse_station(row: usize, zone: &str, name: &str) -> Result<Station, ParseError> {
    let zone = zone.parse().map_err(|_| ParseError::Zone {
        row,
        text: zone.to_string(),
    })?;
    Ok(Station::new(name, zone))
}
