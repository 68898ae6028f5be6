//! Caltrain next-arrivals.
//!
//! Extracts the train schedule from the published timetable page and
//! answers "which trains arrive at this station next?" and "how can I
//! get to this station, riding or walking from a neighbour?"

pub mod domain;
pub mod fetch;
pub mod query;
pub mod report;
pub mod schedule;
pub mod stations;
pub mod timetable;
pub mod walkable;
