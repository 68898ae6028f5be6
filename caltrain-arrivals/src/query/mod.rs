//! Time-based queries over extracted trains.
//!
//! Queries only read the trains they are given; filtering by service type
//! happens before the query via [`QueryConfig::admits`].

mod arrivals;
mod config;
mod incoming;
mod trips;

pub use arrivals::{Arrival, next_arrivals};
pub use config::QueryConfig;
pub use incoming::{Connection, Via, incoming_connections};
pub use trips::{Trip, next_trips};
