//! Domain types for the timetable.
//!
//! These are plain value types with structural equality. Parsing
//! constructors enforce their invariants, so code that receives a
//! `ClockTime` or `ServiceType` can trust its validity.

mod service;
mod station;
mod time;
mod train;

pub use service::{InvalidServiceCode, ServiceType};
pub use station::Station;
pub use time::{ClockTime, TimeError};
pub use train::{Direction, Stop, Train};
