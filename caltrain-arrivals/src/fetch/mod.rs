//! HTTP fetch of the timetable page.
//!
//! The only network boundary in the pipeline. A failure here is terminal
//! for the run; retry policy, if any, belongs to the caller.

mod client;
mod error;

pub use client::{DEFAULT_URL, TimetableClient, TimetableClientConfig};
pub use error::FetchError;
