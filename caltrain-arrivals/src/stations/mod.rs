//! Station lookup by loose name.

mod error;
mod names;

pub use error::UnknownStation;
pub use names::{StationDirectory, canonical_key, sanitize_name};
