//! Station lookup error types.

/// No known station matches the given name, directly or by alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station {0:?}")]
pub struct UnknownStation(pub String);
