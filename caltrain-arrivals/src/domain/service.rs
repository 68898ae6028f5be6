//! Service type (operating pattern) codes.

use std::fmt;

/// Error returned when a service code is not one of the known codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service code {code:?}")]
pub struct InvalidServiceCode {
    code: String,
}

impl InvalidServiceCode {
    /// The code that was not recognized.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// The operating pattern of a train, as printed in the timetable's
/// service-type row.
///
/// # Examples
///
/// ```
/// use caltrain_arrivals::domain::ServiceType;
///
/// assert_eq!(ServiceType::from_code("L1").unwrap(), ServiceType::Local);
/// assert_eq!(ServiceType::from_code("B7").unwrap(), ServiceType::Bullet);
///
/// // Unknown codes are rejected rather than defaulted
/// assert!(ServiceType::from_code("X9").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Local,
    Weekend,
    Limited3,
    Limited4,
    Limited5,
    Bullet,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Local,
        ServiceType::Weekend,
        ServiceType::Limited3,
        ServiceType::Limited4,
        ServiceType::Limited5,
        ServiceType::Bullet,
    ];

    /// Parse a 2-character service code.
    pub fn from_code(code: &str) -> Result<Self, InvalidServiceCode> {
        match code {
            "L1" => Ok(ServiceType::Local),
            "L2" => Ok(ServiceType::Weekend),
            "L3" => Ok(ServiceType::Limited3),
            "L4" => Ok(ServiceType::Limited4),
            "L5" => Ok(ServiceType::Limited5),
            "B7" => Ok(ServiceType::Bullet),
            other => Err(InvalidServiceCode {
                code: other.to_string(),
            }),
        }
    }

    /// The timetable code for this service type.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::Local => "L1",
            ServiceType::Weekend => "L2",
            ServiceType::Limited3 => "L3",
            ServiceType::Limited4 => "L4",
            ServiceType::Limited5 => "L5",
            ServiceType::Bullet => "B7",
        }
    }

    /// Lowercase display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Local => "local",
            ServiceType::Weekend => "weekend",
            ServiceType::Limited3 => "limited3",
            ServiceType::Limited4 => "limited4",
            ServiceType::Limited5 => "limited5",
            ServiceType::Bullet => "bullet",
        }
    }

    /// Returns true for weekend-only service.
    pub fn is_weekend(&self) -> bool {
        matches!(self, ServiceType::Weekend)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
