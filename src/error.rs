//! Driver status codes
//!
//! Every driver operation returns a [`Result`]. `Ok` stands for the OK
//! status; the remaining statuses are the variants of [`Error`].

use core::fmt;

use crate::hal::i2c::BusError;

/// Driver operation result
pub type Result<T> = core::result::Result<T, Error>;

/// Non-OK driver status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Generic bus failure reported by the transport
    Bus,
    /// Transport busy
    Busy,
    /// Transport timed out
    Timeout,
    /// Device did not acknowledge during initialization
    NotFound,
    /// Transfer larger than the register window allows
    DataSize,
}

impl Error {
    /// Numeric status code (OK is 0)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Bus => 1,
            Self::Busy => 2,
            Self::Timeout => 3,
            Self::NotFound => 4,
            Self::DataSize => 5,
        }
    }
}

/// Numeric status code of a driver result (OK is 0)
#[must_use]
pub fn status_code<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}

impl From<BusError> for Error {
    fn from(err: BusError) -> Self {
        match err {
            BusError::Bus => Self::Bus,
            BusError::Busy => Self::Busy,
            BusError::Timeout => Self::Timeout,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Bus => "bus error",
            Self::Busy => "bus busy",
            Self::Timeout => "bus timeout",
            Self::NotFound => "device not found",
            Self::DataSize => "data size exceeded",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Bus => defmt::write!(f, "Bus"),
            Self::Busy => defmt::write!(f, "Busy"),
            Self::Timeout => defmt::write!(f, "Timeout"),
            Self::NotFound => defmt::write!(f, "NotFound"),
            Self::DataSize => defmt::write!(f, "DataSize"),
        }
    }
}
