//! Driver Diagnostics
//!
//! The driver never prints. Noteworthy events are handed to a
//! [`Diagnostics`] hook chosen when the driver is built: [`NoDiagnostics`]
//! drops them, any `FnMut(&DiagnosticEvent)` closure receives them, and
//! on the target [`DefmtDiagnostics`] forwards them to `defmt`.
//!
//! Events are informational only. Control flow never depends on them.

use crate::hal::i2c::I2cAddress;
use crate::types::{Date, Encoding, SquareWave, Time};

/// Something the driver observed while talking to the clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Device did not acknowledge the clock-halt write during init
    NotFound {
        /// Address that was tried
        address: I2cAddress,
    },
    /// Control register value read back during init
    SquareWaveReadback {
        /// Raw register value
        raw: u8,
        /// Decoded setting, `None` for an unknown configuration
        mode: Option<SquareWave>,
    },
    /// Write rejected before reaching the bus
    DataSizeExceeded {
        /// Requested length
        len: usize,
    },
    /// Time registers read
    TimeRead {
        /// Value handed to the caller
        time: Time,
        /// Encoding applied
        encoding: Encoding,
    },
    /// Date registers read
    DateRead {
        /// Value handed to the caller
        date: Date,
        /// Encoding applied
        encoding: Encoding,
    },
}

/// Sink for [`DiagnosticEvent`]s
pub trait Diagnostics {
    /// Record one event
    fn record(&mut self, event: &DiagnosticEvent);
}

/// Discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn record(&mut self, _event: &DiagnosticEvent) {}
}

impl<F: FnMut(&DiagnosticEvent)> Diagnostics for F {
    fn record(&mut self, event: &DiagnosticEvent) {
        self(event);
    }
}

/// Forwards events to the `defmt` logger
#[cfg(feature = "embedded")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtDiagnostics;

#[cfg(feature = "embedded")]
impl Diagnostics for DefmtDiagnostics {
    fn record(&mut self, event: &DiagnosticEvent) {
        match *event {
            DiagnosticEvent::NotFound { address } => {
                defmt::warn!("DS1307 with slave address {} is not found", address);
            }
            DiagnosticEvent::SquareWaveReadback { raw, mode } => match mode {
                Some(mode) => defmt::info!("{} is selected", mode),
                None => defmt::warn!("wrong configuration set: control=0x{:02X}", raw),
            },
            DiagnosticEvent::DataSizeExceeded { len } => {
                defmt::warn!("data size exceeded: {} bytes", len);
            }
            DiagnosticEvent::TimeRead { time, encoding } => {
                defmt::debug!("time is {} ({})", time, encoding);
            }
            DiagnosticEvent::DateRead { date, encoding } => {
                defmt::debug!("{} ({})", date, encoding);
            }
        }
    }
}
