//! DS1307 Real-Time Clock Driver Library
//!
//! This library drives a DS1307 real-time clock over I2C. It brings the
//! oscillator up, translates between raw register bytes and structured
//! date/time values, and exposes typed register access. The demo firmware
//! in `main.rs` runs it on an STM32G474.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │        rtc-clock firmware (embassy task, defmt logging)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      DRIVER LAYER                            │
//! │   Ds1307  │  BCD conversion  │  Diagnostics hook             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                        HAL LAYER                             │
//! │   RegisterBus  │  I2cBus over embedded-hal I2c               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use ds1307_rtc::prelude::*;
//!
//! let mut rtc = Ds1307::new(I2cBus::new(i2c));
//! rtc.init(SquareWave::Hz1)?;
//! let now = rtc.read_datetime(Encoding::Binary)?;
//! ```
//!
//! # Design Principles
//!
//! - **No global state**: the driver owns its bus; each instance stands alone
//! - **Exclusive access**: every operation takes `&mut self`
//! - **Explicit error handling**: all fallible operations return `Result`
//! - **Injectable diagnostics**: the library never prints on its own

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Hardware Abstraction Layer
///
/// Register-level bus primitives and the `embedded-hal` adapter.
pub mod hal;

/// Peripheral Drivers
///
/// The DS1307 driver.
pub mod drivers;

/// Packed-decimal conversion
pub mod bcd;

/// Driver diagnostics hook
pub mod diagnostics;

/// Driver status codes
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::diagnostics::{DiagnosticEvent, Diagnostics, NoDiagnostics};
    #[cfg(feature = "embedded")]
    pub use crate::diagnostics::DefmtDiagnostics;
    pub use crate::drivers::ds1307::Ds1307;
    pub use crate::error::{Error, Result};
    pub use crate::hal::i2c::{I2cAddress, I2cBus, I2cDevice, RegisterBus};
}
