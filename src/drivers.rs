//! Peripheral Drivers
//!
//! High-level drivers for external ICs on the I2C bus.

pub mod ds1307;
