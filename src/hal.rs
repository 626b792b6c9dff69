//! Hardware Abstraction Layer
//!
//! Bus-level plumbing between the driver and the I2C peripheral.
//! Everything here is blocking and free of chip-specific code, so it
//! builds for the host as well as the target.

pub mod i2c;
