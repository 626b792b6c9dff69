//! System configuration and hardware constants
//!
//! Compile-time constants for the DS1307 and the board it sits on. The
//! register map, bit positions and square-wave values form the contract
//! with the physical part and must match the datasheet exactly.

use crate::types::SquareWave;

/// DS1307 7-bit I2C address (1101000)
pub const DS1307_I2C_ADDR: u8 = 0x68;

/// I2C bus frequency (the DS1307 is a standard-mode device)
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Timeout passed to every bus transaction, in milliseconds
pub const BUS_TIMEOUT_MS: u32 = 10;

/// Largest single register transfer (the whole 64-register window)
pub const MAX_TRANSFER_SIZE: usize = 64;

/// Number of general-purpose RAM bytes
pub const RAM_SIZE: usize = 56;

/// Square-wave setting applied by the demo firmware
pub const DEFAULT_SQUARE_WAVE: SquareWave = SquareWave::Hz1;

/// Interval between clock reads in the demo firmware
pub const POLL_INTERVAL_MS: u64 = 1000;

/// Register addresses
pub mod reg {
    //! DS1307 register map

    /// Seconds (bit 7 is clock halt)
    pub const SECONDS: u8 = 0x00;
    /// Minutes
    pub const MINUTES: u8 = 0x01;
    /// Hours (bit 6 selects 12-hour mode)
    pub const HOURS: u8 = 0x02;
    /// Day of week
    pub const DAY: u8 = 0x03;
    /// Day of month
    pub const DATE: u8 = 0x04;
    /// Month
    pub const MONTH: u8 = 0x05;
    /// Year
    pub const YEAR: u8 = 0x06;
    /// Square-wave control
    pub const CONTROL: u8 = 0x07;
    /// First byte of user RAM
    pub const RAM_START: u8 = 0x08;
    /// Last byte of user RAM
    pub const RAM_END: u8 = 0x3F;
}

/// Register bit positions
pub mod bits {
    //! Bit numbers within the timekeeping and control registers

    /// Clock halt, seconds register
    pub const CH: u8 = 7;
    /// 12/24-hour select, hours register
    pub const HOUR_MODE: u8 = 6;
    /// AM/PM flag in 12-hour mode, hours register
    pub const AM_PM: u8 = 5;
    /// Output level when the square wave is disabled, control register
    pub const OUT: u8 = 7;
    /// Square-wave enable, control register
    pub const SQWE: u8 = 4;
    /// Rate select 1, control register
    pub const RS1: u8 = 1;
    /// Rate select 0, control register
    pub const RS0: u8 = 0;
}

/// Pin assignments for the demo board
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Status LED
    pub const LED_STATUS: &str = "PA5";

    /// I2C1 SCL (DS1307)
    pub const I2C1_SCL: &str = "PB8";

    /// I2C1 SDA (DS1307)
    pub const I2C1_SDA: &str = "PB9";
}
