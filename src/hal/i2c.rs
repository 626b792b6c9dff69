//! I2C Bus Abstractions
//!
//! The driver reaches the clock through two register-level primitives,
//! [`RegisterBus::mem_read`] and [`RegisterBus::mem_write`], each one bus
//! transaction with a one-byte register address. [`I2cBus`] provides
//! them on top of any blocking `embedded-hal` I2C implementation.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use heapless::Vec;

use crate::config::{DS1307_I2C_ADDR, MAX_TRANSFER_SIZE};

/// Register address byte plus the largest payload
const FRAME_SIZE: usize = MAX_TRANSFER_SIZE + 1;

/// I2C operation result
pub type I2cResult<T> = Result<T, BusError>;

/// Transport-level failure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BusError {
    /// Generic failure (NACK, bus error, overrun)
    Bus,
    /// Bus held by another master
    Busy,
    /// Transaction did not finish within the timeout
    Timeout,
}

impl BusError {
    /// Classify an `embedded-hal` error kind
    #[must_use]
    pub fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::ArbitrationLoss => Self::Busy,
            _ => Self::Bus,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BusError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Bus => defmt::write!(f, "Bus"),
            Self::Busy => defmt::write!(f, "Busy"),
            Self::Timeout => defmt::write!(f, "Timeout"),
        }
    }
}

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// DS1307 real-time clock address
    pub const DS1307: Self = Self(DS1307_I2C_ADDR);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// Register-addressed bus transactions
///
/// Implementations perform exactly one bus transaction per call and
/// report its outcome unchanged. `timeout_ms` bounds how long the call
/// may block.
pub trait RegisterBus {
    /// Read `buf.len()` bytes starting at register `reg`
    fn mem_read(
        &mut self,
        device: I2cAddress,
        reg: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> I2cResult<()>;

    /// Write `data` starting at register `reg`
    fn mem_write(
        &mut self,
        device: I2cAddress,
        reg: u8,
        data: &[u8],
        timeout_ms: u32,
    ) -> I2cResult<()>;
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    fn mem_read(
        &mut self,
        device: I2cAddress,
        reg: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> I2cResult<()> {
        (**self).mem_read(device, reg, buf, timeout_ms)
    }

    fn mem_write(
        &mut self,
        device: I2cAddress,
        reg: u8,
        data: &[u8],
        timeout_ms: u32,
    ) -> I2cResult<()> {
        (**self).mem_write(device, reg, data, timeout_ms)
    }
}

/// [`RegisterBus`] over a blocking `embedded-hal` I2C bus
///
/// The timeout argument is not forwarded: `embedded-hal` buses carry
/// their own timeout configuration.
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C> I2cBus<I2C> {
    /// Create a new I2C bus wrapper
    #[must_use]
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cBus<I2C> {
    fn mem_read(
        &mut self,
        device: I2cAddress,
        reg: u8,
        buf: &mut [u8],
        _timeout_ms: u32,
    ) -> I2cResult<()> {
        self.i2c
            .write_read(device.addr(), &[reg], buf)
            .map_err(|e| BusError::from_kind(e.kind()))
    }

    fn mem_write(
        &mut self,
        device: I2cAddress,
        reg: u8,
        data: &[u8],
        _timeout_ms: u32,
    ) -> I2cResult<()> {
        // Register address goes out first, in the same transaction
        let mut frame: Vec<u8, FRAME_SIZE> = Vec::new();
        frame.push(reg).map_err(|_| BusError::Bus)?;
        frame.extend_from_slice(data).map_err(|()| BusError::Bus)?;

        self.i2c
            .write(device.addr(), &frame)
            .map_err(|e| BusError::from_kind(e.kind()))
    }
}

/// I2C device trait for polymorphism
pub trait I2cDevice {
    /// Get the device's I2C address
    fn address(&self) -> I2cAddress;
}
