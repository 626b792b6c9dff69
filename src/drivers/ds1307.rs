//! DS1307 Real-Time Clock Driver
//!
//! Register-level driver for the Maxim DS1307. Time and date live in
//! seven consecutive registers starting at 0x00, followed by the
//! square-wave control register and 56 bytes of battery-backed RAM.
//!
//! Every operation is a single blocking transaction on the bus (two or
//! three for [`Ds1307::init`] and [`Ds1307::read_datetime`]). There is no
//! retry and no cached register state. Methods take `&mut self`, so one
//! caller at a time owns the device.

use heapless::Vec;

use crate::bcd::bin_to_bcd_slice;
use crate::config::{bits, reg, BUS_TIMEOUT_MS, MAX_TRANSFER_SIZE, RAM_SIZE};
use crate::diagnostics::{DiagnosticEvent, Diagnostics, NoDiagnostics};
use crate::error::{Error, Result};
use crate::hal::i2c::{I2cAddress, I2cDevice, RegisterBus};
use crate::types::{Date, DateTime, Encoding, SquareWave, Time};

/// Apply `encoding` to raw register bytes
fn apply_encoding(encoding: Encoding, regs: &mut [u8]) {
    if encoding == Encoding::PackedDecimal {
        bin_to_bcd_slice(regs);
    }
}

/// `DS1307` driver
pub struct Ds1307<B, D = NoDiagnostics> {
    bus: B,
    diagnostics: D,
}

impl<B: RegisterBus> Ds1307<B> {
    /// Create a new `DS1307` driver that reports no diagnostics
    #[must_use]
    pub fn new(bus: B) -> Self {
        Self::with_diagnostics(bus, NoDiagnostics)
    }
}

impl<B: RegisterBus, D: Diagnostics> Ds1307<B, D> {
    /// Create a new `DS1307` driver reporting to `diagnostics`
    #[must_use]
    pub fn with_diagnostics(bus: B, diagnostics: D) -> Self {
        Self { bus, diagnostics }
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Diagnostic hook in use
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Start the oscillator and configure the square-wave output
    ///
    /// Clears the clock-halt bit by zeroing the seconds register, writes
    /// `sqw` to the control register, then reads the control register back
    /// and reports it as [`DiagnosticEvent::SquareWaveReadback`]. The
    /// read-back value does not affect the result; use
    /// [`Ds1307::square_wave`] to verify the setting.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the device does not acknowledge the first
    /// write. Any other failure is returned as is; nothing further is sent
    /// after a failed write.
    pub fn init(&mut self, sqw: SquareWave) -> Result<()> {
        // Zeroing the seconds register clears CH (bit 7)
        match self.mem_write(reg::SECONDS, &[0x00]) {
            Ok(()) => {}
            Err(Error::Bus) => {
                self.diagnostics.record(&DiagnosticEvent::NotFound {
                    address: I2cAddress::DS1307,
                });
                return Err(Error::NotFound);
            }
            Err(e) => return Err(e),
        }

        self.mem_write(reg::CONTROL, &[sqw.as_reg()])?;

        let mut raw = [0u8];
        self.mem_read(reg::CONTROL, &mut raw)?;
        self.diagnostics.record(&DiagnosticEvent::SquareWaveReadback {
            raw: raw[0],
            mode: SquareWave::from_register(raw[0]),
        });

        Ok(())
    }

    /// Read `buf.len()` registers starting at `addr`
    ///
    /// `buf` must not be longer than [`MAX_TRANSFER_SIZE`]; the register
    /// window ends there.
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn read_register(&mut self, addr: u8, buf: &mut [u8]) -> Result<()> {
        self.mem_read(addr, buf)
    }

    /// Write `data` to consecutive registers starting at `addr`
    ///
    /// # Errors
    ///
    /// [`Error::DataSize`] without touching the bus if `data` is longer
    /// than [`MAX_TRANSFER_SIZE`]; otherwise transport failures, unchanged.
    pub fn write_register(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        let staged: Vec<u8, MAX_TRANSFER_SIZE> = match Vec::from_slice(data) {
            Ok(staged) => staged,
            Err(()) => {
                self.diagnostics
                    .record(&DiagnosticEvent::DataSizeExceeded { len: data.len() });
                return Err(Error::DataSize);
            }
        };

        self.mem_write(addr, &staged)
    }

    /// Read hours, minutes and seconds
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn read_time(&mut self, encoding: Encoding) -> Result<Time> {
        let mut regs = [0u8; 3];
        self.read_register(reg::SECONDS, &mut regs)?;
        apply_encoding(encoding, &mut regs);

        let time = Time::from_registers(regs);
        self.diagnostics
            .record(&DiagnosticEvent::TimeRead { time, encoding });
        Ok(time)
    }

    /// Read day of week, day of month, month and year
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn read_date(&mut self, encoding: Encoding) -> Result<Date> {
        let mut regs = [0u8; 4];
        self.read_register(reg::DAY, &mut regs)?;
        apply_encoding(encoding, &mut regs);

        let date = Date::from_registers(regs);
        self.diagnostics
            .record(&DiagnosticEvent::DateRead { date, encoding });
        Ok(date)
    }

    /// Read the date, then the time
    ///
    /// Both reads are always issued. The two reads are separate
    /// transactions, so the clock may tick between them.
    ///
    /// # Errors
    ///
    /// The first failure, date read before time read.
    pub fn read_datetime(&mut self, encoding: Encoding) -> Result<DateTime> {
        let date = self.read_date(encoding);
        let time = self.read_time(encoding);
        Ok(DateTime::new(date?, time?))
    }

    /// Write hours, minutes and seconds
    ///
    /// With [`Encoding::PackedDecimal`] each field is converted before it
    /// is written. The seconds byte carries the clock-halt bit, so writing
    /// a raw seconds value of 0x80 or more stops the clock.
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn set_time(&mut self, time: &Time, encoding: Encoding) -> Result<()> {
        let mut regs = time.to_registers();
        apply_encoding(encoding, &mut regs);
        self.write_register(reg::SECONDS, &regs)
    }

    /// Write day of week, day of month, month and year
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn set_date(&mut self, date: &Date, encoding: Encoding) -> Result<()> {
        let mut regs = date.to_registers();
        apply_encoding(encoding, &mut regs);
        self.write_register(reg::DAY, &regs)
    }

    /// Write all seven timekeeping registers in one transaction
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn set_datetime(&mut self, datetime: &DateTime, encoding: Encoding) -> Result<()> {
        let mut regs = datetime.to_registers();
        apply_encoding(encoding, &mut regs);
        self.write_register(reg::SECONDS, &regs)
    }

    /// Read the control register and decode the square-wave setting
    ///
    /// Returns `Ok(None)` when the register holds a value that matches no
    /// [`SquareWave`] setting.
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn square_wave(&mut self) -> Result<Option<SquareWave>> {
        let mut raw = [0u8];
        self.read_register(reg::CONTROL, &mut raw)?;
        Ok(SquareWave::from_register(raw[0]))
    }

    /// Write the control register
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn set_square_wave(&mut self, sqw: SquareWave) -> Result<()> {
        self.write_register(reg::CONTROL, &[sqw.as_reg()])
    }

    /// Whether the oscillator is stopped (clock-halt bit set)
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn is_halted(&mut self) -> Result<bool> {
        let mut raw = [0u8];
        self.read_register(reg::SECONDS, &mut raw)?;
        Ok((raw[0] & (1u8 << bits::CH)) != 0)
    }

    /// Read general-purpose RAM starting `offset` bytes into it
    ///
    /// # Errors
    ///
    /// [`Error::DataSize`] without touching the bus if the range runs past
    /// the end of RAM; otherwise transport failures, unchanged.
    pub fn read_ram(&mut self, offset: u8, buf: &mut [u8]) -> Result<()> {
        let addr = Self::ram_addr(offset, buf.len())?;
        self.read_register(addr, buf)
    }

    /// Write general-purpose RAM starting `offset` bytes into it
    ///
    /// # Errors
    ///
    /// [`Error::DataSize`] without touching the bus if the range runs past
    /// the end of RAM; otherwise transport failures, unchanged.
    pub fn write_ram(&mut self, offset: u8, data: &[u8]) -> Result<()> {
        let addr = Self::ram_addr(offset, data.len())?;
        self.write_register(addr, data)
    }

    /// Register address of a RAM range, checked against the RAM window
    ///
    /// `offset` must name a RAM byte even when `len` is zero, so the
    /// address never leaves the register window.
    fn ram_addr(offset: u8, len: usize) -> Result<u8> {
        let offset_usize = usize::from(offset);
        if offset_usize >= RAM_SIZE || len > RAM_SIZE - offset_usize {
            return Err(Error::DataSize);
        }
        Ok(reg::RAM_START + offset)
    }

    fn mem_read(&mut self, addr: u8, buf: &mut [u8]) -> Result<()> {
        self.bus
            .mem_read(I2cAddress::DS1307, addr, buf, BUS_TIMEOUT_MS)
            .map_err(Error::from)
    }

    fn mem_write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.bus
            .mem_write(I2cAddress::DS1307, addr, data, BUS_TIMEOUT_MS)
            .map_err(Error::from)
    }
}

impl<B, D> I2cDevice for Ds1307<B, D> {
    fn address(&self) -> I2cAddress {
        I2cAddress::DS1307
    }
}
