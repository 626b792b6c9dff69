//! Shared test doubles
//!
//! `MockBus` stands in for the I2C transport: a 64-byte register file,
//! a log of every transaction, and scripted failures.

#![allow(dead_code)]

use ds1307_rtc::diagnostics::{DiagnosticEvent, Diagnostics};
use ds1307_rtc::hal::i2c::{BusError, I2cAddress, I2cResult, RegisterBus};

/// One recorded bus transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BusOp {
    /// Register read
    Read {
        device: u8,
        reg: u8,
        len: usize,
        timeout_ms: u32,
    },
    /// Register write
    Write {
        device: u8,
        reg: u8,
        data: Vec<u8>,
        timeout_ms: u32,
    },
}

impl BusOp {
    /// Register address the operation targeted
    pub fn reg(&self) -> u8 {
        match self {
            Self::Read { reg, .. } | Self::Write { reg, .. } => *reg,
        }
    }
}

/// In-memory register file with a transaction log
pub struct MockBus {
    /// Register contents
    pub regs: [u8; 64],
    /// Every transaction, in order
    pub log: Vec<BusOp>,
    /// (operation index, error) pairs to fail
    failures: Vec<(usize, BusError)>,
    /// Registers whose reads ignore writes
    stuck: Vec<(u8, u8)>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            regs: [0; 64],
            log: Vec::new(),
            failures: Vec::new(),
            stuck: Vec::new(),
        }
    }

    /// Start with `values` loaded at `reg`
    pub fn with_registers(reg: u8, values: &[u8]) -> Self {
        let mut bus = Self::new();
        let start = usize::from(reg);
        bus.regs[start..start + values.len()].copy_from_slice(values);
        bus
    }

    /// Fail the `index`-th transaction (0-based) with `err`
    pub fn fail_op(mut self, index: usize, err: BusError) -> Self {
        self.failures.push((index, err));
        self
    }

    /// Always read `value` from `reg`
    pub fn stick(mut self, reg: u8, value: u8) -> Self {
        self.stuck.push((reg, value));
        self
    }

    fn scripted_failure(&self) -> Option<BusError> {
        let index = self.log.len() - 1;
        self.failures
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, err)| *err)
    }

    fn read_reg(&self, reg: usize) -> u8 {
        let reg = reg % self.regs.len();
        self.stuck
            .iter()
            .find(|(r, _)| usize::from(*r) == reg)
            .map_or(self.regs[reg], |(_, v)| *v)
    }
}

impl RegisterBus for MockBus {
    fn mem_read(
        &mut self,
        device: I2cAddress,
        reg: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> I2cResult<()> {
        self.log.push(BusOp::Read {
            device: device.addr(),
            reg,
            len: buf.len(),
            timeout_ms,
        });
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.read_reg(usize::from(reg) + i);
        }
        Ok(())
    }

    fn mem_write(
        &mut self,
        device: I2cAddress,
        reg: u8,
        data: &[u8],
        timeout_ms: u32,
    ) -> I2cResult<()> {
        self.log.push(BusOp::Write {
            device: device.addr(),
            reg,
            data: data.to_vec(),
            timeout_ms,
        });
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        for (i, byte) in data.iter().enumerate() {
            let idx = (usize::from(reg) + i) % self.regs.len();
            self.regs[idx] = *byte;
        }
        Ok(())
    }
}

/// Collects every diagnostic event
#[derive(Default)]
pub struct RecordingDiagnostics {
    pub events: Vec<DiagnosticEvent>,
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&mut self, event: &DiagnosticEvent) {
        self.events.push(*event);
    }
}
