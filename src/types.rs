//! Shared types used across the RTC driver
//!
//! Date and time values are plain register-sized fields. The driver does
//! not range-check them: whether a field holds a binary value or a
//! packed-decimal one depends on the [`Encoding`] used to read or write it.

/// Wall-clock time as stored in the seconds/minutes/hours registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Time {
    /// Hours (0-23 in binary)
    pub hour: u8,
    /// Minutes (0-59 in binary)
    pub minute: u8,
    /// Seconds (0-59 in binary)
    pub second: u8,
}

impl Time {
    /// Create a time from its fields
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Fields in register order (seconds first)
    #[must_use]
    pub const fn to_registers(self) -> [u8; 3] {
        [self.second, self.minute, self.hour]
    }

    /// Build from register bytes in register order (seconds first)
    #[must_use]
    pub const fn from_registers(regs: [u8; 3]) -> Self {
        Self {
            second: regs[0],
            minute: regs[1],
            hour: regs[2],
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Time {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}:{}:{}", self.hour, self.minute, self.second);
    }
}

/// Calendar date as stored in the day/date/month/year registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Date {
    /// Day of week (1-7)
    pub day: u8,
    /// Day of month (1-31)
    pub date: u8,
    /// Month (1-12)
    pub month: u8,
    /// Last two digits of the year (0-99)
    pub year: u8,
}

impl Date {
    /// Create a date from its fields
    #[must_use]
    pub const fn new(day: u8, date: u8, month: u8, year: u8) -> Self {
        Self {
            day,
            date,
            month,
            year,
        }
    }

    /// Fields in register order (day of week first)
    #[must_use]
    pub const fn to_registers(self) -> [u8; 4] {
        [self.day, self.date, self.month, self.year]
    }

    /// Build from register bytes in register order
    #[must_use]
    pub const fn from_registers(regs: [u8; 4]) -> Self {
        Self {
            day: regs[0],
            date: regs[1],
            month: regs[2],
            year: regs[3],
        }
    }

    /// Decode the day-of-week field
    #[must_use]
    pub const fn weekday(self) -> Option<Weekday> {
        Weekday::from_register(self.day)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Date {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Day: {} Date: {}-{}-{}",
            self.day,
            self.date,
            self.month,
            self.year
        );
    }
}

/// Date and time read or written together
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// Calendar part
    pub date: Date,
    /// Clock part
    pub time: Time,
}

impl DateTime {
    /// Combine a date and a time
    #[must_use]
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// All seven timekeeping registers, seconds first
    #[must_use]
    pub const fn to_registers(self) -> [u8; 7] {
        let t = self.time.to_registers();
        let d = self.date.to_registers();
        [t[0], t[1], t[2], d[0], d[1], d[2], d[3]]
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DateTime {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} {}", self.date, self.time);
    }
}

/// How register bytes are presented to the caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Raw register bytes, passed through unchanged
    #[default]
    Binary,
    /// Each byte converted with [`crate::bcd::bin_to_bcd`]
    PackedDecimal,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Encoding {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Binary => defmt::write!(f, "BIN"),
            Self::PackedDecimal => defmt::write!(f, "BCD"),
        }
    }
}

/// Square-wave output setting (control register value)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SquareWave {
    /// 1 Hz square wave
    #[default]
    Hz1 = 0x10,
    /// 4.096 kHz square wave
    Hz4096 = 0x11,
    /// 8.192 kHz square wave
    Hz8192 = 0x12,
    /// 32.768 kHz square wave
    Hz32768 = 0x13,
    /// No square wave, SQW/OUT pin held high
    OffHigh = 0x80,
    /// No square wave, SQW/OUT pin held low
    OffLow = 0x00,
}

impl SquareWave {
    /// All supported settings
    pub const ALL: [Self; 6] = [
        Self::Hz1,
        Self::Hz4096,
        Self::Hz8192,
        Self::Hz32768,
        Self::OffHigh,
        Self::OffLow,
    ];

    /// Control register value for this setting
    #[must_use]
    pub const fn as_reg(self) -> u8 {
        self as u8
    }

    /// Decode a control register value, `None` if it matches no setting
    #[must_use]
    pub const fn from_register(value: u8) -> Option<Self> {
        match value {
            0x10 => Some(Self::Hz1),
            0x11 => Some(Self::Hz4096),
            0x12 => Some(Self::Hz8192),
            0x13 => Some(Self::Hz32768),
            0x80 => Some(Self::OffHigh),
            0x00 => Some(Self::OffLow),
            _ => None,
        }
    }

    /// Output frequency in Hz, `None` when the oscillator output is off
    #[must_use]
    pub const fn frequency_hz(self) -> Option<u32> {
        match self {
            Self::Hz1 => Some(1),
            Self::Hz4096 => Some(4096),
            Self::Hz8192 => Some(8192),
            Self::Hz32768 => Some(32_768),
            Self::OffHigh | Self::OffLow => None,
        }
    }

    /// Human-readable description of the setting
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Hz1 => "1Hz square wave output",
            Self::Hz4096 => "4.096kHz square wave output",
            Self::Hz8192 => "8.192kHz square wave output",
            Self::Hz32768 => "32.768kHz square wave output",
            Self::OffHigh => "no square wave output, SQW/OUT pin high",
            Self::OffLow => "no square wave output, SQW/OUT pin low",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SquareWave {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.description());
    }
}

/// Day of week as numbered by the day register
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Sunday
    Sunday = 1,
    /// Monday
    Monday = 2,
    /// Tuesday
    Tuesday = 3,
    /// Wednesday
    Wednesday = 4,
    /// Thursday
    Thursday = 5,
    /// Friday
    Friday = 6,
    /// Saturday
    Saturday = 7,
}

impl Weekday {
    /// Decode a day register value (1-7)
    #[must_use]
    pub const fn from_register(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            7 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Day register value
    #[must_use]
    pub const fn as_reg(self) -> u8 {
        self as u8
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Weekday {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Sunday => defmt::write!(f, "Sun"),
            Self::Monday => defmt::write!(f, "Mon"),
            Self::Tuesday => defmt::write!(f, "Tue"),
            Self::Wednesday => defmt::write!(f, "Wed"),
            Self::Thursday => defmt::write!(f, "Thu"),
            Self::Friday => defmt::write!(f, "Fri"),
            Self::Saturday => defmt::write!(f, "Sat"),
        }
    }
}
