//! RTC Clock Main Application
//!
//! Entry point for the STM32G474 demo firmware. Brings up I2C1, starts the
//! DS1307 and logs the date and time once per poll interval.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use ds1307_rtc::bcd::bcd_to_bin;
use ds1307_rtc::config::pins;
use ds1307_rtc::prelude::*;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("RTC Clock Firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Peripheral fields must match the `pins` table
    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PB8, // SCL
        p.PB9, // SDA
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );

    info!(
        "I2C1 initialized at {} Hz (SCL {}, SDA {}), LED on {}",
        I2C_FREQUENCY_HZ,
        pins::I2C1_SCL,
        pins::I2C1_SDA,
        pins::LED_STATUS
    );

    if let Err(e) = spawner.spawn(clock_task(i2c, led)) {
        error!("failed to spawn clock task: {}", e);
    }
}

/// Clock task - starts the RTC and logs the time, blinking the LED per read
#[embassy_executor::task]
async fn clock_task(i2c: I2c<'static, Blocking>, mut led: Output<'static>) {
    let mut rtc = Ds1307::with_diagnostics(I2cBus::new(i2c), DefmtDiagnostics);

    if let Err(e) = rtc.init(DEFAULT_SQUARE_WAVE) {
        error!("DS1307 init failed: {}", e);
        return;
    }

    match rtc.square_wave() {
        Ok(Some(sqw)) if sqw == DEFAULT_SQUARE_WAVE => {}
        Ok(other) => warn!("square wave mismatch: {}", other),
        Err(e) => warn!("square wave read-back failed: {}", e),
    }

    loop {
        led.set_high();
        match rtc.read_datetime(Encoding::Binary) {
            // Registers hold packed decimal; CH shares the seconds byte
            Ok(now) => info!(
                "20{:02}-{:02}-{:02} {:02}:{:02}:{:02}",
                bcd_to_bin(now.date.year),
                bcd_to_bin(now.date.month),
                bcd_to_bin(now.date.date),
                bcd_to_bin(now.time.hour & 0x3F),
                bcd_to_bin(now.time.minute),
                bcd_to_bin(now.time.second & 0x7F),
            ),
            Err(e) => warn!("clock read failed: {}", e),
        }
        led.set_low();

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
