//! Baroguard - Barometric Oxygen-Level Safety Indicator Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads a BMP180 pressure
//! sensor, classifies the reading into a safety zone and drives three
//! status LEDs, a 20x4 character LCD and a siren.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{Config as I2cBusConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

use baroguard_core::config::{BoardConfig, MonitorConfig};
use baroguard_hal_rp2040::{GpioAllocator, I2cConfig};

mod tasks;

/// Board wiring
///
/// Embassy peripherals are claimed by type (`p.PIN_3` ...), so `main` names
/// the pins directly. The assertion below keeps those claims and this map
/// in step; edit both together.
const BOARD: BoardConfig = BoardConfig::DEFAULT;

const _: () = assert!(
    BOARD.green_led.pin == 3
        && BOARD.yellow_led.pin == 5
        && BOARD.red_led.pin == 4
        && BOARD.speaker.pin == 8
        && BOARD.i2c_sda == 6
        && BOARD.i2c_scl == 7,
    "BOARD pin map differs from the pins claimed in main"
);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Baroguard firmware starting...");

    // Check the pin map before touching any hardware
    let mut pins = GpioAllocator::new();
    if let Err(e) = pins.allocate_all(&BOARD.gpio_pins()) {
        error!("Pin map conflict: {:?}", e);
        return;
    }
    info!("{} GPIO pins claimed", pins.allocated_count());

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Shared I2C bus for sensor and LCD (SDA=GPIO6, SCL=GPIO7)
    let bus_speed = I2cConfig::STANDARD;
    let mut i2c_config = I2cBusConfig::default();
    i2c_config.frequency = bus_speed.frequency;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c_config);
    info!("I2C1 initialized at {} Hz", bus_speed.frequency);

    // Status LEDs start dark; polarity is applied by the LED driver
    let green = Output::new(p.PIN_3, Level::Low);
    let yellow = Output::new(p.PIN_5, Level::Low);
    let red = Output::new(p.PIN_4, Level::Low);

    // Speaker on GPIO8 = PWM slice 4, channel A
    let mut pwm_config = PwmConfig::default();
    pwm_config.enable = false;
    let speaker = Pwm::new_output_a(p.PWM_SLICE4, p.PIN_8, pwm_config);
    let pwm_clock_hz = embassy_rp::clocks::clk_sys_freq();
    info!("Speaker PWM clock {} Hz", pwm_clock_hz);

    let hardware = tasks::MonitorHardware {
        i2c,
        green,
        yellow,
        red,
        speaker,
        pwm_clock_hz,
    };

    spawner
        .spawn(tasks::monitor_task(hardware, BOARD, MonitorConfig::DEFAULT))
        .unwrap();

    info!("Monitor task spawned");
}
