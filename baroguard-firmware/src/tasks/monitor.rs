//! Pressure monitor task
//!
//! Owns every peripheral and runs the blocking monitor loop forever. The
//! sensor and the LCD share I2C1 through `RefCellDevice`; both live in this
//! task so the bus is never contended.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::Pwm;
use embassy_time::{Delay, Timer};
use embedded_hal_bus::i2c::RefCellDevice;

use baroguard_core::config::{BoardConfig, MonitorConfig, PinConfig};
use baroguard_core::monitor::{status_message, CycleReport, IndicatorPanel, InitError, Monitor};
use baroguard_core::traits::PressureSensor;
use baroguard_drivers::display::Lcd;
use baroguard_drivers::indicator::GpioLed;
use baroguard_drivers::sensor::Bmp180;
use baroguard_hal_rp2040::{EmbassyClock, PinOutput, PwmTone};

type Bus = I2c<'static, I2C1, Blocking>;
type Sensor<'a> = Bmp180<RefCellDevice<'a, Bus>, Delay>;

const SENSOR_NAME: &str = <Sensor<'static> as PressureSensor>::NAME;

/// Peripherals handed to the monitor task
pub struct MonitorHardware {
    /// I2C1, already configured for the board's bus speed
    pub i2c: Bus,
    pub green: Output<'static>,
    pub yellow: Output<'static>,
    pub red: Output<'static>,
    /// PWM slice bound to the speaker pin
    pub speaker: Pwm<'static>,
    /// PWM input clock (Hz)
    pub pwm_clock_hz: u32,
}

fn led(pin: Output<'static>, config: PinConfig) -> GpioLed<PinOutput<'static>> {
    GpioLed::new(PinOutput::new(pin), config.inverted)
}

/// Monitor loop task
#[embassy_executor::task]
pub async fn monitor_task(hw: MonitorHardware, board: BoardConfig, config: MonitorConfig) {
    let bus = RefCell::new(hw.i2c);

    let sensor: Sensor<'_> =
        Bmp180::with_address(RefCellDevice::new(&bus), Delay, board.sensor_address);
    let display = Lcd::new(RefCellDevice::new(&bus), Delay, board.lcd);

    let panel = IndicatorPanel::new(
        led(hw.green, board.green_led),
        led(hw.yellow, board.yellow_led),
        led(hw.red, board.red_led),
        PwmTone::new(hw.speaker, hw.pwm_clock_hz),
    );

    let mut monitor = Monitor::new(sensor, display, panel, EmbassyClock::new(), config);

    match monitor.init() {
        Ok(display_error) => {
            info!("{}", status_message(SENSOR_NAME, true).as_str());
            if let Some(e) = display_error {
                warn!("Display bring-up failed: {:?}; retrying each cycle", e);
            }
        }
        Err(e) => {
            error!("{}", status_message(SENSOR_NAME, false).as_str());
            if let InitError::Sensor(cause) = e {
                error!("Sensor error: {:?}", cause);
            }
            halt().await;
        }
    }

    info!(
        "Thresholds: safe >= {} hPa, warning >= {} hPa",
        config.thresholds.safe_min_hpa, config.thresholds.warning_min_hpa
    );

    loop {
        let report = monitor.run_cycle();
        log_report(&report);

        if let CycleReport::Inactive(state) = report {
            warn!("Monitor stopped in state {:?}", state);
            halt().await;
        }
    }
}

/// Emit the diagnostic lines for one cycle
fn log_report(report: &CycleReport) {
    match report {
        CycleReport::Measured {
            reading,
            zone,
            display_error,
        } => {
            info!("Pressure: {} hPa", reading.pressure_hpa);
            info!("{} ({})", zone.title(), zone.detail());
            trace!("Die temperature: {} C", reading.temperature_c);
            if let Some(e) = display_error {
                warn!("Display update failed: {:?}", e);
            }
        }
        CycleReport::MeasurementFailed(e) => {
            error!("{}", e.message());
            debug!("Sensor error: {:?}", e.sensor_error());
        }
        CycleReport::Inactive(_) => {}
    }
}

/// Park the task forever
async fn halt() -> ! {
    loop {
        Timer::after_secs(60).await;
    }
}
