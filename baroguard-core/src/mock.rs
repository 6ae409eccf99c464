//! Test doubles shared by the unit tests

use std::string::String;
use std::vec::Vec;

use baroguard_hal::{Clock, ToneOutput};

use crate::traits::{
    DisplayError, Led, Oversampling, PressureReading, PressureSensor, SensorError, TextDisplay,
};

const COLS: usize = 20;
const ROWS: usize = 4;

/// Scriptable pressure sensor
pub struct MockSensor {
    pub begin_result: Result<(), SensorError>,
    pub trigger_result: Result<u32, SensorError>,
    pub read_result: Result<f32, SensorError>,
    pub begin_calls: u32,
    pub start_calls: u32,
    pub read_calls: u32,
    pub last_oversampling: Option<Oversampling>,
}

impl MockSensor {
    pub fn reading(pressure_hpa: f32) -> Self {
        Self {
            begin_result: Ok(()),
            trigger_result: Ok(Oversampling::UltraHighResolution.conversion_time_ms()),
            read_result: Ok(pressure_hpa),
            begin_calls: 0,
            start_calls: 0,
            read_calls: 0,
            last_oversampling: None,
        }
    }

    pub fn absent() -> Self {
        Self {
            begin_result: Err(SensorError::NotDetected),
            ..Self::reading(0.0)
        }
    }
}

impl PressureSensor for MockSensor {
    const NAME: &'static str = "BMP180";

    fn begin(&mut self) -> Result<(), SensorError> {
        self.begin_calls += 1;
        self.begin_result
    }

    fn start_pressure(&mut self, oversampling: Oversampling) -> Result<u32, SensorError> {
        self.start_calls += 1;
        self.last_oversampling = Some(oversampling);
        self.trigger_result
    }

    fn read_pressure(&mut self) -> Result<PressureReading, SensorError> {
        self.read_calls += 1;
        self.read_result.map(|pressure_hpa| PressureReading {
            pressure_hpa,
            temperature_c: 21.5,
        })
    }
}

/// 20x4 character grid without controller address wrap
pub struct MockDisplay {
    grid: [[u8; COLS]; ROWS],
    cursor: (usize, usize),
    pub backlight: bool,
    pub init_calls: u32,
    pub writes: Vec<String>,
    pub fail: bool,
    /// Reject drawing until `init` succeeds, like a real controller
    pub require_init: bool,
    /// Number of upcoming `init` calls that fail
    pub init_failures: u32,
    initialized: bool,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            grid: [[b' '; COLS]; ROWS],
            cursor: (0, 0),
            backlight: false,
            init_calls: 0,
            writes: Vec::new(),
            fail: false,
            require_init: false,
            init_failures: 0,
            initialized: false,
        }
    }

    pub fn row(&self, row: usize) -> &str {
        core::str::from_utf8(&self.grid[row]).unwrap()
    }

    fn check(&self) -> Result<(), DisplayError> {
        if self.fail {
            Err(DisplayError::Communication)
        } else {
            Ok(())
        }
    }

    fn check_ready(&self) -> Result<(), DisplayError> {
        self.check()?;
        if self.require_init && !self.initialized {
            Err(DisplayError::NotInitialized)
        } else {
            Ok(())
        }
    }
}

impl TextDisplay for MockDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        if self.init_failures > 0 {
            self.init_failures -= 1;
            self.initialized = false;
            return Err(DisplayError::Communication);
        }
        self.init_calls += 1;
        self.initialized = true;
        self.clear()
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.check()?;
        self.backlight = on;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.grid = [[b' '; COLS]; ROWS];
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.check_ready()?;
        if col as usize >= COLS || row as usize >= ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (col as usize, row as usize);
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.writes.push(String::from(text));
        let (mut col, row) = self.cursor;
        for b in text.bytes() {
            if col < COLS {
                self.grid[row][col] = b;
            }
            col += 1;
        }
        self.cursor = (col.min(COLS), row);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS as u8, ROWS as u8)
    }
}

/// LED that counts how often it was switched on
#[derive(Default)]
pub struct MockLed {
    pub on: bool,
    pub on_count: u32,
}

impl Led for MockLed {
    fn set_on(&mut self, on: bool) {
        if on && !self.on {
            self.on_count += 1;
        }
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Speaker that records every tone change
#[derive(Default)]
pub struct MockTone {
    pub current: Option<u32>,
    pub history: Vec<Option<u32>>,
}

impl ToneOutput for MockTone {
    fn tone(&mut self, frequency_hz: u32) {
        self.current = Some(frequency_hz);
        self.history.push(self.current);
    }

    fn no_tone(&mut self) {
        self.current = None;
        self.history.push(None);
    }

    fn current_hz(&self) -> Option<u32> {
        self.current
    }
}

/// Simulated clock; delays advance time instantly
#[derive(Default)]
pub struct MockClock {
    pub now: u32,
    pub delays: Vec<u32>,
}

impl MockClock {
    pub fn starting_at(now: u32) -> Self {
        Self {
            now,
            delays: Vec::new(),
        }
    }

    pub fn total_delay(&self) -> u32 {
        self.delays.iter().sum()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.now = self.now.wrapping_add(ms);
    }
}
