//! Screen buffer
//!
//! Character buffer for the 20x4 display. `render` sends dirty rows, always
//! as full padded rows so a shorter label replaces a longer one cleanly.
//! The monitor marks every row dirty each cycle with `invalidate`.

use core::fmt::Write;

use heapless::String;

use crate::safety::Zone;
use crate::traits::{DisplayError, DisplayExt, TextDisplay};

/// Number of character rows on the display
pub const SCREEN_ROWS: usize = 4;

/// Number of character columns on the display
pub const SCREEN_COLS: usize = 20;

/// Row holding the pressure value
pub const PRESSURE_ROW: usize = 0;

/// Row holding the zone headline
pub const TITLE_ROW: usize = 1;

/// Row holding the oxygen status
pub const DETAIL_ROW: usize = 2;

/// Longest status message written during initialization
const STATUS_LEN: usize = 40;

/// Format the initialization status line
///
/// Used for both the log and the display, so the two always agree.
pub fn status_message(sensor_name: &str, ok: bool) -> String<STATUS_LEN> {
    let mut msg = String::new();
    let outcome = if ok {
        "initialized successfully!"
    } else {
        "initialization failed!"
    };
    // Sensor names are short; an oversized one just truncates the message
    let _ = write!(msg, "{} {}", sensor_name, outcome);
    msg
}

/// Screen buffer for the monitor display
#[derive(Clone)]
pub struct Screen {
    /// Current content per row
    lines: [String<SCREEN_COLS>; SCREEN_ROWS],
    /// Rows changed since the last render
    dirty: [bool; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: [false; SCREEN_ROWS],
        }
    }

    /// Set the content of a specific row
    ///
    /// Text beyond the row width is dropped.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row >= SCREEN_ROWS {
            return;
        }

        let cut = text
            .char_indices()
            .nth(SCREEN_COLS)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let text = &text[..cut];

        if self.lines[row].as_str() != text {
            self.lines[row].clear();
            // Fits: at most SCREEN_COLS chars, all ASCII in practice
            let _ = self.lines[row].push_str(text);
            self.dirty[row] = true;
        }
    }

    /// Get the content of a specific row
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Lay out the pressure and zone rows
    pub fn show_zone(&mut self, pressure_hpa: f32, zone: Zone) {
        let mut pressure: String<32> = String::new();
        let _ = write!(pressure, "Pressure: {:.1} hPa", pressure_hpa);

        self.set_line(PRESSURE_ROW, &pressure);
        self.set_line(TITLE_ROW, zone.title());
        self.set_line(DETAIL_ROW, zone.detail());
    }

    /// Force every non-empty row to be re-sent on the next render
    pub fn invalidate(&mut self) {
        for (dirty, line) in self.dirty.iter_mut().zip(&self.lines) {
            *dirty = !line.is_empty();
        }
    }

    /// Check if any row needs re-sending
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&d| d)
    }

    /// Send changed rows to the display
    ///
    /// Stops at the first failed row; it and any later changed rows stay
    /// dirty and are retried on the next render.
    pub fn render<D: TextDisplay>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        for row in 0..SCREEN_ROWS {
            if self.dirty[row] {
                display.write_row(row as u8, &self.lines[row])?;
                self.dirty[row] = false;
            }
        }
        Ok(())
    }
}
