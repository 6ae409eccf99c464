//! Character display trait

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Communication,
    /// Row or column outside the display
    InvalidCoordinates,
    /// Display used before `init`
    NotInitialized,
}

/// Trait for character-grid text displays
///
/// Write-only: there is no read-back of display contents.
pub trait TextDisplay {
    /// Run the controller power-on sequence and clear the screen
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Switch the backlight
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Clear the entire screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column number (0-based)
    /// - `row`: Row number (0-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor, advancing it
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Display size as (columns, rows)
    fn dimensions(&self) -> (u8, u8);
}

/// Blank row used for padding
const BLANK: &str = "                                        ";

/// Helpers for drawing whole rows
pub trait DisplayExt: TextDisplay {
    /// Write text starting at a position
    fn print_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.write_str(text)
    }

    /// Replace a full row: text is truncated to the row width and the
    /// remainder is filled with spaces
    fn write_row(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        let cols = self.dimensions().0 as usize;
        let cut = text
            .char_indices()
            .nth(cols)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let text = &text[..cut];
        let used = text.chars().count();

        self.print_at(row, 0, text)?;

        let pad = cols.saturating_sub(used).min(BLANK.len());
        if pad > 0 {
            self.write_str(&BLANK[..pad])?;
        }
        Ok(())
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay> DisplayExt for T {}
