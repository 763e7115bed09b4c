// ============================================================================
// Display Buffer
// The answer field: on-screen text plus its edit rules
// ============================================================================

use super::errors::{CalcError, CalcResult};
use super::format::{format_fitting, parse_display, SEPARATOR};
use arrayvec::ArrayString;

/// Display cap for unit-converter and currency panels
pub const GENERIC_CAPACITY: usize = 15;

/// Display cap for the scientific calculator
pub const SCIENTIFIC_CAPACITY: usize = 18;

/// Hard upper bound for any configured cap
pub const MAX_CAPACITY: usize = 31;

/// Literal text shown for every non-silent error
pub const ERROR_TEXT: &str = "Error";

/// Text backing store
type DisplayText = ArrayString<{ MAX_CAPACITY + 1 }>;

/// Outcome of writing a result with [`DisplayBuffer::set_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rendered {
    /// The new value equals the previous one numerically
    pub unchanged: bool,
    /// Generation stamp of this write (for the flash revert)
    pub generation: u64,
}

/// On-screen numeric entry shared by the calculator and every converter.
///
/// Invariant: `text` parses as a signed decimal (after removing separators)
/// or equals [`ERROR_TEXT`]. A number never holds more than `max_len`
/// characters.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    text: DisplayText,
    max_len: usize,
    signed: bool,
    point_locked: bool,
    flashing: bool,
    generation: u64,
}

impl DisplayBuffer {
    /// Create a buffer showing `"0"` with the given length cap.
    ///
    /// The cap is clamped to `1..=MAX_CAPACITY`.
    pub fn new(max_len: usize) -> Self {
        let mut text = DisplayText::new();
        text.push('0');
        Self {
            text,
            max_len: max_len.clamp(1, MAX_CAPACITY),
            signed: true,
            point_locked: false,
            flashing: false,
            generation: 0,
        }
    }

    /// Buffer with the generic converter cap
    pub fn generic() -> Self {
        Self::new(GENERIC_CAPACITY)
    }

    /// Buffer with the scientific calculator cap
    pub fn scientific() -> Self {
        Self::new(SCIENTIFIC_CAPACITY)
    }

    /// Builder method: enable or disable the sign key
    pub fn with_sign(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn is_error(&self) -> bool {
        self.text.as_str() == ERROR_TEXT
    }

    /// Whether the decimal-point key is currently accepted
    pub fn accepts_point(&self) -> bool {
        !self.point_locked
    }

    pub fn accepts_sign(&self) -> bool {
        self.signed
    }

    /// Whether the last result is being shown in the "unchanged" style
    pub fn is_flashing(&self) -> bool {
        self.flashing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ========================================================================
    // Edits
    // ========================================================================

    /// Enter a digit or decimal point.
    ///
    /// Characters other than `0-9` and `.` are ignored. A buffer showing
    /// `"Error"` starts a fresh entry.
    ///
    /// # Errors
    /// Returns `Capacity` when the text already holds `max_len` characters,
    /// or when a digit would push an exponent out of range.
    pub fn update(&mut self, key: char) -> CalcResult<()> {
        if !(key.is_ascii_digit() || key == '.') {
            tracing::trace!(key = %key, "ignoring non-keypad character");
            return Ok(());
        }

        self.touch();
        if self.is_error() {
            self.reset();
        }
        if self.text.len() >= self.max_len {
            return Err(CalcError::Capacity);
        }

        if key == '.' {
            if !self.point_locked {
                self.push(key)?;
                self.point_locked = true;
            }
            return Ok(());
        }

        match self.text.as_str() {
            "-0" => {
                self.text.truncate(1);
                self.push(key)
            },
            "0" if key == '0' => Ok(()),
            "0" => {
                self.text.clear();
                self.push(key)
            },
            _ => self.push_digit(key),
        }
    }

    /// Toggle the sign of the entry.
    ///
    /// # Errors
    /// Returns `Capacity` when a full display has no room for the sign.
    pub fn negative(&mut self) -> CalcResult<()> {
        if !self.signed || self.is_error() {
            return Ok(());
        }

        if self.text.starts_with('-') {
            self.touch();
            self.text.remove(0);
            return Ok(());
        }
        if self.text.len() >= self.max_len {
            return Err(CalcError::Capacity);
        }

        self.touch();
        let mut signed = DisplayText::new();
        signed.push('-');
        signed
            .try_push_str(self.text.as_str())
            .map_err(|_| CalcError::Capacity)?;
        self.text = signed;
        Ok(())
    }

    /// Remove the last character; a single character behaves like `clear`.
    pub fn delete(&mut self) {
        if self.text.len() <= 1 || self.is_error() {
            self.clear();
            return;
        }

        self.touch();
        self.text.pop();
        // A dangling separator, sign or exponent marker is not a number
        while self.text.ends_with(&[SEPARATOR, '+', '-', 'e'][..]) {
            self.text.pop();
        }
        if self.text.is_empty() {
            self.reset();
        }
        if !self.text.contains('.') {
            self.point_locked = false;
        }
    }

    /// Reset to `"0"` and re-enable the decimal point.
    pub fn clear(&mut self) {
        self.touch();
        self.reset();
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Parse the display without touching it.
    pub fn parse_value(&self) -> CalcResult<f64> {
        parse_display(self.text.as_str())
    }

    /// Parse the display, replacing it with `"Error"` on failure.
    pub fn get_value(&mut self) -> CalcResult<f64> {
        self.parse_value().map_err(|err| {
            self.show_error();
            err
        })
    }

    /// Render `value` as the new display text.
    ///
    /// `previous` is only used to flag an unchanged result; the caller
    /// styles the display with [`Rendered::unchanged`] and later calls
    /// [`DisplayBuffer::revert_flash`] with the returned generation.
    ///
    /// A result too wide for the cap switches to exponential notation.
    ///
    /// # Errors
    /// Returns `Domain` (and shows `"Error"`) for non-finite values and for
    /// values the display is too narrow to show.
    pub fn set_text(&mut self, previous: f64, value: f64) -> CalcResult<Rendered> {
        let text = match format_fitting(value, self.max_len)
            .and_then(|formatted| DisplayText::from(&formatted).map_err(|_| CalcError::Domain))
        {
            Ok(text) => text,
            Err(err) => {
                self.show_error();
                return Err(err);
            },
        };

        self.touch();
        self.point_locked = text.contains('.');
        self.text = text;

        #[allow(clippy::float_cmp)]
        let unchanged = value == previous;
        self.flashing = unchanged;

        Ok(Rendered {
            unchanged,
            generation: self.generation,
        })
    }

    /// Replace the text with `"Error"`.
    pub fn show_error(&mut self) {
        self.touch();
        self.text.clear();
        self.text.push_str(ERROR_TEXT);
        self.point_locked = false;
    }

    /// Leave the "unchanged" style if no newer write happened since `generation`.
    ///
    /// Returns true if the style was reverted.
    pub fn revert_flash(&mut self, generation: u64) -> bool {
        if self.flashing && self.generation == generation {
            self.flashing = false;
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.flashing = false;
    }

    fn reset(&mut self) {
        self.text.clear();
        self.text.push('0');
        self.point_locked = false;
    }

    fn push(&mut self, key: char) -> CalcResult<()> {
        self.text.try_push(key).map_err(|_| CalcError::Capacity)
    }

    /// Append a digit, refusing one that overflows an exponent
    fn push_digit(&mut self, key: char) -> CalcResult<()> {
        self.push(key)?;
        if self.text.contains('e') && self.parse_value().is_err() {
            self.text.pop();
            return Err(CalcError::Capacity);
        }
        Ok(())
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::generic()
    }
}
