// ============================================================================
// Keypad Interface
// Shared numeric keypad behaviour, composed over a DisplayBuffer
// ============================================================================

use crate::display::{CalcResult, DisplayBuffer, Rendered};

/// Numeric keypad bound to one display.
///
/// Every numeric panel owns a [`DisplayBuffer`] and implements `equal`; the
/// edit keys default to the buffer's own rules. The scientific calculator
/// overrides `update` and `clear` to involve its operator state.
pub trait Keypad {
    fn buffer(&self) -> &DisplayBuffer;

    fn buffer_mut(&mut self) -> &mut DisplayBuffer;

    /// Evaluate the panel and render the result.
    ///
    /// Returns `Ok(None)` when the key had nothing to evaluate.
    fn equal(&mut self) -> CalcResult<Option<Rendered>>;

    /// Current display text
    fn display(&self) -> &str {
        self.buffer().text()
    }

    /// Enter a digit or decimal point
    fn update(&mut self, key: char) -> CalcResult<()> {
        self.buffer_mut().update(key)
    }

    /// `+/-`
    fn negative(&mut self) -> CalcResult<()> {
        self.buffer_mut().negative()
    }

    /// `AC`
    fn clear(&mut self) {
        self.buffer_mut().clear();
    }

    /// `<`
    fn delete(&mut self) {
        self.buffer_mut().delete();
    }
}
