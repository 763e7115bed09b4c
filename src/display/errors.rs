// ============================================================================
// Display Errors
// Error kinds raised while editing or evaluating the display
// ============================================================================

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while a key press is handled.
///
/// Every kind except `Capacity` is rendered as the literal display text
/// `"Error"`. `Capacity` is swallowed: the key press simply has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Display text is not a valid number
    #[error("invalid input: display text is not a number")]
    Parse,
    /// Function input outside its mathematical domain
    #[error("domain error: input outside the function's domain")]
    Domain,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Input would exceed the display length cap
    #[error("display is full")]
    Capacity,
}

impl CalcError {
    /// Returns true for errors that must not change the display.
    pub fn is_silent(&self) -> bool {
        matches!(self, CalcError::Capacity)
    }
}

/// Result type alias for display and engine operations
pub type CalcResult<T> = Result<T, CalcError>;
