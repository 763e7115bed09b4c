// ============================================================================
// Display Module
// The answer field shared by every panel
// ============================================================================
//
// This module provides:
// - DisplayBuffer: the on-screen entry and its edit rules
// - format_number: pure result formatting (grouping, rounding, exponent)
// - CalcError: error kinds raised by key presses
//
// Design principles:
// - Text is the source of truth; values are parsed back on demand
// - Errors render as the literal "Error" and never escape a key press
// - Formatting is a pure function, testable without a display

mod buffer;
mod errors;
mod format;

#[cfg(feature = "async")]
pub mod flash;

pub use buffer::{
    DisplayBuffer, Rendered, ERROR_TEXT, GENERIC_CAPACITY, MAX_CAPACITY, SCIENTIFIC_CAPACITY,
};
pub use errors::{CalcError, CalcResult};
pub use format::{
    format_fitting, format_number, group_thousands, parse_display, DISPLAY_DECIMALS,
    GROUPED_MAX_LEN,
};
