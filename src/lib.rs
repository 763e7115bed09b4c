// ============================================================================
// Calculatory Library
// Keypad calculator core with scientific functions and unit converters
// ============================================================================

//! # Calculatory
//!
//! The state machines behind a keypad calculator application: a display
//! buffer with strict edit rules, a scientific calculator with chained
//! equals, and a set of unit-conversion panels.
//!
//! ## Features
//!
//! - **Display buffer** shared by every panel (digit entry, sign, delete,
//!   length caps, "Error" state)
//! - **Scientific calculator** with lazy binary operators, repeated `=`,
//!   unary functions and constants
//! - **Unit converters** for volume, length, mass, energy, area, speed,
//!   time, power, data, pressure, angle and temperature
//! - **Panel registry** keeping every panel alive across navigation
//! - **Event handlers** that observe text changes, errors and flashes
//!
//! ## Example
//!
//! ```rust
//! use calculatory::prelude::*;
//! use std::sync::Arc;
//!
//! let mut registry = RegistryBuilder::new()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! // 5 + 3 = = =
//! registry.press_str("5+3=");
//! assert_eq!(registry.active().unwrap().display(), "8");
//! registry.press(Key::Equal);
//! registry.press(Key::Equal);
//! assert_eq!(registry.active().unwrap().display(), "14");
//!
//! // Convert 100 Celsius to Kelvin
//! registry.show(PanelKind::TemperatureConverter);
//! registry.panel_mut(PanelKind::TemperatureConverter).unwrap().set_units("Celsius", "Kelvin");
//! registry.press_str("100=");
//! assert_eq!(registry.active().unwrap().display(), "373.15");
//! ```

pub mod display;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::display::{CalcError, CalcResult, DisplayBuffer, Rendered};
    pub use crate::domain::{
        AppConfig, BinaryOperator, ConfigError, Constant, ConversionTable, Key, PanelConfig,
        PanelKind, ScientificFunction, TemperatureScale,
    };
    pub use crate::engine::{
        create_from_config, CurrencyConverter, DateCalculator, EngineState, KeyOutcome, Panel,
        PanelRegistry, RegistryBuilder, ScientificCalculator, Screen, TemperatureConverter,
        UnitConverter,
    };
    pub use crate::interfaces::{
        DisplayEvent, EventHandler, FixedRates, Keypad, LoggingEventHandler, NoOpEventHandler,
        RateError, RateProvider, UnavailableRates,
    };
}
