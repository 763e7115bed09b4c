// ============================================================================
// Engine Module
// Contains the calculator, converters and the panel registry
// ============================================================================

mod calculator;
mod converter;
mod date;
mod panel;
mod registry;

pub mod currency;
pub mod factory;

pub use calculator::{EngineState, ScientificCalculator};
pub use converter::{TemperatureConverter, UnitConverter};
pub use currency::{CurrencyConverter, CURRENCY_CODES};
pub use date::{DateCalculator, DATE_FORMAT, SAME_DATES};
pub use factory::{create_from_config, RegistryBuilder};
pub use panel::{KeyOutcome, Panel};
pub use registry::{Events, PanelRegistry, Screen};
