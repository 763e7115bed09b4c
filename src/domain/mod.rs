// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod currency;
pub mod key;
pub mod operation;
pub mod panel;
pub mod temperature;
pub mod units;

pub use config::{AppConfig, ConfigError, PanelConfig, DEFAULT_FLASH_DURATION_MS};
pub use currency::CURRENCY_CODES;
pub use key::Key;
pub use operation::{BinaryOperator, Constant, ScientificFunction};
pub use panel::PanelKind;
pub use temperature::TemperatureScale;
pub use units::ConversionTable;
