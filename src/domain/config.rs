// ============================================================================
// Application Configuration
// Which panels exist, how their displays behave and where the app starts
// ============================================================================

use super::currency::currency_code;
use super::panel::PanelKind;
use super::temperature::TemperatureScale;
use super::units::ConversionTable;
use crate::display::{GENERIC_CAPACITY, MAX_CAPACITY, SCIENTIFIC_CAPACITY};
use std::collections::HashSet;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delay before an "unchanged result" flash reverts
pub const DEFAULT_FLASH_DURATION_MS: u64 = 100;

/// Errors raised while validating a configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("configuration lists no panels")]
    NoPanels,
    #[error("panel {0} is configured more than once")]
    DuplicatePanel(PanelKind),
    #[error("start panel {0} is not configured")]
    MissingStartPanel(PanelKind),
    #[error("panel {panel}: display length {max_length} outside 1..={max}", max = MAX_CAPACITY)]
    InvalidCapacity { panel: PanelKind, max_length: usize },
    #[error("panel {panel}: unknown unit {unit:?}")]
    UnknownUnit { panel: PanelKind, unit: String },
    #[error("panel {0} has no unit selectors")]
    UnitsNotSupported(PanelKind),
}

// ============================================================================
// Panel Configuration
// ============================================================================

/// Display and selector settings for one panel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Panel this entry configures
    pub kind: PanelKind,

    /// Display length cap, separators included
    pub max_length: usize,

    /// Whether the `+/-` key is enabled
    pub allow_negative: bool,

    /// Optional: initial "from" unit (None = panel default)
    pub from_unit: Option<String>,

    /// Optional: initial "to" unit (None = panel default)
    pub to_unit: Option<String>,
}

impl PanelConfig {
    /// Defaults matching the stock application for `kind`
    pub fn for_kind(kind: PanelKind) -> Self {
        let max_length = match kind {
            PanelKind::Calculator => SCIENTIFIC_CAPACITY,
            _ => GENERIC_CAPACITY,
        };
        let allow_negative = matches!(
            kind,
            PanelKind::Calculator
                | PanelKind::TemperatureConverter
                | PanelKind::PowerConverter
                | PanelKind::AngleConverter
        );

        Self {
            kind,
            max_length,
            allow_negative,
            from_unit: None,
            to_unit: None,
        }
    }

    /// Builder method: set the display length cap
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Builder method: enable or disable the sign key
    pub fn with_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    /// Builder method: set the initial unit pair
    pub fn with_units(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_unit = Some(from.into());
        self.to_unit = Some(to.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length == 0 || self.max_length > MAX_CAPACITY {
            return Err(ConfigError::InvalidCapacity {
                panel: self.kind,
                max_length: self.max_length,
            });
        }

        for unit in [&self.from_unit, &self.to_unit].into_iter().flatten() {
            if !unit_exists(self.kind, unit)? {
                return Err(ConfigError::UnknownUnit {
                    panel: self.kind,
                    unit: unit.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Whether `unit` is selectable on `panel`; errors for panels without selectors.
pub(crate) fn unit_exists(panel: PanelKind, unit: &str) -> Result<bool, ConfigError> {
    if let Some(table) = ConversionTable::for_panel(panel) {
        return Ok(table.contains(unit));
    }
    match panel {
        PanelKind::TemperatureConverter => Ok(TemperatureScale::from_name(unit).is_some()),
        PanelKind::CurrencyConverter => Ok(currency_code(unit).is_some()),
        _ => Err(ConfigError::UnitsNotSupported(panel)),
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Complete configuration for building the panel registry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppConfig {
    /// Panels created at startup, in menu order
    pub panels: Vec<PanelConfig>,

    /// Panel shown first
    pub start_panel: PanelKind,

    /// Delay before an "unchanged result" flash reverts
    pub flash_duration_ms: u64,
}

impl AppConfig {
    pub fn new(panels: Vec<PanelConfig>, start_panel: PanelKind) -> Self {
        Self {
            panels,
            start_panel,
            flash_duration_ms: DEFAULT_FLASH_DURATION_MS,
        }
    }

    /// Builder method: add or replace a panel entry
    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        match self.panels.iter_mut().find(|p| p.kind == panel.kind) {
            Some(existing) => *existing = panel,
            None => self.panels.push(panel),
        }
        self
    }

    /// Builder method: set the start panel
    pub fn with_start_panel(mut self, start_panel: PanelKind) -> Self {
        self.start_panel = start_panel;
        self
    }

    /// Builder method: set the flash revert delay
    pub fn with_flash_duration_ms(mut self, flash_duration_ms: u64) -> Self {
        self.flash_duration_ms = flash_duration_ms;
        self
    }

    /// Configuration entry for `kind`, if present
    pub fn panel(&self, kind: PanelKind) -> Option<&PanelConfig> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panels.is_empty() {
            return Err(ConfigError::NoPanels);
        }

        let mut seen = HashSet::new();
        for panel in &self.panels {
            if !seen.insert(panel.kind) {
                return Err(ConfigError::DuplicatePanel(panel.kind));
            }
            panel.validate()?;
        }

        if !seen.contains(&self.start_panel) {
            return Err(ConfigError::MissingStartPanel(self.start_panel));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl AppConfig {
    /// Stock application
    /// - All 15 panels in menu order
    /// - Starts on the scientific calculator
    pub fn standard() -> Self {
        Self::new(
            PanelKind::ALL.into_iter().map(PanelConfig::for_kind).collect(),
            PanelKind::Calculator,
        )
    }

    /// Scientific calculator alone
    pub fn calculator_only() -> Self {
        Self::new(
            vec![PanelConfig::for_kind(PanelKind::Calculator)],
            PanelKind::Calculator,
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::standard()
    }
}
