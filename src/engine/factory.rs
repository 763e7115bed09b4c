// ============================================================================
// Registry Factory
// Creates the panel registry with proper configuration
// ============================================================================

use super::panel::Panel;
use super::registry::PanelRegistry;
use crate::domain::{AppConfig, ConfigError, PanelConfig, PanelKind};
use crate::interfaces::{EventHandler, RateProvider, UnavailableRates};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a panel registry from configuration
///
/// # Arguments
/// * `config` - Application configuration
/// * `event_handler` - Event handler for display events
/// * `rates` - Exchange-rate source for the currency panel
///
/// # Example
/// ```
/// use calculatory::prelude::*;
/// use std::sync::Arc;
///
/// let registry = create_from_config(
///     AppConfig::standard(),
///     Arc::new(NoOpEventHandler),
///     Arc::new(UnavailableRates),
/// )
/// .unwrap();
/// assert_eq!(registry.menu().len(), 15);
/// ```
pub fn create_from_config(
    config: AppConfig,
    event_handler: Arc<dyn EventHandler>,
    rates: Arc<dyn RateProvider>,
) -> Result<PanelRegistry, ConfigError> {
    // Validate configuration first
    if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "rejected configuration");
        return Err(err);
    }

    let mut panels = HashMap::with_capacity(config.panels.len());
    for panel_config in &config.panels {
        panels.insert(panel_config.kind, Panel::from_config(panel_config, &rates)?);
    }
    let order = config.panels.iter().map(|panel| panel.kind).collect();

    tracing::debug!(
        panels = panels.len(),
        start = %config.start_panel,
        rates = rates.name(),
        "panel registry created"
    );

    Ok(PanelRegistry::new(
        order,
        panels,
        config.start_panel,
        event_handler,
        Duration::from_millis(config.flash_duration_ms),
    ))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating panel registries with fluent API
///
/// # Example
/// ```
/// use calculatory::prelude::*;
/// use std::sync::Arc;
///
/// let registry = RegistryBuilder::new()
///     .with_units(PanelKind::LengthConverter, "Miles", "Kilometers")
///     .start_on(PanelKind::LengthConverter)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(registry.screen(), Screen::Panel(PanelKind::LengthConverter));
/// ```
pub struct RegistryBuilder {
    config: AppConfig,
    rates: Arc<dyn RateProvider>,
}

impl RegistryBuilder {
    /// Start from the standard application
    pub fn new() -> Self {
        Self::from_config(AppConfig::standard())
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config,
            rates: Arc::new(UnavailableRates),
        }
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the calculator-only preset
    pub fn calculator_only() -> Self {
        Self::from_config(AppConfig::calculator_only())
    }

    // ========================================================================
    // Panel Configuration
    // ========================================================================

    /// Add or replace a panel
    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.config = self.config.with_panel(panel);
        self
    }

    /// Set the initial unit pair of a panel (added with defaults if missing)
    pub fn with_units(mut self, kind: PanelKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        let entry = self.entry(kind);
        entry.from_unit = Some(from.into());
        entry.to_unit = Some(to.into());
        self
    }

    /// Set the display length cap of a panel (added with defaults if missing)
    pub fn with_max_length(mut self, kind: PanelKind, max_length: usize) -> Self {
        self.entry(kind).max_length = max_length;
        self
    }

    /// Set the start panel
    pub fn start_on(mut self, kind: PanelKind) -> Self {
        self.config.start_panel = kind;
        self
    }

    /// Set the flash revert delay
    pub fn with_flash_duration_ms(mut self, flash_duration_ms: u64) -> Self {
        self.config.flash_duration_ms = flash_duration_ms;
        self
    }

    /// Set the exchange-rate source
    pub fn with_rates(mut self, rates: Arc<dyn RateProvider>) -> Self {
        self.rates = rates;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the panel registry
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<PanelRegistry, ConfigError> {
        create_from_config(self.config, event_handler, self.rates)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    fn entry(&mut self, kind: PanelKind) -> &mut PanelConfig {
        let index = match self.config.panels.iter().position(|panel| panel.kind == kind) {
            Some(index) => index,
            None => {
                self.config.panels.push(PanelConfig::for_kind(kind));
                self.config.panels.len() - 1
            },
        };
        &mut self.config.panels[index]
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
