// ============================================================================
// Panels
// One screen of the application and its key dispatch
// ============================================================================

use super::calculator::ScientificCalculator;
use super::converter::{TemperatureConverter, UnitConverter};
use super::currency::{CurrencyConverter, CURRENCY_CODES};
use super::date::DateCalculator;
use crate::display::{CalcError, CalcResult, DisplayBuffer, Rendered};
use crate::domain::config::unit_exists;
use crate::domain::{ConfigError, ConversionTable, Key, PanelConfig, PanelKind, TemperatureScale};
use crate::interfaces::{Keypad, RateProvider};
use std::sync::Arc;

/// What a key press did to its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key accepted; the entry may have changed
    Edited,
    /// A result was written to the display
    Rendered(Rendered),
    /// Key has no effect on this panel in its current state
    Ignored,
    /// Key failed; the display shows "Error" unless the error is silent
    Failed(CalcError),
}

impl KeyOutcome {
    fn from_edit(result: CalcResult<()>) -> Self {
        match result {
            Ok(()) => KeyOutcome::Edited,
            Err(err) => KeyOutcome::Failed(err),
        }
    }

    fn from_render(result: CalcResult<Option<Rendered>>) -> Self {
        match result {
            Ok(Some(rendered)) => KeyOutcome::Rendered(rendered),
            Ok(None) => KeyOutcome::Ignored,
            Err(err) => KeyOutcome::Failed(err),
        }
    }
}

/// A panel instance owned by the registry
#[derive(Debug)]
pub enum Panel {
    Calculator(ScientificCalculator),
    Date(DateCalculator),
    Currency(CurrencyConverter),
    Temperature(TemperatureConverter),
    Unit(UnitConverter),
}

impl Panel {
    /// Build a panel from its configuration.
    ///
    /// # Errors
    /// Returns the configuration's validation error.
    pub fn from_config(config: &PanelConfig, rates: &Arc<dyn RateProvider>) -> Result<Self, ConfigError> {
        config.validate()?;

        let buffer = DisplayBuffer::new(config.max_length).with_sign(config.allow_negative);
        let mut panel = match config.kind {
            PanelKind::Calculator => Panel::Calculator(ScientificCalculator::with_buffer(buffer)),
            PanelKind::DateCalculator => Panel::Date(DateCalculator::new()),
            PanelKind::CurrencyConverter => {
                Panel::Currency(CurrencyConverter::with_buffer(Arc::clone(rates), buffer))
            },
            PanelKind::TemperatureConverter => {
                Panel::Temperature(TemperatureConverter::with_buffer(buffer))
            },
            kind => {
                let table = ConversionTable::for_panel(kind).ok_or(ConfigError::UnitsNotSupported(kind))?;
                Panel::Unit(UnitConverter::with_buffer(table, buffer))
            },
        };

        if let Some((default_from, default_to)) = panel.units() {
            let from = config.from_unit.as_deref().unwrap_or(default_from);
            let to = config.to_unit.as_deref().unwrap_or(default_to);
            panel.select_units(from, to)?;
        }

        Ok(panel)
    }

    /// `set_units` for configured names; an unknown name is a configuration error.
    fn select_units(&mut self, from: &str, to: &str) -> Result<(), ConfigError> {
        if self.set_units(from, to) {
            return Ok(());
        }

        let kind = self.kind();
        let unknown = match unit_exists(kind, from) {
            Ok(true) => to,
            _ => from,
        };
        tracing::warn!(panel = %kind, unit = unknown, "configured unit not selectable");
        Err(ConfigError::UnknownUnit {
            panel: kind,
            unit: unknown.to_string(),
        })
    }

    pub fn kind(&self) -> PanelKind {
        match self {
            Panel::Calculator(_) => PanelKind::Calculator,
            Panel::Date(_) => PanelKind::DateCalculator,
            Panel::Currency(_) => PanelKind::CurrencyConverter,
            Panel::Temperature(_) => PanelKind::TemperatureConverter,
            Panel::Unit(converter) => converter.table().panel,
        }
    }

    /// Display text, or the result line of the date calculator
    pub fn display(&self) -> &str {
        match self {
            Panel::Date(date) => date.result(),
            _ => self.keypad().map_or("", |keypad| keypad.display()),
        }
    }

    pub fn keypad(&self) -> Option<&dyn Keypad> {
        match self {
            Panel::Calculator(calc) => Some(calc),
            Panel::Currency(currency) => Some(currency),
            Panel::Temperature(temperature) => Some(temperature),
            Panel::Unit(converter) => Some(converter),
            Panel::Date(_) => None,
        }
    }

    pub fn keypad_mut(&mut self) -> Option<&mut dyn Keypad> {
        match self {
            Panel::Calculator(calc) => Some(calc),
            Panel::Currency(currency) => Some(currency),
            Panel::Temperature(temperature) => Some(temperature),
            Panel::Unit(converter) => Some(converter),
            Panel::Date(_) => None,
        }
    }

    pub fn as_calculator(&self) -> Option<&ScientificCalculator> {
        match self {
            Panel::Calculator(calc) => Some(calc),
            _ => None,
        }
    }

    pub fn as_date_mut(&mut self) -> Option<&mut DateCalculator> {
        match self {
            Panel::Date(date) => Some(date),
            _ => None,
        }
    }

    // ========================================================================
    // Unit selectors
    // ========================================================================

    /// Selected (from, to) pair for panels with unit selectors
    pub fn units(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Panel::Unit(converter) => Some(converter.units()),
            Panel::Temperature(temperature) => {
                let (from, to) = temperature.scales();
                Some((from.name(), to.name()))
            },
            Panel::Currency(currency) => Some(currency.currencies()),
            Panel::Calculator(_) | Panel::Date(_) => None,
        }
    }

    /// Selector entries in display order (empty without selectors)
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self {
            Panel::Unit(converter) => converter.table().unit_names().collect(),
            Panel::Temperature(_) => TemperatureScale::ALL.iter().map(|scale| scale.name()).collect(),
            Panel::Currency(_) => CURRENCY_CODES.to_vec(),
            Panel::Calculator(_) | Panel::Date(_) => Vec::new(),
        }
    }

    /// Select a unit pair; false if the panel has no selectors or a name
    /// is unknown.
    pub fn set_units(&mut self, from: &str, to: &str) -> bool {
        match self {
            Panel::Unit(converter) => converter.set_units(from, to),
            Panel::Temperature(temperature) => temperature.set_units(from, to),
            Panel::Currency(currency) => currency.set_units(from, to),
            Panel::Calculator(_) | Panel::Date(_) => false,
        }
    }

    // ========================================================================
    // Key dispatch
    // ========================================================================

    /// Handle one key press.
    ///
    /// Scientific keys only reach the calculator; other panels ignore them.
    /// On the date calculator `=` computes the difference.
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        match self {
            Panel::Calculator(calc) => match key {
                Key::Operator(op) => KeyOutcome::from_edit(calc.operator(op)),
                Key::Function(function) => KeyOutcome::from_render(calc.function(function).map(Some)),
                Key::Constant(constant) => KeyOutcome::from_render(calc.constant(constant).map(Some)),
                _ => press_keypad(calc, key),
            },
            Panel::Date(date) => match key {
                Key::Equal => KeyOutcome::from_edit(date.calculate().map(|_| ())),
                _ => KeyOutcome::Ignored,
            },
            _ if key.is_scientific() => {
                tracing::trace!(panel = %self.kind(), ?key, "scientific key on a converter");
                KeyOutcome::Ignored
            },
            Panel::Currency(currency) => press_keypad(currency, key),
            Panel::Temperature(temperature) => press_keypad(temperature, key),
            Panel::Unit(converter) => press_keypad(converter, key),
        }
    }
}

/// Keys shared by every numeric panel
fn press_keypad(keypad: &mut dyn Keypad, key: Key) -> KeyOutcome {
    match key {
        Key::Digit(_) | Key::Point => match key.as_entry() {
            Some(entry) => KeyOutcome::from_edit(keypad.update(entry)),
            None => KeyOutcome::Ignored,
        },
        Key::Negate if !keypad.buffer().accepts_sign() => KeyOutcome::Ignored,
        Key::Negate => KeyOutcome::from_edit(keypad.negative()),
        Key::Clear => {
            keypad.clear();
            KeyOutcome::Edited
        },
        Key::Delete => {
            keypad.delete();
            KeyOutcome::Edited
        },
        Key::Equal => KeyOutcome::from_render(keypad.equal()),
        Key::Operator(_) | Key::Function(_) | Key::Constant(_) => KeyOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BinaryOperator, ScientificFunction};
    use crate::interfaces::UnavailableRates;

    fn rates() -> Arc<dyn RateProvider> {
        Arc::new(UnavailableRates)
    }

    fn build(kind: PanelKind) -> Panel {
        Panel::from_config(&PanelConfig::for_kind(kind), &rates()).unwrap()
    }

    fn press_all(panel: &mut Panel, input: &str) -> Vec<KeyOutcome> {
        Key::sequence(input).into_iter().map(|key| panel.press(key)).collect()
    }

    #[test]
    fn test_every_kind_builds() {
        for kind in PanelKind::ALL {
            let panel = build(kind);
            assert_eq!(panel.kind(), kind);
            assert_eq!(panel.keypad().is_some(), kind.has_keypad());
        }
    }

    #[test]
    fn test_configured_units_apply() {
        let config = PanelConfig::for_kind(PanelKind::SpeedConverter).with_units("Knots", "Mach");
        let panel = Panel::from_config(&config, &rates()).unwrap();
        assert_eq!(panel.units(), Some(("Knots", "Mach")));

        let defaults = build(PanelKind::PressureConverter);
        assert_eq!(defaults.units(), Some(("Atmospheres", "Bars")));
    }

    #[test]
    fn test_unknown_unit_keeps_defaults() {
        let mut speed = build(PanelKind::SpeedConverter);
        assert_eq!(
            speed.select_units("Knots", "Warp"),
            Err(ConfigError::UnknownUnit {
                panel: PanelKind::SpeedConverter,
                unit: "Warp".to_string(),
            })
        );
        assert!(speed.select_units("Furlongs", "Knots").is_err());
        assert_eq!(speed.units(), Some(("Kilometers per hour", "Miles per hour")));
        assert!(speed.select_units("Knots", "Mach").is_ok());
    }

    #[test]
    fn test_configured_capacity() {
        let config = PanelConfig::for_kind(PanelKind::TimeConverter).with_max_length(4);
        let mut panel = Panel::from_config(&config, &rates()).unwrap();
        let outcomes = press_all(&mut panel, "12345");
        assert_eq!(outcomes[4], KeyOutcome::Failed(CalcError::Capacity));
        assert_eq!(panel.display(), "1234");
    }

    #[test]
    fn test_calculator_dispatch() {
        let mut calc = build(PanelKind::Calculator);
        let outcomes = press_all(&mut calc, "6*7=");
        assert_eq!(outcomes[1], KeyOutcome::Edited);
        assert!(matches!(outcomes[3], KeyOutcome::Rendered(_)));
        assert_eq!(calc.display(), "42");

        let outcome = calc.press(Key::Function(ScientificFunction::Percent));
        assert!(matches!(outcome, KeyOutcome::Rendered(_)));
        assert_eq!(calc.display(), "0.42");
    }

    #[test]
    fn test_converter_ignores_scientific_keys() {
        let mut volume = build(PanelKind::VolumeConverter);
        assert_eq!(
            volume.press(Key::Operator(BinaryOperator::Add)),
            KeyOutcome::Ignored
        );
        assert_eq!(volume.press(Key::Negate), KeyOutcome::Ignored);
        assert_eq!(volume.display(), "0");
    }

    #[test]
    fn test_sign_rejected_on_full_display() {
        let config = PanelConfig::for_kind(PanelKind::PowerConverter).with_max_length(3);
        let mut power = Panel::from_config(&config, &rates()).unwrap();
        press_all(&mut power, "750");
        assert_eq!(power.press(Key::Negate), KeyOutcome::Failed(CalcError::Capacity));
        assert_eq!(power.display(), "750");
    }

    #[test]
    fn test_calculator_view() {
        let mut calc = build(PanelKind::Calculator);
        press_all(&mut calc, "4/");
        let engine = calc.as_calculator().unwrap();
        assert_eq!(engine.pending_operator(), Some(BinaryOperator::Divide));
        assert_eq!(engine.memory(), Some(4.0));
        assert!(build(PanelKind::AreaConverter).as_calculator().is_none());
    }

    #[test]
    fn test_angle_accepts_sign() {
        let mut angle = build(PanelKind::AngleConverter);
        press_all(&mut angle, "90n");
        assert_eq!(angle.display(), "-90");
    }

    #[test]
    fn test_date_panel() {
        let mut date = build(PanelKind::DateCalculator);
        assert_eq!(date.display(), "Same dates");
        assert_eq!(date.press(Key::Digit(4)), KeyOutcome::Ignored);
        assert_eq!(date.press(Key::Equal), KeyOutcome::Edited);

        date.as_date_mut().unwrap().set_to("not a date");
        assert_eq!(date.press(Key::Equal), KeyOutcome::Failed(CalcError::Parse));
        assert_eq!(date.display(), "Error");
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(build(PanelKind::TemperatureConverter).unit_names().len(), 3);
        assert_eq!(build(PanelKind::CurrencyConverter).unit_names().len(), 11);
        assert_eq!(build(PanelKind::DataConverter).unit_names().len(), 34);
        assert!(build(PanelKind::Calculator).unit_names().is_empty());
    }

    #[test]
    fn test_equal_without_operator_is_ignored() {
        let mut calc = build(PanelKind::Calculator);
        assert_eq!(calc.press(Key::Equal), KeyOutcome::Ignored);
    }
}
