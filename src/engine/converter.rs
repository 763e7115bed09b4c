// ============================================================================
// Unit Converters
// Stateless conversions applied to the displayed value on `=`
// ============================================================================

use crate::display::{CalcError, CalcResult, DisplayBuffer, Rendered};
use crate::domain::{ConversionTable, TemperatureScale};
use crate::interfaces::Keypad;

/// Panel converting between the units of one [`ConversionTable`].
#[derive(Debug, Clone)]
pub struct UnitConverter {
    buffer: DisplayBuffer,
    table: &'static ConversionTable,
    from: &'static str,
    to: &'static str,
}

impl UnitConverter {
    /// Converter with the table's default unit pair and a generic display
    pub fn new(table: &'static ConversionTable) -> Self {
        Self::with_buffer(table, DisplayBuffer::generic().with_sign(false))
    }

    pub fn with_buffer(table: &'static ConversionTable, buffer: DisplayBuffer) -> Self {
        Self {
            buffer,
            table,
            from: table.default_from,
            to: table.default_to,
        }
    }

    pub fn table(&self) -> &'static ConversionTable {
        self.table
    }

    /// Selected (from, to) units
    pub fn units(&self) -> (&'static str, &'static str) {
        (self.from, self.to)
    }

    /// Select a unit pair.
    ///
    /// Returns false, leaving the selection unchanged, if either name is not
    /// in the table.
    pub fn set_units(&mut self, from: &str, to: &str) -> bool {
        match (self.lookup(from), self.lookup(to)) {
            (Some(from), Some(to)) => {
                self.from = from;
                self.to = to;
                true
            },
            _ => {
                tracing::warn!(panel = %self.table.panel, from, to, "unknown unit selection");
                false
            },
        }
    }

    /// Convert `value` with the current selection
    pub fn convert(&self, value: f64) -> CalcResult<f64> {
        self.table
            .convert(value, self.from, self.to)
            .ok_or(CalcError::Domain)
    }

    /// Names are stored as the table's own `&'static str`
    fn lookup(&self, unit: &str) -> Option<&'static str> {
        self.table.unit_names().find(|name| *name == unit)
    }
}

impl Keypad for UnitConverter {
    fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    fn equal(&mut self) -> CalcResult<Option<Rendered>> {
        let value = self.buffer.get_value()?;
        let result = self.convert(value)?;
        self.buffer.set_text(value, result).map(Some)
    }
}

/// Panel converting between Celsius, Fahrenheit and Kelvin.
#[derive(Debug, Clone)]
pub struct TemperatureConverter {
    buffer: DisplayBuffer,
    from: TemperatureScale,
    to: TemperatureScale,
}

impl TemperatureConverter {
    /// Celsius to Fahrenheit, sign key enabled
    pub fn new() -> Self {
        Self::with_buffer(DisplayBuffer::generic())
    }

    pub fn with_buffer(buffer: DisplayBuffer) -> Self {
        Self {
            buffer,
            from: TemperatureScale::Celsius,
            to: TemperatureScale::Fahrenheit,
        }
    }

    pub fn scales(&self) -> (TemperatureScale, TemperatureScale) {
        (self.from, self.to)
    }

    pub fn set_scales(&mut self, from: TemperatureScale, to: TemperatureScale) {
        self.from = from;
        self.to = to;
    }

    /// Select scales by name; false if either name is unknown.
    pub fn set_units(&mut self, from: &str, to: &str) -> bool {
        match (TemperatureScale::from_name(from), TemperatureScale::from_name(to)) {
            (Some(from), Some(to)) => {
                self.set_scales(from, to);
                true
            },
            _ => {
                tracing::warn!(from, to, "unknown temperature scale");
                false
            },
        }
    }
}

impl Default for TemperatureConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad for TemperatureConverter {
    fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    fn equal(&mut self) -> CalcResult<Option<Rendered>> {
        let value = self.buffer.get_value()?;
        let result = self.from.convert(value, self.to);
        self.buffer.set_text(value, result).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::units::{ANGLE, DATA, LENGTH, VOLUME};
    use proptest::prelude::*;

    fn enter(panel: &mut impl Keypad, digits: &str) {
        for key in digits.chars() {
            panel.update(key).unwrap();
        }
    }

    #[test]
    fn test_defaults() {
        let volume = UnitConverter::new(&VOLUME);
        assert_eq!(volume.units(), ("Milliliters", "Teaspoons (US)"));
        assert!(!volume.buffer().accepts_sign());
        assert_eq!(volume.buffer().max_len(), 15);

        let temperature = TemperatureConverter::new();
        assert_eq!(
            temperature.scales(),
            (TemperatureScale::Celsius, TemperatureScale::Fahrenheit)
        );
        assert!(temperature.buffer().accepts_sign());
    }

    #[test]
    fn test_length_conversion() {
        let mut length = UnitConverter::new(&LENGTH);
        assert!(length.set_units("Kilometers", "Meters"));
        enter(&mut length, "2.5");
        length.equal().unwrap();
        assert_eq!(length.display(), "2,500");
    }

    #[test]
    fn test_data_conversion_groups() {
        let mut data = UnitConverter::new(&DATA);
        enter(&mut data, "3");
        data.equal().unwrap();
        assert_eq!(data.display(), "3,000");
    }

    #[test]
    fn test_set_units_rejects_unknown() {
        let mut angle = UnitConverter::new(&ANGLE);
        assert!(!angle.set_units("Degrees", "Turns"));
        assert_eq!(angle.units(), ("Degrees", "Radians"));
    }

    #[test]
    fn test_same_unit_conversion_is_unchanged() {
        let mut volume = UnitConverter::new(&VOLUME);
        volume.set_units("Liters", "Liters");
        enter(&mut volume, "12");
        let rendered = volume.equal().unwrap().unwrap();
        assert_eq!(volume.display(), "12");
        assert!(rendered.unchanged);
    }

    #[test]
    fn test_temperature_reference_points() {
        let mut temperature = TemperatureConverter::new();
        enter(&mut temperature, "0");
        temperature.equal().unwrap();
        assert_eq!(temperature.display(), "32");

        temperature.clear();
        temperature.set_scales(TemperatureScale::Celsius, TemperatureScale::Kelvin);
        enter(&mut temperature, "100");
        temperature.equal().unwrap();
        assert_eq!(temperature.display(), "373.15");
    }

    #[test]
    fn test_negative_temperature() {
        let mut temperature = TemperatureConverter::new();
        assert!(temperature.set_units("Fahrenheit", "Celsius"));
        enter(&mut temperature, "40");
        temperature.negative().unwrap();
        temperature.equal().unwrap();
        assert_eq!(temperature.display(), "-40");
    }

    #[test]
    fn test_error_display_is_parse_error() {
        let mut length = UnitConverter::new(&LENGTH);
        length.buffer_mut().show_error();
        assert_eq!(length.equal(), Err(CalcError::Parse));
        assert!(length.buffer().is_error());
    }

    proptest! {
        #[test]
        fn prop_same_unit_equal_is_identity(value in 1u32..1_000_000) {
            let mut length = UnitConverter::new(&LENGTH);
            length.set_units("Feet", "Feet");
            enter(&mut length, &value.to_string());
            let before = length.display().to_string();
            length.equal().unwrap();
            prop_assert_eq!(length.display().replace(',', ""), before);
        }
    }
}
