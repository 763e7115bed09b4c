// ============================================================================
// Panel Identity
// The named screens reachable from the selection menu
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every screen the selection menu can navigate to, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PanelKind {
    Calculator,
    DateCalculator,
    CurrencyConverter,
    VolumeConverter,
    LengthConverter,
    WeightAndMassConverter,
    TemperatureConverter,
    EnergyConverter,
    AreaConverter,
    SpeedConverter,
    TimeConverter,
    PowerConverter,
    DataConverter,
    PressureConverter,
    AngleConverter,
}

impl PanelKind {
    /// All panels in menu order
    pub const ALL: [PanelKind; 15] = [
        PanelKind::Calculator,
        PanelKind::DateCalculator,
        PanelKind::CurrencyConverter,
        PanelKind::VolumeConverter,
        PanelKind::LengthConverter,
        PanelKind::WeightAndMassConverter,
        PanelKind::TemperatureConverter,
        PanelKind::EnergyConverter,
        PanelKind::AreaConverter,
        PanelKind::SpeedConverter,
        PanelKind::TimeConverter,
        PanelKind::PowerConverter,
        PanelKind::DataConverter,
        PanelKind::PressureConverter,
        PanelKind::AngleConverter,
    ];

    /// Identifier used for lookup by name
    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::Calculator => "Calculator",
            PanelKind::DateCalculator => "DateCalculator",
            PanelKind::CurrencyConverter => "CurrencyConverter",
            PanelKind::VolumeConverter => "VolumeConverter",
            PanelKind::LengthConverter => "LengthConverter",
            PanelKind::WeightAndMassConverter => "WeightAndMassConverter",
            PanelKind::TemperatureConverter => "TemperatureConverter",
            PanelKind::EnergyConverter => "EnergyConverter",
            PanelKind::AreaConverter => "AreaConverter",
            PanelKind::SpeedConverter => "SpeedConverter",
            PanelKind::TimeConverter => "TimeConverter",
            PanelKind::PowerConverter => "PowerConverter",
            PanelKind::DataConverter => "DataConverter",
            PanelKind::PressureConverter => "PressureConverter",
            PanelKind::AngleConverter => "AngleConverter",
        }
    }

    /// Look a panel up by its identifier
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Menu label: the identifier with a space before each inner capital
    pub fn label(&self) -> String {
        let name = self.name();
        let mut label = String::with_capacity(name.len() + 4);
        for (i, letter) in name.chars().enumerate() {
            if i > 0 && letter.is_ascii_uppercase() {
                label.push(' ');
            }
            label.push(letter);
        }
        label
    }

    /// Header shown at the top of the panel
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Calculator => "Calculator",
            PanelKind::DateCalculator => "Date Calculator",
            PanelKind::CurrencyConverter => "Currency Converter",
            PanelKind::VolumeConverter => "Volume Converter",
            PanelKind::LengthConverter => "Length Converter",
            PanelKind::WeightAndMassConverter => "Weight and Mass Converter",
            PanelKind::TemperatureConverter => "Temperature Converter",
            PanelKind::EnergyConverter => "Energy Converter",
            PanelKind::AreaConverter => "Area Converter",
            PanelKind::SpeedConverter => "Speed Converter",
            PanelKind::TimeConverter => "Time Converter",
            PanelKind::PowerConverter => "Power Converter",
            PanelKind::DataConverter => "Data Converter",
            PanelKind::PressureConverter => "Pressure Converter",
            PanelKind::AngleConverter => "Angle Converter",
        }
    }

    /// Whether the panel shows the numeric keypad
    pub fn has_keypad(&self) -> bool {
        !matches!(self, PanelKind::DateCalculator)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
