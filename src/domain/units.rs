// ============================================================================
// Conversion Tables
// Per-panel unit factors relative to a common base unit
// ============================================================================

use super::panel::PanelKind;

/// Fixed list of units with factors relative to one base unit.
///
/// Conversion is `value * factor(from) / factor(to)`. Tables are static and
/// keep the order in which the unit selectors list them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionTable {
    /// Panel that owns this table
    pub panel: PanelKind,
    /// Name of the unit with factor 1
    pub base_unit: &'static str,
    /// Units in selector order
    pub units: &'static [(&'static str, f64)],
    /// Initially selected "from" unit
    pub default_from: &'static str,
    /// Initially selected "to" unit
    pub default_to: &'static str,
}

impl ConversionTable {
    /// Factor of `unit` relative to the base unit
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.units
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factor(unit).is_some()
    }

    /// Unit names in selector order
    pub fn unit_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|(name, _)| *name)
    }

    /// Convert `value` between two units of this table.
    ///
    /// Returns `None` if either unit is unknown.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return self.factor(from).map(|_| value);
        }
        Some(value * self.factor(from)? / self.factor(to)?)
    }

    /// Table for a factor-based converter panel
    pub fn for_panel(panel: PanelKind) -> Option<&'static ConversionTable> {
        ALL_TABLES.iter().copied().find(|table| table.panel == panel)
    }
}

// ============================================================================
// Tables
// ============================================================================

pub static VOLUME: ConversionTable = ConversionTable {
    panel: PanelKind::VolumeConverter,
    base_unit: "Liters",
    units: &[
        ("Milliliters", 0.001),
        ("Cubic centimeters", 0.001),
        ("Liters", 1.0),
        ("Cubic meters", 1000.0),
        ("Teaspoons (US)", 0.004929),
        ("Tablespoons (US)", 0.014787),
        ("Fluid ounces (US)", 0.029574),
        ("Cups (US)", 0.236588),
        ("Pints (US)", 0.473176),
        ("Quarts (US)", 0.946353),
        ("Gallons (US)", 3.785412),
        ("Cubic inches", 0.016387),
        ("Cubic feet", 28.31685),
        ("Cubic yards", 764.5549),
        ("Teaspoons (UK)", 0.005919),
        ("Tablespoons (UK)", 0.017758),
        ("Fluid ounces (UK)", 0.028413),
        ("Pints (UK)", 0.568261),
        ("Quarts (UK)", 1.136523),
        ("Gallons (UK)", 4.54609),
    ],
    default_from: "Milliliters",
    default_to: "Teaspoons (US)",
};

pub static LENGTH: ConversionTable = ConversionTable {
    panel: PanelKind::LengthConverter,
    base_unit: "Meters",
    units: &[
        ("Nanometers", 1e-9),
        ("Microns", 1e-6),
        ("Millimeters", 0.001),
        ("Centimeters", 0.01),
        ("Meters", 1.0),
        ("Kilometers", 1000.0),
        ("Inches", 0.0254),
        ("Feet", 0.3048),
        ("Yards", 0.9144),
        ("Miles", 1609.344),
        ("Nautical Miles", 1852.0),
    ],
    default_from: "Centimeters",
    default_to: "Inches",
};

pub static WEIGHT_AND_MASS: ConversionTable = ConversionTable {
    panel: PanelKind::WeightAndMassConverter,
    base_unit: "Kilograms",
    units: &[
        ("Carats", 0.0002),
        ("Milligrams", 1e-6),
        ("Centigrams", 1e-5),
        ("Decigrams", 0.0001),
        ("Grams", 0.001),
        ("Dekagrams", 0.01),
        ("Hectogram", 0.1),
        ("Kilograms", 1.0),
        ("Metric tonnes", 1000.0),
        ("Ounces", 0.02835),
        ("Pounds", 0.453592),
        ("Stone", 6.350293),
        ("Short tons (US)", 907.1847),
        ("Long tons (UK)", 1016.047),
    ],
    default_from: "Kilograms",
    default_to: "Pounds",
};

pub static ENERGY: ConversionTable = ConversionTable {
    panel: PanelKind::EnergyConverter,
    base_unit: "Joules",
    units: &[
        ("Electron volts", 1.602177e-19),
        ("Joules", 1.0),
        ("Kilojoules", 1000.0),
        ("Thermal calories", 4.184),
        ("Food calories", 4184.0),
        ("Foot-pounds", 1.355818),
        ("British thermal units", 1055.056),
    ],
    default_from: "Joules",
    default_to: "Food calories",
};

pub static AREA: ConversionTable = ConversionTable {
    panel: PanelKind::AreaConverter,
    base_unit: "Square meters",
    units: &[
        ("Square millimeters", 1e-6),
        ("Square centimeters", 0.0001),
        ("Square meters", 1.0),
        ("Hectares", 10000.0),
        ("Square kilometers", 1_000_000.0),
        ("Square inches", 0.000645),
        ("Square feet", 0.092903),
        ("Square yards", 0.836127),
        ("Acres", 4046.856),
        ("Square miles", 2_589_988.0),
    ],
    default_from: "Square meters",
    default_to: "Square feet",
};

pub static SPEED: ConversionTable = ConversionTable {
    panel: PanelKind::SpeedConverter,
    base_unit: "Meters per second",
    units: &[
        ("Centimeters per second", 0.01),
        ("Meters per second", 1.0),
        ("Kilometers per hour", 0.277778),
        ("Feet per second", 0.3048),
        ("Miles per hour", 0.447),
        ("Knots", 0.5144),
        ("Mach", 340.3),
    ],
    default_from: "Kilometers per hour",
    default_to: "Miles per hour",
};

pub static TIME: ConversionTable = ConversionTable {
    panel: PanelKind::TimeConverter,
    base_unit: "Seconds",
    units: &[
        ("Microseconds", 1e-6),
        ("Milliseconds", 0.001),
        ("Seconds", 1.0),
        ("Minutes", 60.0),
        ("Hours", 3600.0),
        ("Days", 86400.0),
        ("Weeks", 604_800.0),
        ("Years", 31_557_600.0),
    ],
    default_from: "Hours",
    default_to: "Minutes",
};

pub static POWER: ConversionTable = ConversionTable {
    panel: PanelKind::PowerConverter,
    base_unit: "Watts",
    units: &[
        ("Watts", 1.0),
        ("Kilowatts", 1000.0),
        ("Horsepower (US)", 745.6999),
        ("Foot-pounds/minute", 0.022597),
        ("BTUs/minute", 17.58427),
    ],
    default_from: "Kilowatts",
    default_to: "Horsepower (US)",
};

pub static DATA: ConversionTable = ConversionTable {
    panel: PanelKind::DataConverter,
    base_unit: "Megabytes",
    units: &[
        ("Bits", 1.25e-7),
        ("Bytes", 1e-6),
        ("Kilobits", 0.000125),
        ("Kibibits", 0.000128),
        ("Kilobytes", 0.001),
        ("Kibibytes", 0.001024),
        ("Megabits", 0.125),
        ("Mebibits", 0.131072),
        ("Megabytes", 1.0),
        ("Mebibytes", 1.048576),
        ("Gigabits", 125.0),
        ("Gibibits", 134.2177),
        ("Gigabytes", 1000.0),
        ("Gibibytes", 1073.742),
        ("Terabits", 125_000.0),
        ("Tebibits", 137_439.0),
        ("Terabytes", 1_000_000.0),
        ("Tebibytes", 1_099_512.0),
        ("Petabits", 125_000_000.0),
        ("Pebibits", 140_737_488.0),
        ("Petabytes", 1e9),
        ("Pebibytes", 1_125_899_907.0),
        ("Exabits", 1.25e11),
        ("Exbibits", 144_115_188_076.0),
        ("Exabytes", 1e12),
        ("Exbibytes", 1_152_921_504_607.0),
        ("Zettabits", 1.25e14),
        ("Zebibits", 147_573_952_589_676.0),
        ("Zettabytes", 1e15),
        ("Zebibytes", 1.180592e15),
        ("Yottabits", 1.25e17),
        ("Yobibits", 1.511157e17),
        ("Yottabytes", 1e18),
        ("Yobibytes", 1.208926e18),
    ],
    default_from: "Gigabytes",
    default_to: "Megabytes",
};

pub static PRESSURE: ConversionTable = ConversionTable {
    panel: PanelKind::PressureConverter,
    base_unit: "Pascals",
    units: &[
        ("Atmospheres", 101_325.0),
        ("Bars", 100_000.0),
        ("Kilopascals", 1000.0),
        ("Millimeters of mercury", 133.3),
        ("Pascals", 1.0),
        ("Pounds per square inch", 6894.757),
    ],
    default_from: "Atmospheres",
    default_to: "Bars",
};

pub static ANGLE: ConversionTable = ConversionTable {
    panel: PanelKind::AngleConverter,
    base_unit: "Degrees",
    units: &[("Degrees", 1.0), ("Radians", 57.29578), ("Gradians", 0.9)],
    default_from: "Degrees",
    default_to: "Radians",
};

/// Every factor-based table
pub static ALL_TABLES: [&ConversionTable; 11] = [
    &VOLUME,
    &LENGTH,
    &WEIGHT_AND_MASS,
    &ENERGY,
    &AREA,
    &SPEED,
    &TIME,
    &POWER,
    &DATA,
    &PRESSURE,
    &ANGLE,
];
