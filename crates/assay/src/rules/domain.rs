//! Physical and chemical bounds on canonical laboratory fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Canonical field a domain rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Ph,
    Temperature,
    Concentration,
}

impl Field {
    /// All canonical fields in table order.
    pub const ALL: [Field; 3] = [Field::Ph, Field::Temperature, Field::Concentration];

    /// Canonical identifier.
    pub fn identifier(&self) -> &'static str {
        match self {
            Field::Ph => "ph",
            Field::Temperature => "temperature",
            Field::Concentration => "concentration",
        }
    }

    /// Lower-case column names recognised for this field.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::Ph => &["ph"],
            Field::Temperature => &["temperature", "temp"],
            Field::Concentration => &["concentration", "conc"],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Unit a temperature column is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Absolute zero in this unit.
    pub fn absolute_zero(&self) -> f64 {
        match self {
            TemperatureUnit::Celsius => -273.15,
            TemperatureUnit::Fahrenheit => -459.67,
            TemperatureUnit::Kelvin => 0.0,
        }
    }

    /// Upper plausibility bound for laboratory readings (1000 °C).
    pub fn ceiling(&self) -> f64 {
        match self {
            TemperatureUnit::Celsius => 1000.0,
            TemperatureUnit::Fahrenheit => 1832.0,
            TemperatureUnit::Kelvin => 1273.15,
        }
    }

    /// Unit symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ConfigError::UnknownUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for TemperatureUnit {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TemperatureUnit> for String {
    fn from(unit: TemperatureUnit) -> Self {
        unit.name().to_string()
    }
}

/// Which side of a rule a value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSide {
    Min,
    Max,
}

/// Inclusive bounds for a field, in the column's physical unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl DomainRule {
    /// Rule with both bounds.
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Rule with only a lower bound.
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Canonical rule for a field.
    pub fn canonical(field: Field, unit: TemperatureUnit) -> Self {
        match field {
            Field::Ph => Self::between(0.0, 14.0),
            Field::Temperature => Self::between(unit.absolute_zero(), unit.ceiling()),
            Field::Concentration => Self::at_least(0.0),
        }
    }

    /// The side violated by `value`, if any.
    pub fn violated_side(&self, value: f64) -> Option<RuleSide> {
        if self.min.is_some_and(|min| value < min) {
            Some(RuleSide::Min)
        } else if self.max.is_some_and(|max| value > max) {
            Some(RuleSide::Max)
        } else {
            None
        }
    }

    /// Returns true if `value` satisfies every bound.
    pub fn contains(&self, value: f64) -> bool {
        self.violated_side(value).is_none()
    }

    /// The bound on the given side.
    pub fn bound(&self, side: RuleSide) -> Option<f64> {
        match side {
            RuleSide::Min => self.min,
            RuleSide::Max => self.max,
        }
    }

    pub(crate) fn validate(&self, field: Field) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    field: field.identifier(),
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Identifier for a domain-rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    InvalidPh,
    BelowAbsoluteZero,
    NegativeConcentration,
    AboveConcentrationLimit,
}

impl ViolationKind {
    /// Classify a violation of `field` on `side`.
    ///
    /// `None` for the temperature ceiling: readings above it are implausible
    /// rather than physically impossible, so they lower accuracy without
    /// being reported as anomalies.
    pub fn classify(field: Field, side: RuleSide) -> Option<Self> {
        match (field, side) {
            (Field::Ph, _) => Some(ViolationKind::InvalidPh),
            (Field::Temperature, RuleSide::Min) => Some(ViolationKind::BelowAbsoluteZero),
            (Field::Temperature, RuleSide::Max) => None,
            (Field::Concentration, RuleSide::Min) => Some(ViolationKind::NegativeConcentration),
            (Field::Concentration, RuleSide::Max) => Some(ViolationKind::AboveConcentrationLimit),
        }
    }

    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::InvalidPh => "invalid_ph",
            ViolationKind::BelowAbsoluteZero => "below_absolute_zero",
            ViolationKind::NegativeConcentration => "negative_concentration",
            ViolationKind::AboveConcentrationLimit => "above_concentration_limit",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rules() {
        let ph = DomainRule::canonical(Field::Ph, TemperatureUnit::Celsius);
        assert!(ph.contains(7.4));
        assert!(ph.contains(0.0));
        assert!(ph.contains(14.0));
        assert_eq!(ph.violated_side(15.5), Some(RuleSide::Max));
        assert_eq!(ph.violated_side(-0.5), Some(RuleSide::Min));

        let conc = DomainRule::canonical(Field::Concentration, TemperatureUnit::Celsius);
        assert_eq!(conc.max, None);
        assert!(conc.contains(1e9));
        assert_eq!(conc.violated_side(-10.0), Some(RuleSide::Min));
    }

    #[test]
    fn test_temperature_floor_depends_on_unit() {
        let c = DomainRule::canonical(Field::Temperature, TemperatureUnit::Celsius);
        let k = DomainRule::canonical(Field::Temperature, TemperatureUnit::Kelvin);
        assert_eq!(c.min, Some(-273.15));
        assert_eq!(k.min, Some(0.0));
        assert!(c.contains(-50.0));
        assert!(!k.contains(-50.0));
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("Celsius".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("K".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
        assert_eq!(
            "rankine".parse::<TemperatureUnit>(),
            Err(ConfigError::UnknownUnit("rankine".to_string()))
        );
    }

    #[test]
    fn test_unit_serde_rejects_unknown() {
        let ok: TemperatureUnit = serde_json::from_str("\"fahrenheit\"").unwrap();
        assert_eq!(ok, TemperatureUnit::Fahrenheit);
        assert!(serde_json::from_str::<TemperatureUnit>("\"rankine\"").is_err());
    }

    #[test]
    fn test_violation_kinds() {
        let tag = |field, side| ViolationKind::classify(field, side).map(|k| k.as_str());
        assert_eq!(tag(Field::Ph, RuleSide::Min), Some("invalid_ph"));
        assert_eq!(tag(Field::Ph, RuleSide::Max), Some("invalid_ph"));
        assert_eq!(tag(Field::Temperature, RuleSide::Min), Some("below_absolute_zero"));
        assert_eq!(tag(Field::Temperature, RuleSide::Max), None);
        assert_eq!(tag(Field::Concentration, RuleSide::Min), Some("negative_concentration"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let rule = DomainRule::between(5.0, 1.0);
        assert!(matches!(
            rule.validate(Field::Ph),
            Err(ConfigError::InvertedBounds { field: "ph", .. })
        ));
    }
}
