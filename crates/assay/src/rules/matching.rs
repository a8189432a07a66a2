//! Binding dataset columns to canonical fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::Dataset;

use super::domain::{DomainRule, Field, TemperatureUnit};

/// How unbound column names are matched against field aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Lower-cased column name equals an alias.
    #[default]
    Exact,
    /// pH matches exactly; temperature and concentration match when the
    /// lower-cased column name contains `temp` or `conc`.
    Substring,
}

/// Domain-rule configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRuleConfig {
    /// Unit temperature columns are recorded in.
    pub temperature_unit: TemperatureUnit,
    /// Fallback matching for columns without an explicit binding.
    pub match_mode: MatchMode,
    /// Explicit column name → field identifier bindings, consulted first.
    pub bindings: IndexMap<String, String>,
    /// Per-field bound overrides replacing the canonical rule.
    pub overrides: IndexMap<Field, DomainRule>,
}

impl DomainRuleConfig {
    /// Set the temperature unit.
    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit;
        self
    }

    /// Set the fallback match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Bind a column name to a field identifier.
    pub fn with_binding(mut self, column: impl Into<String>, field: impl Into<String>) -> Self {
        self.bindings.insert(column.into(), field.into());
        self
    }

    /// Replace the rule used for a field.
    pub fn with_override(mut self, field: Field, rule: DomainRule) -> Self {
        self.overrides.insert(field, rule);
        self
    }

    /// Check bindings and overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        DomainRuleSet::from_config(self).map(|_| ())
    }
}

/// A numeric column that a domain rule applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedColumn {
    pub index: usize,
    pub name: String,
    pub field: Field,
    pub rule: DomainRule,
}

/// Resolved rule table shared by the quality checker and the anomaly detector.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRuleSet {
    unit: TemperatureUnit,
    mode: MatchMode,
    bindings: IndexMap<String, Field>,
    rules: IndexMap<Field, DomainRule>,
}

impl Default for DomainRuleSet {
    fn default() -> Self {
        Self::canonical(TemperatureUnit::Celsius)
    }
}

impl DomainRuleSet {
    /// Canonical rules for the given temperature unit with exact matching.
    pub fn canonical(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            mode: MatchMode::Exact,
            bindings: IndexMap::new(),
            rules: Field::ALL
                .iter()
                .map(|&field| (field, DomainRule::canonical(field, unit)))
                .collect(),
        }
    }

    /// Resolve a configuration, failing on unknown fields or inverted bounds.
    pub fn from_config(config: &DomainRuleConfig) -> Result<Self, ConfigError> {
        let mut set = Self::canonical(config.temperature_unit);
        set.mode = config.match_mode;

        for (field, rule) in &config.overrides {
            rule.validate(*field)?;
            set.rules.insert(*field, *rule);
        }

        for (column, field_name) in &config.bindings {
            let field = field_by_name(field_name).ok_or_else(|| ConfigError::UnknownField {
                column: column.clone(),
                field: field_name.clone(),
            })?;
            set.bindings.insert(column.clone(), field);
        }

        Ok(set)
    }

    /// Temperature unit in effect.
    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Rule in effect for a field.
    pub fn rule(&self, field: Field) -> DomainRule {
        self.rules
            .get(&field)
            .copied()
            .unwrap_or_else(|| DomainRule::canonical(field, self.unit))
    }

    /// Field a column name resolves to, if any.
    pub fn field_for(&self, column: &str) -> Option<Field> {
        if let Some(field) = self.bindings.get(column) {
            return Some(*field);
        }

        let name = column.trim().to_lowercase();
        match self.mode {
            MatchMode::Exact => Field::ALL
                .into_iter()
                .find(|field| field.aliases().contains(&name.as_str())),
            MatchMode::Substring => {
                if name == "ph" {
                    Some(Field::Ph)
                } else if name.contains("temp") {
                    Some(Field::Temperature)
                } else if name.contains("conc") {
                    Some(Field::Concentration)
                } else {
                    None
                }
            }
        }
    }

    /// Human-readable rule text for a field.
    pub fn describe(&self, field: Field) -> String {
        let rule = self.rule(field);
        let symbol = self.unit.symbol();
        let name = match field {
            Field::Ph => "pH",
            Field::Temperature => "Temperature",
            Field::Concentration => "Concentration",
        };
        let unit = if field == Field::Temperature { symbol } else { "" };

        match (rule.min, rule.max) {
            (Some(min), Some(max)) => format!("{} must be {}-{}{}", name, min, max, unit),
            (Some(min), None) if field == Field::Concentration && min == 0.0 => {
                "Concentration must be non-negative".to_string()
            }
            (Some(min), None) => format!("{} must be >= {}{}", name, min, unit),
            (None, Some(max)) => format!("{} must be <= {}{}", name, max, unit),
            (None, None) => format!("{} has no bounds", name),
        }
    }

    /// Numeric columns of `dataset` that a rule applies to, in column order.
    pub fn matched_columns(&self, dataset: &Dataset) -> Vec<MatchedColumn> {
        dataset
            .column_names()
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                let field = self.field_for(name)?;
                if !dataset.column_class(index).is_numeric() {
                    tracing::debug!(column = %name, field = %field, "skipping non-numeric rule column");
                    return None;
                }
                Some(MatchedColumn {
                    index,
                    name: name.clone(),
                    field,
                    rule: self.rule(field),
                })
            })
            .collect()
    }
}

fn field_by_name(name: &str) -> Option<Field> {
    let name = name.trim().to_lowercase();
    Field::ALL
        .into_iter()
        .find(|field| field.identifier() == name || field.aliases().contains(&name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;

    #[test]
    fn test_exact_matching() {
        let set = DomainRuleSet::default();
        assert_eq!(set.field_for("pH"), Some(Field::Ph));
        assert_eq!(set.field_for("Temperature"), Some(Field::Temperature));
        assert_eq!(set.field_for("conc"), Some(Field::Concentration));
        assert_eq!(set.field_for("temp_c"), None);
        assert_eq!(set.field_for("phosphate"), None);
    }

    #[test]
    fn test_substring_matching() {
        let config = DomainRuleConfig::default().with_match_mode(MatchMode::Substring);
        let set = DomainRuleSet::from_config(&config).unwrap();
        assert_eq!(set.field_for("temp_c"), Some(Field::Temperature));
        assert_eq!(set.field_for("drug_concentration_mM"), Some(Field::Concentration));
        assert_eq!(set.field_for("phosphate"), None);
        // Substring mode still catches names like "attempt"
        assert_eq!(set.field_for("attempt"), Some(Field::Temperature));
    }

    #[test]
    fn test_binding_takes_precedence() {
        let config = DomainRuleConfig::default()
            .with_binding("reactor_t", "temperature")
            .with_binding("ph", "concentration");
        let set = DomainRuleSet::from_config(&config).unwrap();
        assert_eq!(set.field_for("reactor_t"), Some(Field::Temperature));
        assert_eq!(set.field_for("ph"), Some(Field::Concentration));
        assert_eq!(set.field_for("pH"), Some(Field::Ph));
    }

    #[test]
    fn test_unknown_binding_field() {
        let config = DomainRuleConfig::default().with_binding("x", "salinity");
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownField {
                column: "x".to_string(),
                field: "salinity".to_string(),
            })
        );
    }

    #[test]
    fn test_override_validated() {
        let config =
            DomainRuleConfig::default().with_override(Field::Ph, DomainRule::between(9.0, 2.0));
        assert!(matches!(
            DomainRuleSet::from_config(&config),
            Err(ConfigError::InvertedBounds { .. })
        ));

        let config =
            DomainRuleConfig::default().with_override(Field::Ph, DomainRule::between(2.0, 9.0));
        let set = DomainRuleSet::from_config(&config).unwrap();
        assert_eq!(set.rule(Field::Ph), DomainRule::between(2.0, 9.0));
    }

    #[test]
    fn test_describe() {
        let set = DomainRuleSet::default();
        assert_eq!(set.describe(Field::Ph), "pH must be 0-14");
        assert_eq!(set.describe(Field::Temperature), "Temperature must be -273.15-1000°C");
        assert_eq!(
            set.describe(Field::Concentration),
            "Concentration must be non-negative"
        );
    }

    #[test]
    fn test_matched_columns_skip_text() {
        let ds = Dataset::from_columns(vec![
            ("ph", vec![Value::text("acidic"), Value::text("neutral")]),
            ("temperature", vec![Value::Number(20.0), Value::Number(21.0)]),
        ])
        .unwrap();
        let matched = DomainRuleSet::default().matched_columns(&ds);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "temperature");
        assert_eq!(matched[0].index, 1);
    }
}
