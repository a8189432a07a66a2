//! Domain rules for laboratory measurements.
//!
//! A [`DomainRuleSet`] maps dataset columns onto canonical fields (pH,
//! temperature, concentration) and carries the bounds each field must obey.
//! The quality checker scores accuracy against it and the anomaly detector
//! flags violations from it, so both always agree on which columns are ruled.

mod domain;
mod matching;

pub use domain::{DomainRule, Field, RuleSide, TemperatureUnit, ViolationKind};
pub use matching::{DomainRuleConfig, DomainRuleSet, MatchMode, MatchedColumn};
