//! Anomaly detection.
//!
//! Three independent strategies, each implementing [`Detector`]:
//! - [`ZScoreDetector`]: distance from the mean in sample standard deviations
//! - [`IqrDetector`]: Tukey fences around the interquartile range
//! - [`DomainRuleDetector`]: physical and chemical bounds from [`crate::rules`]
//!
//! No cross-method deduplication is performed.

mod detector;
mod domain;
mod iqr;
mod models;
mod zscore;

pub use detector::{AnomalyDetector, Detector};
pub use domain::DomainRuleDetector;
pub use iqr::IqrDetector;
pub use models::{AnomalyRecord, AnomalyReport, DetectionMethod, Direction, Evidence, MethodResult};
pub use zscore::ZScoreDetector;
