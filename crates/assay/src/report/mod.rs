//! Quality report generation, rendering and persistence.

mod generator;
mod level;
mod models;
mod recommendation;
mod render;

pub use generator::ReportGenerator;
pub use level::QualityLevel;
pub use models::{QualityReport, ReportFormat, ReportHeader};
pub use recommendation::{derive_recommendations, Recommendation};
