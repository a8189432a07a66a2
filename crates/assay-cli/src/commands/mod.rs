//! CLI command implementations.

pub mod analyze;
pub mod profile;

use assay::QualityLevel;
use colored::{ColoredString, Colorize};

/// Colour a score by its quality level.
pub fn colored_score(score: f64) -> ColoredString {
    let text = format!("{:.1}%", score);
    match QualityLevel::from_score(score) {
        QualityLevel::Excellent => text.green().bold(),
        QualityLevel::Good => text.green(),
        QualityLevel::Fair => text.yellow(),
        QualityLevel::Poor => text.red().bold(),
    }
}
