//! Fixed-width text rendering.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::anomaly::{AnomalyRecord, Evidence, MethodResult};
use crate::quality::MetricKind;
use crate::summarize::prompts::truncate_chars;

use super::models::QualityReport;

/// Inner width of boxed sections.
const BOX_WIDTH: usize = 55;

/// Width of section rules.
const RULE_WIDTH: usize = 60;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub(super) fn write_report(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    write_header(report, f)?;
    write_overview(report, f)?;
    write_quality(report, f)?;
    write_completeness(report, f)?;
    write_anomalies(report, f)?;
    write_recommendations(report, f)?;
    if let Some(narrative) = &report.narrative {
        write_narrative(narrative, f)?;
    }
    write_footer(report, f)
}

// =============================================================================
// LAYOUT HELPERS
// =============================================================================

fn box_top(f: &mut impl Write) -> fmt::Result {
    writeln!(f, "╔{}╗", "═".repeat(BOX_WIDTH))
}

fn box_divider(f: &mut impl Write) -> fmt::Result {
    writeln!(f, "╠{}╣", "═".repeat(BOX_WIDTH))
}

fn box_bottom(f: &mut impl Write) -> fmt::Result {
    writeln!(f, "╚{}╝", "═".repeat(BOX_WIDTH))
}

/// Clip `content` to the box interior, marking the cut.
fn fit_box(content: &str) -> Cow<'_, str> {
    if content.chars().count() <= BOX_WIDTH {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(format!("{}...", truncate_chars(content, BOX_WIDTH - 3)))
    }
}

fn box_line(f: &mut impl Write, content: &str) -> fmt::Result {
    writeln!(f, "║{:<width$}║", fit_box(content), width = BOX_WIDTH)
}

fn box_centered(f: &mut impl Write, content: &str) -> fmt::Result {
    writeln!(f, "║{:^width$}║", fit_box(content), width = BOX_WIDTH)
}

fn box_field(f: &mut impl Write, label: &str, value: &str) -> fmt::Result {
    box_line(f, &format!(" {:<16}{}", label, value))
}

fn section_title(f: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

// =============================================================================
// SECTIONS
// =============================================================================

fn write_header(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    let header = &report.header;
    box_top(f)?;
    box_centered(f, "LAB DATA QUALITY REPORT")?;
    box_divider(f)?;
    box_field(f, "Dataset:", &header.dataset_name)?;
    box_field(f, "Records:", &header.rows.to_string())?;
    box_field(f, "Columns:", &header.columns.to_string())?;
    box_field(
        f,
        "Analysis Date:",
        &header.generated_at.format(TIMESTAMP_FORMAT).to_string(),
    )?;
    box_bottom(f)
}

fn write_overview(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    let overview = &report.profile.overview;
    let missing = &report.profile.missing_values;
    let limit = report.limits.column_names;

    let mut names = overview
        .column_names
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if overview.column_names.len() > limit {
        names.push_str("...");
    }

    section_title(f, "DATASET OVERVIEW")?;
    writeln!(f, "Rows:              {}", overview.rows)?;
    writeln!(f, "Columns:           {}", overview.columns)?;
    writeln!(f, "Memory Usage:      {:.1} KB", overview.memory_kb())?;
    writeln!(
        f,
        "Missing Values:    {} ({:.1}%)",
        missing.total_missing, missing.missing_percentage
    )?;
    writeln!(f, "Column Names:      {}", names)
}

fn write_quality(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    let metrics = &report.metrics;

    writeln!(f)?;
    box_top(f)?;
    box_centered(f, "OVERALL QUALITY SCORE")?;
    box_line(f, "")?;
    box_centered(f, &format!("{:.1}%", metrics.overall_score))?;
    box_centered(f, &report.level().to_string())?;
    box_bottom(f)?;

    section_title(f, "QUALITY BREAKDOWN")?;
    for kind in MetricKind::ALL {
        let label = format!("{}:", kind.label());
        writeln!(
            f,
            "{:<19}{:>6.1}%  (Weight: {:.0}%)",
            label,
            metrics.score(kind),
            report.weights.weight(kind) * 100.0
        )?;
    }
    Ok(())
}

fn write_completeness(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    section_title(f, "COMPLETENESS ANALYSIS")?;
    for (name, pct) in &report.metrics.completeness.by_column {
        let missing = report
            .profile
            .columns
            .get(name)
            .map(|c| c.null_count)
            .unwrap_or(0);
        let status = if missing == 0 {
            "✓"
        } else if *pct >= 90.0 {
            "⚠"
        } else {
            "✗"
        };
        writeln!(
            f,
            "{} {:<20} {:>5.1}% complete ({} missing)",
            status, name, pct, missing
        )?;
    }
    Ok(())
}

fn write_anomalies(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    let anomalies = &report.anomalies;
    let limits = &report.limits;
    let total = anomalies.total();

    section_title(f, "ANOMALY DETECTION")?;
    writeln!(f, "Total Anomalies Found: {}", total)?;

    write_method(f, "Z-Score Outliers", &anomalies.z_score, limits.z_score)?;
    write_method(
        f,
        "Domain Rule Violations",
        &anomalies.domain_rules,
        limits.domain_rules,
    )?;
    write_method(f, "IQR Outliers", &anomalies.iqr, limits.iqr)?;

    if total == 0 {
        writeln!(f)?;
        writeln!(f, "✓ No anomalies detected")?;
    }
    Ok(())
}

fn write_method(f: &mut impl Write, title: &str, result: &MethodResult, limit: usize) -> fmt::Result {
    if result.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "⚠ {}: {} records", title, result.count)?;
    for record in result.anomalies.iter().take(limit) {
        write_record(f, record)?;
    }
    if result.count > limit {
        writeln!(f, "  ... and {} more", result.count - limit)?;
    }
    Ok(())
}

fn write_record(f: &mut impl Write, record: &AnomalyRecord) -> fmt::Result {
    let prefix = format!(
        "  - Row {}, {}: {:.2}",
        record.row, record.column, record.value
    );
    match &record.evidence {
        Evidence::ZScore { z_score, .. } => {
            writeln!(f, "{} (z-score: {:.2})", prefix, z_score)
        }
        Evidence::DomainRule { rule, .. } => {
            writeln!(f, "{}", prefix)?;
            writeln!(f, "    Rule: {}", rule)
        }
        Evidence::Iqr { .. } => writeln!(f, "{}", prefix),
    }
}

fn write_recommendations(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    section_title(f, "RECOMMENDATIONS")?;
    for (i, rec) in report.recommendations.iter().enumerate() {
        writeln!(f, "{}. {}", i + 1, rec)?;
    }
    Ok(())
}

fn write_narrative(narrative: &str, f: &mut impl Write) -> fmt::Result {
    section_title(f, "NARRATIVE SUMMARY")?;
    writeln!(f, "{}", narrative.trim_end())
}

fn write_footer(report: &QualityReport, f: &mut impl Write) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        f,
        "Report generated by assay {}",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(
        f,
        "Generated: {}",
        report.header.generated_at.format(TIMESTAMP_FORMAT)
    )?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}
