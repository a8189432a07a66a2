//! Profile command - show the descriptive profile of a data file.

use std::path::PathBuf;

use assay::profile::StatisticsSummary;
use assay::{Parser, Profiler};
use colored::Colorize;

pub fn run(file: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let (dataset, source) = Parser::new().parse_file(&file)?;
    let profile = Profiler::new().generate_profile(&dataset);

    if json_output {
        let output = serde_json::json!({
            "source": source,
            "profile": profile,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let overview = &profile.overview;
    println!(
        "{} {}",
        "Profile of".cyan().bold(),
        source.file.white()
    );
    println!();
    println!(
        "Rows: {}  Columns: {}  Memory: {:.1} KB  Missing: {} ({:.1}%)",
        overview.rows.to_string().white().bold(),
        overview.columns.to_string().white().bold(),
        overview.memory_kb(),
        profile.missing_values.total_missing,
        profile.missing_values.missing_percentage
    );
    println!();

    println!("{}", "Columns:".yellow().bold());
    for (name, column) in &profile.columns {
        let nulls = if column.null_count > 0 {
            format!("{} null ({:.1}%)", column.null_count, column.null_percentage).yellow()
        } else {
            "no nulls".green()
        };
        println!(
            "  {:20} {:8} {:>6} distinct  {}",
            name,
            column.dtype.label(),
            column.distinct_count,
            nulls
        );
    }

    match &profile.statistics {
        StatisticsSummary::NoNumericColumns { message } => {
            println!();
            println!("{}", message.dimmed());
        }
        StatisticsSummary::Numeric { describe, .. } => {
            println!();
            println!("{}", "Numeric summary:".yellow().bold());
            println!(
                "  {:20} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10}",
                "column", "count", "mean", "std", "min", "median", "max"
            );
            for (name, s) in describe {
                let std = s
                    .std
                    .map(|v| format!("{:.3}", v))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:20} {:>6} {:>10.3} {:>10} {:>10.3} {:>10.3} {:>10.3}",
                    name, s.count, s.mean, std, s.min, s.median, s.max
                );
            }
        }
    }

    Ok(())
}
