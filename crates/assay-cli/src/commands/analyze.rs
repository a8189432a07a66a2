//! Analyze command - generate a quality report for a data file.

use std::path::PathBuf;

use assay::summarize::{build_summarizer, Availability};
use assay::{AnalysisConfig, Assay, ReportFormat, SummarizerChoice, SummaryMode};
use colored::Colorize;

use super::colored_score;

pub struct AnalyzeArgs {
    pub file: PathBuf,
    pub name: Option<String>,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub summarizer: SummarizerChoice,
    pub mode: SummaryMode,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    let mut assay = Assay::with_config(config)?;

    if let Some(summarizer) = build_summarizer(args.summarizer)? {
        if let Availability::Unavailable(reason) = summarizer.availability() {
            eprintln!(
                "{} {} summarizer unavailable ({}); report will have no narrative",
                "Warning:".yellow().bold(),
                summarizer.name(),
                reason
            );
        }
        assay = assay.with_summarizer(summarizer, args.mode);
    }

    eprintln!(
        "{} {}",
        "Analyzing".cyan().bold(),
        args.file.display().to_string().white()
    );

    let (report, source) = assay.analyze(&args.file, args.name.as_deref())?;
    tracing::debug!(digest = %source.digest, format = %source.format, "source loaded");

    match &args.output {
        Some(path) => {
            let saved = if path.is_dir() {
                report.save(path, args.format)?
            } else {
                report.write_to(path, args.format)?;
                path.clone()
            };
            println!(
                "{} {}",
                "Saved to".green().bold(),
                saved.display().to_string().white()
            );
        }
        None => print!("{}", report.render(args.format)?),
    }

    eprintln!();
    eprintln!(
        "Overall quality: {} ({})",
        colored_score(report.metrics.overall_score),
        report.level().label()
    );
    let anomalies = report.anomalies.total();
    if anomalies > 0 {
        eprintln!(
            "Found {} anomalies ({} z-score, {} domain rule, {} IQR)",
            anomalies.to_string().white().bold(),
            report.anomalies.z_score.count.to_string().yellow(),
            report.anomalies.domain_rules.count.to_string().red(),
            report.anomalies.iqr.count.to_string().yellow()
        );
    } else {
        eprintln!("{}", "No anomalies detected".green());
    }

    Ok(())
}
