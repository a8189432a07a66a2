//! Prompt templates for narrative summaries.

use super::provider::SummaryMode;

/// Longest input forwarded to a provider, in characters.
pub const MAX_INPUT_CHARS: usize = 3000;

/// System prompt shared by every mode.
pub fn system_prompt() -> &'static str {
    "You are a laboratory data quality analyst. You review automated quality \
     reports for experimental datasets and explain their findings accurately. \
     Never invent numbers that are not present in the report."
}

/// Build the user prompt for a mode.
pub fn summary_prompt(report: &str, mode: SummaryMode) -> String {
    let report = truncate_chars(report, MAX_INPUT_CHARS);
    match mode {
        SummaryMode::Concise => format!(
            r#"Summarize this data quality report for a lab lead in a few lines.

## Report
{}

## Format
# Summary
- Overall quality and score
- The two or three issues that matter most
## Next Step
- One concrete action"#,
            report
        ),
        SummaryMode::Teaching => format!(
            r#"Explain this data quality report to an undergraduate chemistry student.

## Report
{}

## Format
# What The Checks Found
[Plain-language explanation]
## Why It Matters
- [Effect of each issue on experimental conclusions]
## How To Fix It
[Practical steps, with a short analogy where it helps]"#,
            report
        ),
        SummaryMode::KeyFindings => format!(
            r#"Extract the key findings from this data quality report.

## Report
{}

## Format
## Key Findings
1. [Numbered findings with the figures from the report]
### Affected Columns
- [Column: issue]
### Recommended Actions
- [Action]"#,
            report
        ),
    }
}

/// Truncate to at most `max` characters on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
