//! Fuzz target for the full report pipeline.
//!
//! Any input the parser accepts must produce a report with bounded scores.

#![no_main]

use assay::{Parser, ReportGenerator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 20_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(dataset) = Parser::new().parse_str(text) else {
        return;
    };

    let report = ReportGenerator::new().generate_full_report(&dataset, "fuzz");
    assert!((0.0..=100.0).contains(&report.metrics.overall_score));
    let _ = report.render_text();
});
