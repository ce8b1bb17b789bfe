//! Plain-text and JSON verdict reports for the non-interactive mode.

use crate::types::AnalysisResult;
use crate::verdict::{self, Tier};
use serde::Serialize;
use std::fmt::Write;

/// Line used in place of an empty red-flag list.
pub const NO_RED_FLAGS: &str = "No red flags found.";

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub trust_score: u8,
    pub tier: Tier,
    pub verdict: &'static str,
    pub gauge_fraction: f64,
    pub summary: &'a str,
    pub gotchas: &'a [String],
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(result: &'a AnalysisResult) -> Self {
        let presentation = verdict::render(result.trust_score);
        Self {
            trust_score: presentation.score,
            tier: presentation.tier,
            verdict: presentation.headline,
            gauge_fraction: presentation.gauge_fraction,
            summary: &result.summary,
            gotchas: &result.gotchas,
        }
    }
}

/// Human-readable report.
#[must_use]
pub fn render_text(result: &AnalysisResult) -> String {
    let presentation = verdict::render(result.trust_score);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Trust Score: {}% ({}) - {}",
        presentation.score, presentation.label, presentation.headline
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Summary");
    let _ = writeln!(out, "{}", result.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "Red Flags");
    if result.has_red_flags() {
        for item in &result.gotchas {
            let _ = writeln!(out, "  ⚠ {item}");
        }
    } else {
        let _ = writeln!(out, "  {NO_RED_FLAGS}");
    }

    out
}

/// Pretty-printed JSON report.
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(result))
}
