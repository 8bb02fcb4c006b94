use crate::domain::model::{EmploymentInterval, ExperienceSummary};
use crate::utils::error::{ExpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// What gets rendered: the computed summary plus the labelled entries behind it.
pub struct Report<'a> {
    pub profile_name: Option<&'a str>,
    pub intervals: &'a [EmploymentInterval],
    pub summary: &'a ExperienceSummary,
}

impl<'a> Report<'a> {
    pub fn new(summary: &'a ExperienceSummary, intervals: &'a [EmploymentInterval]) -> Self {
        Self {
            profile_name: None,
            intervals,
            summary,
        }
    }

    pub fn with_profile_name(mut self, name: Option<&'a str>) -> Self {
        self.profile_name = name;
        self
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self.summary)?),
            OutputFormat::Csv => self.render_csv(),
        }
    }

    fn render_text(&self) -> String {
        let summary = self.summary;
        let mut out = String::new();

        if let Some(name) = self.profile_name {
            let _ = writeln!(out, "{}", name);
        }
        let _ = writeln!(
            out,
            "{} of experience ({} months, as of {})",
            summary.headline(),
            summary.total_months,
            summary.today
        );

        if !self.intervals.is_empty() {
            let _ = writeln!(out, "\nPositions:");
            for interval in self.intervals {
                let label = interval.label().unwrap_or_else(|| "(unlabelled)".to_string());
                let _ = writeln!(out, "  {:<40} {}", label, interval.period_label());
            }
        }

        let _ = writeln!(out, "\nMerged spans:");
        if summary.spans.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for span in &summary.spans {
            let _ = writeln!(out, "  {} .. {}  {:>3} months", span.start, span.end, span.months);
        }

        out
    }

    fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["start", "end", "months"])?;
        for span in &self.summary.spans {
            writer.write_record([
                span.start.to_string(),
                span.end.to_string(),
                span.months.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExpError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| ExpError::ProcessingError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}
