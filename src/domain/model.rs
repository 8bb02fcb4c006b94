use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// End of an employment interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "date")]
pub enum IntervalEnd {
    Closed(NaiveDate),
    /// Ongoing; resolves to the reference date at evaluation time.
    Open,
}

/// One continuous period of work. Labels are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInterval {
    pub start: NaiveDate,
    pub end: IntervalEnd,
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
}

impl EmploymentInterval {
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: IntervalEnd::Closed(end),
            company: None,
            position: None,
            description: None,
        }
    }

    pub fn open(start: NaiveDate) -> Self {
        Self {
            start,
            end: IntervalEnd::Open,
            company: None,
            position: None,
            description: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn is_open(&self) -> bool {
        matches!(self.end, IntervalEnd::Open)
    }

    /// `min(end_or_today, today)`
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        match self.end {
            IntervalEnd::Closed(end) => end.min(today),
            IntervalEnd::Open => today,
        }
    }

    /// Human label for error messages and reports, e.g. "Web Developer @ As Softech".
    pub fn label(&self) -> Option<String> {
        match (&self.position, &self.company) {
            (Some(position), Some(company)) => Some(format!("{} @ {}", position, company)),
            (Some(position), None) => Some(position.clone()),
            (None, Some(company)) => Some(company.clone()),
            (None, None) => None,
        }
    }

    /// Period in the "Feb 2023 - Aug 2025" form; open intervals end in "Present".
    pub fn period_label(&self) -> String {
        let start = self.start.format("%b %Y");
        match self.end {
            IntervalEnd::Closed(end) => format!("{} - {}", start, end.format("%b %Y")),
            IntervalEnd::Open => format!("{} - Present", start),
        }
    }
}

/// Union of one or more overlapping or touching intervals, counted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub months: u32,
}

impl MergedSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            months: month_span(start, end),
        }
    }
}

/// Whole calendar months between two dates, ignoring day-of-month.
/// Negative spans clamp to zero.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> u32 {
    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    months.max(0) as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RoundingMode {
    /// Round up to the next whole year.
    #[default]
    Ceiling,
    /// Round half-up to one decimal place.
    OneDecimal,
}

impl RoundingMode {
    /// Converts a month total into tenths of a year under this mode.
    pub fn to_tenths(self, total_months: u32) -> u32 {
        match self {
            RoundingMode::Ceiling => total_months.div_ceil(12) * 10,
            RoundingMode::OneDecimal => (total_months * 10 + 6) / 12,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Ceiling => write!(f, "ceiling"),
            RoundingMode::OneDecimal => write!(f, "one_decimal"),
        }
    }
}

/// Rounded years of experience. Stored in tenths to keep the value exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceYears {
    pub tenths: u32,
    pub rounding: RoundingMode,
}

impl ExperienceYears {
    pub fn from_months(total_months: u32, rounding: RoundingMode) -> Self {
        Self {
            tenths: rounding.to_tenths(total_months),
            rounding,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.tenths as f64 / 10.0
    }
}

impl fmt::Display for ExperienceYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounding {
            RoundingMode::Ceiling => write!(f, "{}", self.tenths / 10),
            RoundingMode::OneDecimal => write!(f, "{}.{}", self.tenths / 10, self.tenths % 10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    pub today: NaiveDate,
    pub total_months: u32,
    pub spans: Vec<MergedSpan>,
    pub years: ExperienceYears,
}

impl ExperienceSummary {
    /// Presentation string such as "3+ years".
    pub fn headline(&self) -> String {
        let unit = if self.years.tenths == 10 { "year" } else { "years" };
        format!("{}+ {}", self.years, unit)
    }
}
