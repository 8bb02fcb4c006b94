use crate::domain::model::{EmploymentInterval, IntervalEnd, RoundingMode};
use crate::domain::ports::IntervalSource;
use crate::utils::error::{ExpError, Result};
use crate::utils::validation::{
    is_open_end_marker, parse_calendar_date, validate_date_order, validate_non_empty_string,
    validate_required_field, Validate,
};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub profile: Option<ProfileConfig>,
    #[serde(default)]
    pub calculation: CalculationConfig,
    pub experience: Option<Vec<ExperienceEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    pub rounding: Option<RoundingMode>,
    /// Pinned reference date; the system clock is used when absent.
    pub today: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub start: String,
    pub end: Option<String>,
}

impl ExperienceEntry {
    fn field(index: usize, name: &str) -> String {
        format!("experience[{}].{}", index, name)
    }

    /// Parses the entry without checking date order.
    pub fn to_interval(&self, index: usize) -> Result<EmploymentInterval> {
        let start = parse_calendar_date(&Self::field(index, "start"), &self.start)?;
        let end = match self.end.as_deref() {
            None => IntervalEnd::Open,
            Some(value) if is_open_end_marker(value) => IntervalEnd::Open,
            Some(value) => IntervalEnd::Closed(parse_calendar_date(&Self::field(index, "end"), value)?),
        };

        Ok(EmploymentInterval {
            start,
            end,
            company: self.company.clone(),
            position: self.position.clone(),
            description: self.description.clone(),
        })
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// Loads the experience list from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExpError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the experience list from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ExpError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(profile) = &self.profile {
            validate_non_empty_string("profile.name", &profile.name)?;
        }

        self.reference_date()?;

        let entries = validate_required_field("experience", &self.experience)?;
        if entries.is_empty() {
            return Err(ExpError::MissingConfigError {
                field: "experience".to_string(),
            });
        }

        for (index, entry) in entries.iter().enumerate() {
            let interval = entry.to_interval(index)?;
            if let IntervalEnd::Closed(end) = interval.end {
                validate_date_order(interval.label().as_deref(), interval.start, end)?;
            }
        }

        Ok(())
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.calculation.rounding.unwrap_or_default()
    }

    /// The pinned `calculation.today`, if configured.
    pub fn reference_date(&self) -> Result<Option<NaiveDate>> {
        self.calculation
            .today
            .as_deref()
            .map(|value| parse_calendar_date("calculation.today", value))
            .transpose()
    }

    pub fn profile_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.name.as_str())
    }

    pub fn entries(&self) -> &[ExperienceEntry] {
        self.experience.as_deref().unwrap_or(&[])
    }
}

impl IntervalSource for TomlConfig {
    fn intervals(&self) -> Result<Vec<EmploymentInterval>> {
        self.entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_interval(index))
            .collect()
    }

    fn rounding(&self) -> RoundingMode {
        self.rounding_mode()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
