use chrono::NaiveDate;
use experience_span::utils::validation::Validate;
use experience_span::{
    ExperienceEngine, FixedClock, IntervalSource, OutputFormat, Report, RoundingMode, TomlConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

const HISTORY: &str = r#"
[profile]
name = "Portfolio"

[calculation]
rounding = "one_decimal"

[[experience]]
company = "As Softech, Kalyani"
position = "Web Developer"
start = "2023-02-01"
end = "2025-08-01"

[[experience]]
company = "Volstory"
position = "Web Development Intern"
start = "2020-06-01"
end = "2020-10-01"

[[experience]]
company = "skr technosoft"
start = "2025-12-01"
end = ""
"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_end_to_end_from_file() {
    let file = write_config(HISTORY);
    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let engine = ExperienceEngine::new(config, FixedClock(date(2026, 3, 1)));
    let summary = engine.run().unwrap();

    // 30 + 4 historical months plus Dec 2025 -> Mar 2026
    assert_eq!(summary.total_months, 37);
    assert_eq!(summary.spans.len(), 3);
    assert_eq!(summary.years.to_string(), "3.1");
    assert_eq!(summary.headline(), "3.1+ years");
}

#[test]
fn test_current_role_not_started_yet() {
    let config = TomlConfig::from_toml_str(HISTORY).unwrap();
    let summary = ExperienceEngine::new(config, FixedClock(date(2025, 8, 1)))
        .run()
        .unwrap();

    assert_eq!(summary.total_months, 34);
    assert_eq!(summary.spans.len(), 2);
}

#[test]
fn test_text_report_lists_positions() {
    let config = TomlConfig::from_toml_str(HISTORY).unwrap();
    let intervals = config.intervals().unwrap();
    let profile_name = config.profile_name().map(str::to_string);
    let summary = ExperienceEngine::new(config, FixedClock(date(2026, 3, 1)))
        .run()
        .unwrap();

    let text = Report::new(&summary, &intervals)
        .with_profile_name(profile_name.as_deref())
        .render(OutputFormat::Text)
        .unwrap();

    assert!(text.contains("Web Development Intern @ Volstory"));
    assert!(text.contains("Jun 2020 - Oct 2020"));
    assert!(text.contains("Dec 2025 - Present"));
    assert!(text.contains("37 months"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TomlConfig::from_file("/definitely/not/here/experience.toml").unwrap_err();
    assert_eq!(err.category(), experience_span::utils::error::ErrorCategory::Io);
}

#[test]
fn test_shipped_experience_list_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/experience.toml");
    let config = TomlConfig::from_file(path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.rounding_mode(), RoundingMode::Ceiling);
    assert_eq!(config.entries().len(), 3);
}
