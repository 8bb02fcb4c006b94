pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::report::{OutputFormat, Report};
pub use crate::config::TomlConfig;
pub use crate::core::{calculator::calculate, engine::ExperienceEngine};
pub use crate::domain::model::{
    EmploymentInterval, ExperienceSummary, ExperienceYears, IntervalEnd, MergedSpan, RoundingMode,
};
pub use crate::domain::ports::{Clock, FixedClock, IntervalSource, StaticSource, SystemClock};
pub use crate::utils::error::{ExpError, Result};
