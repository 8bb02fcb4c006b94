pub mod calculator;
pub mod engine;

pub use crate::domain::model::{EmploymentInterval, ExperienceSummary, IntervalEnd, RoundingMode};
pub use crate::domain::ports::{Clock, IntervalSource};
pub use crate::utils::error::Result;
