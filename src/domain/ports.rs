use crate::domain::model::{EmploymentInterval, RoundingMode};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Source of the reference date. The calculator never reads the wall clock itself.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Supplies the experience list and the rounding policy to apply to it.
pub trait IntervalSource {
    fn intervals(&self) -> Result<Vec<EmploymentInterval>>;
    fn rounding(&self) -> RoundingMode;
}

/// In-memory source, for hard-coded lists and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub intervals: Vec<EmploymentInterval>,
    pub rounding: RoundingMode,
}

impl StaticSource {
    pub fn new(intervals: Vec<EmploymentInterval>, rounding: RoundingMode) -> Self {
        Self {
            intervals,
            rounding,
        }
    }
}

impl IntervalSource for StaticSource {
    fn intervals(&self) -> Result<Vec<EmploymentInterval>> {
        Ok(self.intervals.clone())
    }

    fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}
