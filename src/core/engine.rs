use crate::core::calculator;
use crate::domain::model::ExperienceSummary;
use crate::domain::ports::{Clock, IntervalSource};
use crate::utils::error::Result;

pub struct ExperienceEngine<S: IntervalSource, C: Clock> {
    source: S,
    clock: C,
}

impl<S: IntervalSource, C: Clock> ExperienceEngine<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn run(&self) -> Result<ExperienceSummary> {
        tracing::info!("Loading experience intervals...");
        let intervals = self.source.intervals()?;
        tracing::info!("Loaded {} intervals", intervals.len());

        let today = self.clock.today();
        let rounding = self.source.rounding();
        tracing::info!("Calculating experience as of {} ({} rounding)", today, rounding);

        let summary = calculator::calculate(&intervals, today, rounding)?;
        tracing::info!(
            "Total: {} months across {} spans -> {}",
            summary.total_months,
            summary.spans.len(),
            summary.headline()
        );

        Ok(summary)
    }
}
