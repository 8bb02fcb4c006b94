use crate::domain::model::{
    EmploymentInterval, ExperienceSummary, ExperienceYears, IntervalEnd, MergedSpan, RoundingMode,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_date_order;
use chrono::NaiveDate;

/// Rejects closed intervals whose start is after their declared end.
pub fn validate_intervals(intervals: &[EmploymentInterval]) -> Result<()> {
    for interval in intervals {
        if let IntervalEnd::Closed(end) = interval.end {
            validate_date_order(interval.label().as_deref(), interval.start, end)?;
        }
    }
    Ok(())
}

/// Resolves effective ends, sorts by start and unions overlapping or touching
/// intervals. Intervals starting after `today` contribute nothing and are dropped.
pub fn merge_intervals(intervals: &[EmploymentInterval], today: NaiveDate) -> Vec<MergedSpan> {
    let mut resolved: Vec<(NaiveDate, NaiveDate)> = intervals
        .iter()
        .filter_map(|interval| {
            if interval.start > today {
                tracing::debug!(
                    "Skipping interval starting {} after reference date {}",
                    interval.start,
                    today
                );
                return None;
            }
            Some((interval.start, interval.effective_end(today)))
        })
        .collect();

    resolved.sort_by_key(|&(start, _)| start);

    let mut merged = Vec::new();
    let mut iter = resolved.into_iter();
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        if next.0 <= current.1 {
            tracing::debug!(
                "Merging {}..{} into {}..{}",
                next.0,
                next.1,
                current.0,
                current.1
            );
            current.1 = current.1.max(next.1);
        } else {
            merged.push(MergedSpan::new(current.0, current.1));
            current = next;
        }
    }
    merged.push(MergedSpan::new(current.0, current.1));

    merged
}

pub fn total_months(spans: &[MergedSpan]) -> u32 {
    spans.iter().map(|span| span.months).sum()
}

/// Computes non-overlapping experience as of `today`.
///
/// Pure: the same intervals, date and rounding mode always give the same summary.
///
/// # Errors
///
/// Returns [`ExpError::InvalidInterval`](crate::utils::error::ExpError::InvalidInterval)
/// when a closed interval starts after it ends.
pub fn calculate(
    intervals: &[EmploymentInterval],
    today: NaiveDate,
    rounding: RoundingMode,
) -> Result<ExperienceSummary> {
    validate_intervals(intervals)?;

    let spans = merge_intervals(intervals, today);
    let total_months = total_months(&spans);
    let years = ExperienceYears::from_months(total_months, rounding);

    tracing::debug!(
        "{} intervals -> {} merged spans, {} months, {} years ({})",
        intervals.len(),
        spans.len(),
        total_months,
        years,
        rounding
    );

    Ok(ExperienceSummary {
        today,
        total_months,
        spans,
        years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ExpError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_list_is_zero() {
        let summary = calculate(&[], date(2025, 8, 1), RoundingMode::Ceiling).unwrap();
        assert_eq!(summary.total_months, 0);
        assert!(summary.spans.is_empty());
        assert_eq!(summary.years.tenths, 0);
    }

    #[test]
    fn test_disjoint_intervals_sum() {
        let intervals = vec![
            EmploymentInterval::closed(date(2023, 2, 1), date(2025, 8, 1)),
            EmploymentInterval::closed(date(2020, 6, 1), date(2020, 10, 1)),
        ];

        let summary = calculate(&intervals, date(2025, 8, 1), RoundingMode::Ceiling).unwrap();
        assert_eq!(summary.spans.len(), 2);
        assert_eq!(summary.spans[0].start, date(2020, 6, 1));
        assert_eq!(summary.total_months, 34);
        assert_eq!(summary.years.to_string(), "3");
    }

    #[test]
    fn test_touching_intervals_merge() {
        let intervals = vec![
            EmploymentInterval::closed(date(2022, 1, 1), date(2022, 6, 1)),
            EmploymentInterval::closed(date(2022, 6, 1), date(2022, 9, 1)),
        ];

        let spans = merge_intervals(&intervals, date(2025, 1, 1));
        assert_eq!(spans, vec![MergedSpan::new(date(2022, 1, 1), date(2022, 9, 1))]);
        assert_eq!(spans[0].months, 8);
    }

    #[test]
    fn test_identical_intervals_collapse() {
        let interval = EmploymentInterval::closed(date(2021, 3, 1), date(2022, 3, 1));
        let intervals = vec![interval.clone(), interval.clone(), interval];

        let summary = calculate(&intervals, date(2025, 1, 1), RoundingMode::OneDecimal).unwrap();
        assert_eq!(summary.spans.len(), 1);
        assert_eq!(summary.total_months, 12);
        assert_eq!(summary.years.to_string(), "1.0");
    }

    #[test]
    fn test_open_interval_runs_to_today() {
        let intervals = vec![EmploymentInterval::open(date(2024, 2, 15))];
        let summary = calculate(&intervals, date(2025, 5, 3), RoundingMode::OneDecimal).unwrap();
        assert_eq!(summary.spans[0].end, date(2025, 5, 3));
        assert_eq!(summary.total_months, 15);
        assert_eq!(summary.years.to_string(), "1.3");
    }

    #[test]
    fn test_future_end_is_clamped() {
        let intervals = vec![EmploymentInterval::closed(date(2024, 1, 1), date(2030, 1, 1))];
        let summary = calculate(&intervals, date(2024, 7, 1), RoundingMode::Ceiling).unwrap();
        assert_eq!(summary.spans[0].end, date(2024, 7, 1));
        assert_eq!(summary.total_months, 6);
    }

    #[test]
    fn test_start_after_today_contributes_nothing() {
        let intervals = vec![
            EmploymentInterval::open(date(2025, 12, 1)),
            EmploymentInterval::closed(date(2026, 1, 1), date(2026, 6, 1)),
        ];
        let summary = calculate(&intervals, date(2025, 6, 1), RoundingMode::Ceiling).unwrap();
        assert_eq!(summary.total_months, 0);
        assert!(summary.spans.is_empty());
    }

    #[test]
    fn test_reversed_closed_interval_is_rejected() {
        let intervals = vec![
            EmploymentInterval::closed(date(2020, 10, 1), date(2020, 6, 1)).with_company("Volstory"),
        ];

        let err = calculate(&intervals, date(2025, 1, 1), RoundingMode::Ceiling).unwrap_err();
        match err {
            ExpError::InvalidInterval { label, start, end } => {
                assert_eq!(label.as_deref(), Some("Volstory"));
                assert_eq!(start, date(2020, 10, 1));
                assert_eq!(end, date(2020, 6, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
