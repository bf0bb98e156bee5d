use chrono::{Datelike, Months, NaiveDate};

use crate::core::{AppError, Result};
use crate::modules::commitments::models::Periodicity;

/// Pure date math for recurrence schedules: given an anchor date and a
/// periodicity, produces the ordered sequence of due dates. No I/O, fully
/// deterministic.
pub struct PeriodicityCalendar;

impl PeriodicityCalendar {
    /// The ordered due dates of a schedule, `count` entries starting at the
    /// anchor itself.
    ///
    /// `dates[i]` is the anchor advanced by `i * interval` calendar months
    /// (true month addition, so a Jan-31 anchor clamps to the last valid day
    /// of shorter months). `Unique` periodicity and a zero count are
    /// validation errors; nothing is partially computed.
    pub fn next_due_dates(
        anchor: NaiveDate,
        periodicity: Periodicity,
        count: u32,
    ) -> Result<Vec<NaiveDate>> {
        let interval = periodicity.interval_months().ok_or_else(|| {
            AppError::validation("Cannot build a schedule for a one-time commitment")
        })?;

        if count == 0 {
            return Err(AppError::validation(
                "Schedule count must be at least 1, got 0",
            ));
        }

        let mut dates = Vec::with_capacity(count as usize);
        for i in 0..count {
            let date = anchor
                .checked_add_months(Months::new(i * interval))
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "Due date overflow advancing {} by {} months",
                        anchor,
                        i * interval
                    ))
                })?;
            dates.push(date);
        }

        Ok(dates)
    }

    /// How many instances fit between the anchor's month and December of the
    /// anchor's year, inclusive. This is the UI default that respects the
    /// never-schedule-past-year-end invariant without the caller knowing the
    /// interval table.
    ///
    /// `Annual` is always 1: the next instance lands in a different year.
    pub fn default_instance_count(periodicity: Periodicity, anchor: NaiveDate) -> Result<u32> {
        let interval = periodicity.interval_months().ok_or_else(|| {
            AppError::validation("Cannot size a schedule for a one-time commitment")
        })?;

        if periodicity == Periodicity::Annual {
            return Ok(1);
        }

        let remaining_months = 12 - anchor.month0();
        let count = remaining_months.div_ceil(interval);
        Ok(count.max(1))
    }

    /// December 31 of the anchor's year: the hard cap on every expansion
    pub fn year_end(anchor: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(anchor.year(), 12, 31).expect("Dec 31 exists in every year")
    }
}
