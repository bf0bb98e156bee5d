use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::Result;
use crate::modules::commitments::models::Commitment;
use crate::modules::recurrence::models::{new_group_id, Expansion};
use crate::modules::recurrence::services::PeriodicityCalendar;

/// Expands one base commitment into a bounded list of sibling drafts sharing
/// a fresh group id.
///
/// Synchronous and pure apart from id generation; persistence is the
/// caller's job and must happen as one batched write.
pub struct RecurrenceExpander;

impl RecurrenceExpander {
    /// Build sibling drafts for `base`.
    ///
    /// Candidate dates come from [`PeriodicityCalendar::next_due_dates`]
    /// anchored at `base.due_date`; anything past `max_date` is dropped,
    /// which can legitimately shrink the result below `count`. An empty
    /// result is a valid outcome and not an error.
    ///
    /// `skip_first` drops the candidate equal to the anchor's own due date;
    /// use it when the anchor already exists as a stored record and only the
    /// additional siblings must be created. Indices then start at 1, leaving
    /// 0 for the anchor.
    pub fn expand(
        base: &Commitment,
        count: u32,
        skip_first: bool,
        max_date: NaiveDate,
    ) -> Result<Expansion> {
        let candidates =
            PeriodicityCalendar::next_due_dates(base.due_date, base.periodicity, count)?;

        let group_id = new_group_id();
        let first_index = u32::from(skip_first);

        let drafts: Vec<Commitment> = candidates
            .into_iter()
            .enumerate()
            .skip(first_index as usize)
            .take_while(|(_, date)| *date <= max_date)
            .map(|(i, date)| base.recurrence_draft(date, &group_id, i as u32))
            .collect();

        if drafts.is_empty() {
            debug!(
                commitment_id = base.id.as_str(),
                periodicity = %base.periodicity,
                max_date = %max_date,
                "Expansion capacity exhausted; no sibling dates fit before the cap"
            );
        } else {
            info!(
                commitment_id = base.id.as_str(),
                group_id = group_id.as_str(),
                periodicity = %base.periodicity,
                siblings = drafts.len(),
                skip_first,
                "Expanded commitment into recurring drafts"
            );
        }

        Ok(Expansion { group_id, drafts })
    }

    /// Expansion sized by [`PeriodicityCalendar::default_instance_count`] and
    /// capped at the anchor's year end: the manual-entry default.
    pub fn expand_for_current_year(base: &Commitment, skip_first: bool) -> Result<Expansion> {
        let count =
            PeriodicityCalendar::default_instance_count(base.periodicity, base.due_date)?;
        Self::expand(
            base,
            count,
            skip_first,
            PeriodicityCalendar::year_end(base.due_date),
        )
    }
}
