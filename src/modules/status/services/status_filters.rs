use chrono::{Days, NaiveDate};

use crate::modules::commitments::models::Commitment;
use crate::modules::payments::models::PaymentStats;
use crate::modules::status::models::StatusKey;
use crate::modules::status::services::StatusClassifier;

/// Dashboard filters over a commitment list. `PendingOrPartial` is the
/// composite "pendientes" view; `DueSoon` is the 3-day lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Completed,
    Partial,
    /// Pending plus partially paid (both still owe money and are on schedule)
    PendingOrPartial,
    Overdue,
    /// Unpaid or partially paid, due strictly within the next 3 days
    DueSoon,
}

/// Lookahead window for [`StatusFilter::DueSoon`]
const DUE_SOON_DAYS: u64 = 3;

/// Tally of classified statuses across a commitment set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub partial: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Filter (commitment, stats) pairs by their classified status.
pub fn filter_by_status<'a>(
    items: &'a [(Commitment, PaymentStats)],
    filter: StatusFilter,
    today: NaiveDate,
) -> Vec<&'a Commitment> {
    items
        .iter()
        .filter(|(commitment, stats)| {
            let key = StatusClassifier::classify(commitment, stats, today).key;
            match filter {
                StatusFilter::All => true,
                StatusFilter::Completed => key == StatusKey::Completed,
                StatusFilter::Partial => key == StatusKey::Partial,
                StatusFilter::PendingOrPartial => {
                    key == StatusKey::Pending || key == StatusKey::Partial
                }
                StatusFilter::Overdue => key == StatusKey::Overdue,
                StatusFilter::DueSoon => {
                    if key != StatusKey::Pending && key != StatusKey::Partial {
                        return false;
                    }
                    let horizon = today + Days::new(DUE_SOON_DAYS);
                    commitment.due_date > today && commitment.due_date < horizon
                }
            }
        })
        .map(|(commitment, _)| commitment)
        .collect()
}

/// Count statuses across a commitment set (the dashboard summary row).
pub fn status_counts(items: &[(Commitment, PaymentStats)], today: NaiveDate) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for (commitment, stats) in items {
        counts.total += 1;
        match StatusClassifier::classify(commitment, stats, today).key {
            StatusKey::Completed => counts.completed += 1,
            StatusKey::Partial => counts.partial += 1,
            StatusKey::Overdue => counts.overdue += 1,
            StatusKey::Pending => counts.pending += 1,
        }
    }
    counts
}
