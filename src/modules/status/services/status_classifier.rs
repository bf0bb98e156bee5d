use chrono::{Local, NaiveDate};

use crate::modules::commitments::models::Commitment;
use crate::modules::payments::models::PaymentStats;
use crate::modules::status::models::StatusBadge;

/// Single source of truth for the displayed status of a commitment.
///
/// Pure function of (commitment snapshot, payment snapshot, reference date);
/// no hidden state. The stored `status` hint on the record plays no part in
/// classification and is never written by this service.
pub struct StatusClassifier;

impl StatusClassifier {
    /// Classify against an explicit reference date.
    ///
    /// Fixed priority order, first match wins:
    /// 1. completed: fully paid within tolerance, or manually marked paid
    /// 2. partial: any payment recorded, even past the due date
    /// 3. overdue: no payments and due date strictly before `today`
    /// 4. pending: default
    pub fn classify(
        commitment: &Commitment,
        stats: &PaymentStats,
        today: NaiveDate,
    ) -> StatusBadge {
        if stats.is_completely_paid || commitment.is_manually_paid() {
            return StatusBadge::completed();
        }

        if stats.is_partially_paid {
            return StatusBadge::partial(stats.payment_percentage);
        }

        if stats.has_no_payments && commitment.due_date < today {
            return StatusBadge::overdue();
        }

        StatusBadge::pending()
    }

    /// Classify against the local calendar date. Date-only comparison, so a
    /// commitment due today is pending regardless of the time of day.
    pub fn classify_now(commitment: &Commitment, stats: &PaymentStats) -> StatusBadge {
        Self::classify(commitment, stats, Local::now().date_naive())
    }
}
