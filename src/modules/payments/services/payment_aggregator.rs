use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::core::traits::{PaymentFeed, Subscription};
use crate::modules::commitments::models::Commitment;
use crate::modules::payments::models::{Payment, PaymentStats};

/// Accumulates the payment records referencing one commitment into summary
/// statistics, either as a one-shot computation or as a live watch driven by
/// the injected [`PaymentFeed`].
pub struct PaymentAggregator;

impl PaymentAggregator {
    /// One-shot aggregation from a payment snapshot. Pure; the slice may be
    /// unfiltered, payments for other commitments are ignored.
    pub fn aggregate(commitment: &Commitment, payments: &[Payment]) -> PaymentStats {
        PaymentStats::for_commitment(&commitment.id, commitment.total_amount, payments)
    }

    /// Live statistics for one commitment, recomputed on every change event
    /// pushed by the feed.
    pub fn watch(commitment: &Commitment, feed: &dyn PaymentFeed) -> StatsWatch {
        Self::watch_with(commitment, feed, |_| {})
    }

    /// Like [`PaymentAggregator::watch`], additionally invoking `on_stats`
    /// with every fresh result (the status chip re-render path).
    pub fn watch_with(
        commitment: &Commitment,
        feed: &dyn PaymentFeed,
        on_stats: impl Fn(&PaymentStats) + Send + Sync + 'static,
    ) -> StatsWatch {
        let commitment_id = commitment.id.clone();
        let total_amount = commitment.total_amount;
        let current = Arc::new(Mutex::new(PaymentStats::empty(total_amount)));

        let slot = Arc::clone(&current);
        let watched_id = commitment_id.clone();
        let subscription = feed.subscribe_payments(
            &commitment_id,
            Box::new(move |payments: &[Payment]| {
                let stats = PaymentStats::for_commitment(&watched_id, total_amount, payments);
                debug!(
                    commitment_id = watched_id.as_str(),
                    total_paid = %stats.total_paid,
                    payments = stats.payments_count,
                    "Payment stats recomputed"
                );
                *slot.lock().expect("stats lock poisoned") = stats.clone();
                on_stats(&stats);
            }),
        );

        StatsWatch {
            commitment_id,
            current,
            subscription: Some(subscription),
        }
    }
}

/// Handle to one live payment-stats computation. Dropping it (or calling
/// [`StatsWatch::unsubscribe`]) cancels the underlying feed subscription
/// without affecting watches on other commitments.
pub struct StatsWatch {
    commitment_id: String,
    current: Arc<Mutex<PaymentStats>>,
    subscription: Option<Subscription>,
}

impl StatsWatch {
    pub fn commitment_id(&self) -> &str {
        &self.commitment_id
    }

    /// Latest computed statistics
    pub fn current(&self) -> PaymentStats {
        self.current.lock().expect("stats lock poisoned").clone()
    }

    /// Stop receiving updates. The last computed stats stay readable.
    pub fn unsubscribe(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }
}

impl std::fmt::Debug for StatsWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsWatch")
            .field("commitment_id", &self.commitment_id)
            .field("active", &self.subscription.is_some())
            .finish()
    }
}
