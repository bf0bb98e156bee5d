use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use commitrack::core::traits::{PaymentFeed, PaymentsCallback, Subscription};
use commitrack::modules::payments::models::Payment;

#[derive(Default)]
struct FeedInner {
    payments: Mutex<HashMap<String, Vec<Payment>>>,
    subscribers: Mutex<HashMap<u64, (String, PaymentsCallback)>>,
    next_key: AtomicU64,
}

/// In-memory payment change stream. Subscribers get the current snapshot
/// immediately and a fresh snapshot after every [`MemoryFeed::push_payment`].
#[derive(Clone, Default)]
pub struct MemoryFeed {
    inner: Arc<FeedInner>,
}

impl MemoryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payment and notify subscribers of that commitment
    pub fn push_payment(&self, payment: Payment) {
        let commitment_id = payment.commitment_id.clone();
        let snapshot = {
            let mut payments = self.inner.payments.lock().unwrap();
            let entry = payments.entry(commitment_id.clone()).or_default();
            entry.push(payment);
            entry.clone()
        };

        let subscribers = self.inner.subscribers.lock().unwrap();
        for (watched_id, callback) in subscribers.values() {
            if *watched_id == commitment_id {
                callback(&snapshot);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }
}

impl PaymentFeed for MemoryFeed {
    fn subscribe_payments(
        &self,
        commitment_id: &str,
        on_change: PaymentsCallback,
    ) -> Subscription {
        // Deliver the current snapshot before registering, so the watcher
        // never starts from a stale default
        let snapshot = self
            .inner
            .payments
            .lock()
            .unwrap()
            .get(commitment_id)
            .cloned()
            .unwrap_or_default();
        on_change(&snapshot);

        let key = self.inner.next_key.fetch_add(1, Ordering::SeqCst);
        self.inner
            .subscribers
            .lock()
            .unwrap()
            .insert(key, (commitment_id.to_string(), on_change));

        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            inner.subscribers.lock().unwrap().remove(&key);
        })
    }
}
