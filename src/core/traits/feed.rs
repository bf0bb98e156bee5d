use crate::modules::payments::models::Payment;

/// Callback invoked with the full current payment set of one commitment
/// every time that set changes (including once on subscribe).
pub type PaymentsCallback = Box<dyn Fn(&[Payment]) + Send + Sync>;

/// Boundary contract with the external change-notification stream.
///
/// The engine has no internal threads; all liveness comes from the feed
/// pushing snapshots into the registered callback. Implementations must
/// deliver the current snapshot immediately on subscribe so watchers never
/// start from a stale default.
pub trait PaymentFeed: Send + Sync {
    /// Subscribe to the payment set of one commitment. The returned handle
    /// cancels exactly this subscription; other subscriptions are unaffected.
    fn subscribe_payments(&self, commitment_id: &str, on_change: PaymentsCallback)
        -> Subscription;
}

/// RAII unsubscribe handle. Cancellation happens on explicit `unsubscribe()`
/// or on drop, whichever comes first. Subscriptions have no timeout; they
/// live as long as the holder keeps the handle.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for feeds that have nothing to tear down
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Cancel the subscription now
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
