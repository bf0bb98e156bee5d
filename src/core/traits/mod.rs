pub mod feed;
pub mod store;

pub use feed::{PaymentFeed, PaymentsCallback, Subscription};
pub use store::{CommitmentPatch, CommitmentStore};
