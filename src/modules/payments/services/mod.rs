pub mod payment_aggregator;

pub use payment_aggregator::{PaymentAggregator, StatsWatch};
