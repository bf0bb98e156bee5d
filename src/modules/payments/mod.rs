pub mod models;
pub mod services;

pub use models::{Payment, PaymentStats};
pub use services::{PaymentAggregator, StatsWatch};
