pub mod payment;
pub mod payment_stats;

pub use payment::Payment;
pub use payment_stats::{completion_tolerance, PaymentStats};
