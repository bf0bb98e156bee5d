pub mod models;

pub use models::{AmountComponents, Commitment, ManualPaidMark, Periodicity};
