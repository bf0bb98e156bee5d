pub mod commitment;
pub mod periodicity;

pub use commitment::{AmountComponents, Commitment, ManualPaidMark};
pub use periodicity::Periodicity;
