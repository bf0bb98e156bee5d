pub mod commitments;
pub mod payments;
pub mod recurrence;
pub mod status;
