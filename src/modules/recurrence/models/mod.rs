pub mod expansion;

pub use expansion::{new_group_id, Expansion, TransitionOutcome};
