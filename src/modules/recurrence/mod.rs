pub mod models;
pub mod services;

pub use models::{Expansion, TransitionOutcome};
pub use services::{PeriodicityCalendar, RecurrenceExpander, RecurrenceTransitionManager};
