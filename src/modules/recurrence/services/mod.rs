pub mod periodicity_calendar;
pub mod recurrence_expander;
pub mod transition_manager;

pub use periodicity_calendar::PeriodicityCalendar;
pub use recurrence_expander::RecurrenceExpander;
pub use transition_manager::RecurrenceTransitionManager;
