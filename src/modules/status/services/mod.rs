pub mod status_classifier;
pub mod status_filters;

pub use status_classifier::StatusClassifier;
pub use status_filters::{filter_by_status, status_counts, StatusCounts, StatusFilter};
