pub mod models;
pub mod services;

pub use models::{StatusBadge, StatusKey};
pub use services::{filter_by_status, status_counts, StatusClassifier, StatusCounts, StatusFilter};
