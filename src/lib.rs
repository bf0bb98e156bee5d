//! Commitrack Recurrence Scheduling & Payment Reconciliation Engine
//!
//! This library provides the scheduling core of a financial-obligations
//! tracker: expanding commitment definitions into bounded recurring series,
//! reconciling periodicity changes on edit, and deriving the authoritative
//! payment status of a commitment from its accumulated payments.
//!
//! The persistent store and the payment change-notification stream are
//! external collaborators injected behind the traits in [`core::traits`].

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::commitments;
pub use modules::payments;
pub use modules::recurrence;
pub use modules::status;
