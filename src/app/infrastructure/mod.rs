//! Infrastructure layer - external integrations and utilities.
//!
//! - Preference persistence
//! - Timer scheduling on the FLTK event loop
//! - Platform color scheme detection
//! - Contact form submission
//! - Error types

pub mod error;
pub mod platform;
pub mod scheduler;
pub mod storage;
pub mod submission;
