//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Theme, Notification, ContactSubmission, Messages)
//! - `controllers/` - Page behaviors driven by messages (theme, scroll, contact, ...)
//! - `infrastructure/` - External integrations (preference file, timers, platform, error)
//! - `view.rs` - Traits the UI layer implements for the controllers
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;

// Re-exports for convenient external access
pub use domain::{Message, PortfolioConfig, Theme};
pub use infrastructure::platform::{detect_system_dark_mode, watch_system_scheme};
pub use state::{AppState, Views};
