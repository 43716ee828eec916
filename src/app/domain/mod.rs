//! Domain layer - core data structures and types.
//!
//! - Theme and its visual variables
//! - Notifications and their styling
//! - Contact form submission and validation
//! - Portfolio content configuration
//! - Message types for the event system

pub mod config;
pub mod contact;
pub mod messages;
pub mod notification;
pub mod theme;

pub use config::PortfolioConfig;
pub use messages::Message;
pub use notification::{Notification, NotificationKind};
pub use theme::Theme;
