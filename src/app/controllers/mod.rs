//! Controllers layer - page behaviors.
//!
//! Each controller owns its state and the view seams it renders into,
//! and is driven by `AppState` in response to messages.

pub mod contact;
pub mod hover;
pub mod keyboard;
pub mod navigation;
pub mod notifications;
pub mod scroll;
pub mod theme;
pub mod typewriter;
