//! Seams between the controllers and the widgets that render them.
//!
//! Controllers receive these as boxed trait objects at construction time.
//! Optional elements are `Option`s resolved once, never looked up per call.

use std::time::Duration;

use crate::app::domain::contact::ContactSubmission;
use crate::app::domain::notification::{Notification, NotificationStyle};
use crate::app::domain::theme::Theme;

/// Root style scope: receives every visual variable of the active theme.
pub trait ThemeSurface {
    fn set_variable(&mut self, name: &str, value: &str);
    fn set_theme_class(&mut self, theme: Theme);
}

pub trait ThemeToggleView {
    fn set_appearance(&mut self, icon: &str, label: &str);
}

/// Subscriber to "theme changed" broadcasts.
pub trait ThemeObserver {
    fn theme_changed(&mut self, theme: Theme);
}

/// Resolved navbar appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub shadow: &'static str,
}

pub trait NavbarView {
    fn set_scrolled(&mut self, scrolled: bool, style: NavbarStyle);
    /// Highlight the link targeting `section`, clearing all others.
    fn set_active_link(&mut self, section: Option<&str>);
    fn set_menu_open(&mut self, open: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_y: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGeometry {
    pub id: String,
    /// Offset of the section from the top of the page.
    pub top: i32,
    pub height: i32,
}

/// Card or text block that animates in the first time it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementGeometry {
    pub top: i32,
    pub height: i32,
}

/// Per-frame parallax offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxFrame {
    pub hero_offset: f64,
    /// `(translate_y, rotate_deg)` for each floating icon.
    pub icons: Vec<(f64, f64)>,
}

pub trait PageView {
    fn viewport(&self) -> Viewport;
    fn sections(&self) -> Vec<SectionGeometry>;
    fn reveal_section(&mut self, id: &str);
    /// Entrance-animated elements, in document order.
    fn animated_elements(&self) -> Vec<ElementGeometry>;
    /// Start the entrance animation of element `index` after `delay`.
    fn animate_element(&mut self, index: usize, delay: Duration);
    fn apply_parallax(&mut self, frame: &ParallaxFrame);
    fn floating_icon_count(&self) -> usize;
    fn scroll_to(&mut self, y: i32);
    fn set_skill_tag_lifted(&mut self, category: usize, tag: usize, lifted: bool);
    fn skill_tag_count(&self, category: usize) -> usize;
}

pub trait NotificationView {
    /// Replace whatever is shown with `notification`, positioned off-screen.
    fn mount(&mut self, notification: &Notification, style: &NotificationStyle);
    fn slide_in(&mut self);
    fn slide_out(&mut self);
    fn detach(&mut self);
}

pub trait ContactFormView {
    fn read(&self) -> ContactSubmission;
    fn clear(&mut self);
    /// Busy disables the submit control and shows a progress label.
    fn set_busy(&mut self, busy: bool);
}

pub trait SubtitleView {
    fn set_text(&mut self, text: &str);
}

/// Visible keyboard-focus outline.
pub trait FocusRingView {
    fn set_visible(&mut self, visible: bool);
}
