use std::time::Duration;

use super::theme::Theme;

/// How long a notification stays up when no duration is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Delay between mounting a notification and sliding it into view.
pub const SLIDE_IN_DELAY: Duration = Duration::from_millis(100);

/// Time the slide-out transition needs before the element can be detached.
pub const FADE_OUT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "@-2returnarrow",
            NotificationKind::Error => "@-2+",
            NotificationKind::Info => "@-2menu",
            NotificationKind::Warning => "@-2>",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Warning => "notification-warning",
            NotificationKind::Error => "notification-error",
        }
    }

    /// Background color for this kind, adjusted for the active theme.
    pub fn color(&self, theme: Theme) -> &'static str {
        match (theme, self) {
            (Theme::Dark, NotificationKind::Success) => "#00ff88",
            (Theme::Dark, NotificationKind::Error) => "#ff4757",
            (Theme::Dark, NotificationKind::Info) => "#00d4ff",
            (Theme::Dark, NotificationKind::Warning) => "#ffaa00",
            (Theme::Light, NotificationKind::Success) => "#38a169",
            (Theme::Light, NotificationKind::Error) => "#e53e3e",
            (Theme::Light, NotificationKind::Info) => "#3182ce",
            (Theme::Light, NotificationKind::Warning) => "#d69e2e",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            duration,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info, DEFAULT_DURATION)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success, DEFAULT_DURATION)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error, DEFAULT_DURATION)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Resolved presentation of a notification for the current theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationStyle {
    pub background: &'static str,
    pub foreground: &'static str,
    pub shadow: &'static str,
    pub icon: &'static str,
}

impl NotificationStyle {
    pub fn resolve(kind: NotificationKind, theme: Theme) -> Self {
        Self {
            background: kind.color(theme),
            foreground: "#ffffff",
            shadow: match theme {
                Theme::Dark => "0 10px 25px rgba(0, 0, 0, 0.3)",
                Theme::Light => "0 10px 25px rgba(0, 0, 0, 0.15)",
            },
            icon: kind.icon(),
        }
    }
}
