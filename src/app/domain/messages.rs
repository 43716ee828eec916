/// Identifies one mounted notification so stale timer messages can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

/// Timed steps of a notification's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTimer {
    SlideIn(NotificationId),
    AutoDismiss(NotificationId),
    Detach(NotificationId),
}

/// Key press as seen by the shortcut handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyCode,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Focus is inside a text input or text area.
    pub in_text_input: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Tab,
    Other,
}

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks, timers and worker threads send one of these; the
/// dispatch loop in main hands them to `AppState::handle`.
#[derive(Debug, Clone)]
pub enum Message {
    // Theme
    ToggleTheme,
    SystemSchemeChanged(bool),

    // Scrolling and layout
    Scrolled,
    Resized,
    NavLinkClicked(String),
    ToggleMobileMenu,

    // Notifications
    CloseNotification,
    NotificationTimer(NotificationTimer),

    // Contact form
    SubmitContact,
    SubmissionFinished(Result<(), String>),

    // Decorative effects
    TypewriterTick,
    SkillHover { category: usize, entered: bool },
    SkillTagLift { category: usize, tag: usize },
    ProjectLinkClicked(usize),

    // Input and window
    KeyPressed(KeyInput),
    PointerPressed,
    WindowVisible(bool),
    Quit,
}
