use std::time::Duration;

use super::notifications::Notifier;
use crate::app::domain::theme::Theme;
use crate::app::infrastructure::storage::{PreferenceStore, THEME_KEY};
use crate::app::view::{ThemeObserver, ThemeSurface, ThemeToggleView};

/// How long the "Switched to ... mode" notice stays up.
const TOGGLE_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Why a theme is being applied. Only an explicit user choice is persisted;
/// startup and OS changes leave the store untouched so "no stored preference"
/// keeps meaning "follow the system".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    Startup,
    System,
}

pub struct ThemeEngine {
    current: Theme,
    store: Box<dyn PreferenceStore>,
    surface: Box<dyn ThemeSurface>,
    toggle: Option<Box<dyn ThemeToggleView>>,
    observers: Vec<Box<dyn ThemeObserver>>,
}

impl ThemeEngine {
    pub fn new(
        store: Box<dyn PreferenceStore>,
        surface: Box<dyn ThemeSurface>,
        toggle: Option<Box<dyn ThemeToggleView>>,
    ) -> Self {
        Self {
            current: Theme::Dark,
            store,
            surface,
            toggle,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn ThemeObserver>) {
        self.observers.push(observer);
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// The explicitly chosen theme, if the user ever made a choice.
    pub fn stored_preference(&self) -> Option<Theme> {
        let raw = self.store.get(THEME_KEY)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("Ignoring stored preference: {}", e);
                None
            }
        }
    }

    /// Resolve the startup theme from the stored preference or the OS hint
    /// and render it. Called once, before any other theme operation.
    pub fn initialize(&mut self, system_prefers_dark: bool) -> Theme {
        let theme = self
            .stored_preference()
            .unwrap_or_else(|| Theme::from_dark_flag(system_prefers_dark));
        self.render(theme, Origin::Startup);
        theme
    }

    /// Apply `theme` as an explicit user choice.
    pub fn apply(&mut self, theme: Theme) {
        self.render(theme, Origin::User);
    }

    pub fn toggle(&mut self, notifier: &mut Notifier<'_>) -> Theme {
        let next = self.current.opposite();
        self.apply(next);
        notifier.theme = next;
        notifier.info_for(format!("Switched to {} mode", next), TOGGLE_NOTICE_DURATION);
        next
    }

    /// Follow an OS color scheme change unless the user has chosen a theme.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.stored_preference().is_some() {
            return None;
        }
        let theme = Theme::from_dark_flag(prefers_dark);
        self.render(theme, Origin::System);
        Some(theme)
    }

    fn render(&mut self, theme: Theme, origin: Origin) {
        for (name, value) in theme.variables() {
            self.surface.set_variable(name, value);
        }
        self.surface.set_theme_class(theme);

        if let Some(toggle) = self.toggle.as_mut() {
            let appearance = theme.toggle_appearance();
            toggle.set_appearance(appearance.icon, appearance.label);
        }

        if origin == Origin::User
            && let Err(e) = self.store.set(THEME_KEY, theme.as_str())
        {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }

        self.current = theme;
        tracing::debug!(theme = %theme, ?origin, "Theme applied");

        for observer in self.observers.iter_mut() {
            observer.theme_changed(theme);
        }
    }
}
