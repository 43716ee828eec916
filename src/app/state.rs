use std::io;

use super::controllers::contact::ContactController;
use super::controllers::hover::SkillHover;
use super::controllers::keyboard::{FocusMode, KeyAction, shortcut_for};
use super::controllers::navigation::Navigation;
use super::controllers::notifications::{NotificationCenter, Notifier};
use super::controllers::scroll::ScrollEffects;
use super::controllers::theme::ThemeEngine;
use super::controllers::typewriter::TypeWriter;
use super::domain::config::PortfolioConfig;
use super::domain::messages::{KeyInput, Message};
use super::domain::notification::Notification;
use super::domain::theme::Theme;
use super::infrastructure::scheduler::Scheduler;
use super::infrastructure::storage::PreferenceStore;
use super::infrastructure::submission::SubmissionChannel;
use super::view::{
    ContactFormView, FocusRingView, NavbarView, NotificationView, PageView, SubtitleView,
    ThemeObserver, ThemeSurface, ThemeToggleView,
};

/// Opens an external link, normally in the system browser.
pub type LinkOpener = fn(&str) -> io::Result<()>;

pub fn open_in_browser(url: &str) -> io::Result<()> {
    open::that(url)
}

/// Everything the page renders into, resolved once by the UI layer.
pub struct Views {
    pub surface: Box<dyn ThemeSurface>,
    pub toggle: Option<Box<dyn ThemeToggleView>>,
    pub observers: Vec<Box<dyn ThemeObserver>>,
    pub navbar: Box<dyn NavbarView>,
    pub page: Box<dyn PageView>,
    pub notification: Box<dyn NotificationView>,
    pub form: Box<dyn ContactFormView>,
    pub subtitle: Box<dyn SubtitleView>,
    pub focus_ring: Box<dyn FocusRingView>,
}

pub struct AppState {
    pub config: PortfolioConfig,
    pub theme: ThemeEngine,
    pub notifications: NotificationCenter,
    pub scroll: ScrollEffects,
    pub navigation: Navigation,
    pub contact: ContactController,
    pub typewriter: TypeWriter,
    pub hover: SkillHover,
    pub focus: FocusMode,
    page: Box<dyn PageView>,
    focus_ring: Box<dyn FocusRingView>,
    scheduler: Box<dyn Scheduler>,
    open_link: LinkOpener,
    window_visible: bool,
}

impl AppState {
    pub fn new(
        config: PortfolioConfig,
        store: Box<dyn PreferenceStore>,
        views: Views,
        submissions: Box<dyn SubmissionChannel>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        let mut theme = ThemeEngine::new(store, views.surface, views.toggle);
        for observer in views.observers {
            theme.subscribe(observer);
        }
        let typewriter = TypeWriter::new(views.subtitle, config.typing_words());

        Self {
            config,
            theme,
            notifications: NotificationCenter::new(views.notification),
            scroll: ScrollEffects::new(views.navbar),
            navigation: Navigation::new(),
            contact: ContactController::new(views.form, submissions),
            typewriter,
            hover: SkillHover::new(),
            focus: FocusMode::default(),
            page: views.page,
            focus_ring: views.focus_ring,
            scheduler,
            open_link: open_in_browser,
            window_visible: true,
        }
    }

    pub fn with_link_opener(mut self, open_link: LinkOpener) -> Self {
        self.open_link = open_link;
        self
    }

    /// Resolve the theme and bring every effect in line with the initial viewport.
    pub fn start(&mut self, system_prefers_dark: bool) -> Theme {
        let theme = self.theme.initialize(system_prefers_dark);
        // Outlines only appear once the keyboard is used for navigation
        self.focus_ring.set_visible(self.focus.is_keyboard());
        self.scroll.on_scroll(self.page.as_mut(), theme);
        self.typewriter.start(self.scheduler.as_mut());

        tracing::info!("{}'s Portfolio loaded successfully!", self.config.owner);
        tracing::info!("Current theme: {} mode", theme);
        theme
    }

    /// Dispatch one message. Returns false when the app should exit.
    pub fn handle(&mut self, message: Message) -> bool {
        match message {
            Message::ToggleTheme => self.toggle_theme(),
            Message::SystemSchemeChanged(dark) => {
                if let Some(theme) = self.theme.system_preference_changed(dark) {
                    self.scroll.restyle(theme);
                }
            }
            Message::Scrolled => self.scroll.on_scroll(self.page.as_mut(), self.theme.current()),
            Message::Resized => self.scroll.on_resize(self.page.as_mut()),
            Message::NavLinkClicked(section) => {
                if self
                    .navigation
                    .go_to(&section, self.scroll.navbar_mut(), self.page.as_mut())
                    .is_some()
                {
                    self.scroll.on_scroll(self.page.as_mut(), self.theme.current());
                }
            }
            Message::ToggleMobileMenu => self.navigation.toggle_menu(self.scroll.navbar_mut()),
            Message::CloseNotification => self.notifications.close(self.scheduler.as_mut()),
            Message::NotificationTimer(timer) => {
                self.notifications.handle_timer(timer, self.scheduler.as_mut())
            }
            Message::SubmitContact => {
                let mut notifier = Notifier {
                    center: &mut self.notifications,
                    scheduler: self.scheduler.as_mut(),
                    theme: self.theme.current(),
                };
                // Rejections are already reported to the user
                let _ = self.contact.submit(&mut notifier);
            }
            Message::SubmissionFinished(result) => {
                let mut notifier = Notifier {
                    center: &mut self.notifications,
                    scheduler: self.scheduler.as_mut(),
                    theme: self.theme.current(),
                };
                self.contact.finish(result, &mut notifier);
            }
            Message::TypewriterTick => self.typewriter.tick(self.scheduler.as_mut()),
            Message::SkillHover { category, entered } => {
                if entered {
                    self.hover.enter(category, self.page.as_ref(), self.scheduler.as_mut());
                } else {
                    self.hover.leave(category, self.page.as_mut(), self.scheduler.as_mut());
                }
            }
            Message::SkillTagLift { category, tag } => {
                self.hover.lift(category, tag, self.page.as_mut())
            }
            Message::ProjectLinkClicked(index) => self.open_project(index),
            Message::KeyPressed(input) => self.key_pressed(input),
            Message::PointerPressed => self.set_keyboard_focus(false),
            Message::WindowVisible(visible) => {
                if visible && !self.window_visible {
                    tracing::info!("Welcome back!");
                }
                self.window_visible = visible;
            }
            Message::Quit => return false,
        }
        true
    }

    fn toggle_theme(&mut self) {
        let mut notifier = Notifier {
            center: &mut self.notifications,
            scheduler: self.scheduler.as_mut(),
            theme: self.theme.current(),
        };
        let theme = self.theme.toggle(&mut notifier);
        self.scroll.restyle(theme);
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications
            .show(notification, self.theme.current(), self.scheduler.as_mut());
    }

    fn open_project(&mut self, index: usize) {
        let Some(project) = self.config.projects.get(index) else {
            tracing::warn!("No project at index {}", index);
            return;
        };
        let notification = match project.public_link() {
            None => Notification::info(format!(
                "{} repository will be available soon! \u{1f680}",
                project.name
            )),
            Some(url) => match (self.open_link)(url) {
                Ok(()) => return,
                Err(e) => {
                    tracing::warn!("Failed to open {}: {}", url, e);
                    Notification::error(format!("Could not open {}", url))
                }
            },
        };
        self.notify(notification);
    }

    fn key_pressed(&mut self, input: KeyInput) {
        match shortcut_for(&input) {
            Some(KeyAction::ToggleTheme) => self.toggle_theme(),
            Some(KeyAction::EnableFocusRing) => self.set_keyboard_focus(true),
            None => {}
        }
    }

    fn set_keyboard_focus(&mut self, keyboard: bool) {
        if self.focus.set_keyboard(keyboard) {
            self.focus_ring.set_visible(keyboard);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::contact::ContactSubmission;
    use crate::app::domain::messages::KeyCode;
    use crate::app::domain::notification::NotificationKind;
    use crate::app::infrastructure::storage::THEME_KEY;
    use crate::app::testing::*;
    use std::time::Duration;

    struct Harness {
        state: AppState,
        store: SharedStore,
        navbar: RecordingNavbar,
        page: FakePage,
        form: FakeForm,
        channel: RecordingChannel,
        subtitle: RecordingSubtitle,
        focus_ring: RecordingFocusRing,
        observer: RecordingObserver,
        sched: SharedScheduler,
    }

    impl Harness {
        fn new(store: SharedStore, form: ContactSubmission) -> Self {
            let navbar = RecordingNavbar::default();
            let page = FakePage::new(
                &[("home", 0, 700), ("about", 700, 600), ("contact", 1300, 800)],
                800,
            );
            page.0.borrow_mut().icon_count = 2;
            let form = FakeForm::filled(form);
            let channel = RecordingChannel::default();
            let subtitle = RecordingSubtitle::default();
            let focus_ring = RecordingFocusRing::default();
            let observer = RecordingObserver::default();
            let sched = SharedScheduler::default();

            let views = Views {
                surface: Box::new(RecordingSurface::default()),
                toggle: Some(Box::new(RecordingToggle::default())),
                observers: vec![Box::new(observer.clone())],
                navbar: Box::new(navbar.clone()),
                page: Box::new(page.clone()),
                notification: Box::new(RecordingNotificationView::default()),
                form: Box::new(form.clone()),
                subtitle: Box::new(subtitle.clone()),
                focus_ring: Box::new(focus_ring.clone()),
            };
            let state = AppState::new(
                PortfolioConfig::default(),
                Box::new(store.clone()),
                views,
                Box::new(channel.clone()),
                Box::new(sched.clone()),
            );
            Self {
                state,
                store,
                navbar,
                page,
                form,
                channel,
                subtitle,
                focus_ring,
                observer,
                sched,
            }
        }

        /// Advance the virtual clock in 10ms steps, dispatching whatever
        /// became due so follow-up timers get their turn.
        fn run_for(&mut self, ms: u64) {
            for _ in 0..ms / 10 {
                let due = self.sched.0.borrow_mut().advance(Duration::from_millis(10));
                for msg in due {
                    self.state.handle(msg);
                }
            }
        }

        fn notice(&self) -> Option<(NotificationKind, String)> {
            self.state
                .notifications
                .visible()
                .map(|n| (n.kind, n.message.clone()))
        }
    }

    fn valid_form() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            project_type: "Consulting".into(),
            message: "Hello".into(),
        }
    }

    fn key(c: char) -> Message {
        Message::KeyPressed(KeyInput {
            key: KeyCode::Char(c),
            ctrl: false,
            meta: false,
            alt: false,
            in_text_input: false,
        })
    }

    #[test]
    fn test_start_applies_theme_and_effects() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        assert_eq!(h.state.start(true), Theme::Dark);

        assert_eq!(h.store.0.borrow().writes(), 0);
        assert_eq!(*h.observer.0.borrow(), vec![Theme::Dark]);
        assert_eq!(h.navbar.0.borrow().scrolled, Some(false));
        assert_eq!(h.page.0.borrow().revealed, vec!["home"]);
        assert_eq!(h.subtitle.0.borrow().first().map(String::as_str), Some("S"));
        assert_eq!(*h.focus_ring.0.borrow(), vec![false]);
    }

    #[test]
    fn test_t_key_toggles_and_persists() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        h.state.start(false);
        h.state.handle(key('t'));

        assert_eq!(h.state.theme.current(), Theme::Dark);
        assert_eq!(h.store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(
            h.notice(),
            Some((NotificationKind::Info, "Switched to dark mode".into()))
        );
        assert_eq!(
            h.navbar.0.borrow().style.map(|s| s.background),
            Some("rgba(15, 15, 15, 0.95)")
        );

        // The toggle notice goes away on its own after 2s + fade-out
        h.run_for(2300);
        assert!(h.notice().is_none());
    }

    #[test]
    fn test_t_key_inside_input_ignored() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        h.state.start(false);
        h.state.handle(Message::KeyPressed(KeyInput {
            key: KeyCode::Char('t'),
            ctrl: false,
            meta: false,
            alt: false,
            in_text_input: true,
        }));
        assert_eq!(h.state.theme.current(), Theme::Light);
    }

    #[test]
    fn test_system_change_restyles_navbar() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        h.state.start(false);
        h.state.handle(Message::SystemSchemeChanged(true));
        assert_eq!(h.state.theme.current(), Theme::Dark);
        assert_eq!(
            h.navbar.0.borrow().style.map(|s| s.background),
            Some("rgba(15, 15, 15, 0.95)")
        );
    }

    #[test]
    fn test_scroll_messages_drive_effects() {
        let mut h = Harness::new(SharedStore::with_theme("light"), ContactSubmission::default());
        h.state.start(false);

        h.page.scroll(600);
        h.state.handle(Message::Scrolled);
        assert_eq!(h.navbar.0.borrow().scrolled, Some(true));
        assert_eq!(h.navbar.0.borrow().active.as_deref(), Some("about"));
        let parallax = h.page.0.borrow().parallax.clone().unwrap();
        assert_eq!(parallax.hero_offset, -300.0);
        assert_eq!(parallax.icons.len(), 2);

        h.page.scroll(0);
        h.state.handle(Message::Scrolled);
        assert_eq!(h.navbar.0.borrow().scrolled, Some(false));
    }

    #[test]
    fn test_nav_link_scrolls_under_navbar() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        h.state.start(true);
        h.state.handle(Message::ToggleMobileMenu);
        assert!(h.navbar.0.borrow().menu_open);

        h.state.handle(Message::NavLinkClicked("contact".into()));
        assert_eq!(h.page.0.borrow().scrolled_to, Some(1220));
        assert!(!h.navbar.0.borrow().menu_open);
        assert_eq!(h.navbar.0.borrow().active.as_deref(), Some("contact"));
    }

    #[test]
    fn test_contact_round_trip() {
        let mut h = Harness::new(SharedStore::default(), valid_form());
        h.state.start(true);

        h.state.handle(Message::SubmitContact);
        h.state.handle(Message::SubmitContact);
        assert_eq!(h.channel.0.borrow().len(), 1);

        h.state.handle(Message::SubmissionFinished(Ok(())));
        assert_eq!(h.form.0.borrow().fields, ContactSubmission::default());
        assert_eq!(h.notice().map(|(k, _)| k), Some(NotificationKind::Success));
    }

    #[test]
    fn test_unpublished_project_link() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        h.state.start(true);
        h.state.handle(Message::ProjectLinkClicked(0));
        assert_eq!(
            h.notice(),
            Some((
                NotificationKind::Info,
                "Lending Pool repository will be available soon! \u{1f680}".into()
            ))
        );
    }

    #[test]
    fn test_public_project_link_opens() {
        fn fail(_: &str) -> io::Result<()> {
            Err(io::Error::other("no browser"))
        }
        let h = Harness::new(SharedStore::default(), ContactSubmission::default());
        let mut state = h.state.with_link_opener(fail);
        state.start(true);
        state.handle(Message::ProjectLinkClicked(2));
        assert_eq!(
            state.notifications.visible().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }

    #[test]
    fn test_focus_ring_mode() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        h.state.start(true);
        let tab = Message::KeyPressed(KeyInput {
            key: KeyCode::Tab,
            ctrl: false,
            meta: false,
            alt: false,
            in_text_input: false,
        });
        // A click before any Tab leaves the hidden ring alone
        h.state.handle(Message::PointerPressed);
        h.state.handle(tab.clone());
        h.state.handle(tab);
        h.state.handle(Message::PointerPressed);
        assert_eq!(*h.focus_ring.0.borrow(), vec![false, true, false]);
    }

    #[test]
    fn test_close_notification() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        h.state.start(true);
        h.state.handle(Message::ProjectLinkClicked(0));
        h.state.handle(Message::CloseNotification);
        h.run_for(300);
        assert!(h.notice().is_none());
    }

    #[test]
    fn test_quit() {
        let mut h = Harness::new(SharedStore::default(), ContactSubmission::default());
        assert!(h.state.handle(Message::WindowVisible(false)));
        assert!(h.state.handle(Message::WindowVisible(true)));
        assert!(!h.state.handle(Message::Quit));
    }
}
