use fltk::{
    app::{self, Sender},
    enums::{Event, EventState, Key},
    group::{Flex, Pack, Scroll},
    prelude::*,
    widget::Widget,
    window::Window,
};

use super::contact_form::{ContactFormWidgets, FltkContactForm};
use super::navbar::{
    FltkNavbar, FltkThemeToggle, NAVBAR_HEIGHT, NavbarWidgets, build_menu_panel, build_navbar,
};
use super::notification::{FltkNotificationView, NotificationWidgets, build_notification};
use super::sections::{FltkPage, FltkSubtitle, PageWidgets, build_page};
use super::theme::{FltkSurface, IconBrightnessObserver, Role, ScrollbarObserver, ThemedWidgets};
use crate::app::domain::config::PortfolioConfig;
use crate::app::domain::messages::{KeyCode, KeyInput, Message};
use crate::app::state::Views;
use crate::app::view::{ContactFormView, FocusRingView, ThemeObserver};

pub const WINDOW_WIDTH: i32 = 1100;
pub const WINDOW_HEIGHT: i32 = 760;

/// How often the page's scroll offset is sampled.
const SCROLL_POLL_SECS: f64 = 0.016;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub navbar: NavbarWidgets,
    pub menu_panel: Pack,
    pub page: PageWidgets,
    pub notification: NotificationWidgets,
    pub themed: ThemedWidgets,
}

pub fn build_main_window(config: &PortfolioConfig, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    wind.set_label(&format!("{} | {}", config.owner, config.subtitle));
    wind.set_xclass("Folio");
    let themed = ThemedWidgets::default();
    themed.add(Role::Page, &wind);

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(fltk::group::FlexType::Column);

    let navbar = build_navbar(config, sender, &themed);
    flex.fixed(&navbar.bar, NAVBAR_HEIGHT);

    let page = build_page(config, sender, WINDOW_WIDTH, &themed);

    flex.end();
    wind.resizable(&flex);

    // Overlays go after the flex so they draw on top of the page
    let menu_panel = build_menu_panel(config, sender, WINDOW_WIDTH, &themed);
    let notification = build_notification(WINDOW_WIDTH, sender);

    wind.end();

    MainWidgets {
        wind,
        flex,
        navbar,
        menu_panel,
        page,
        notification,
        themed,
    }
}

impl MainWidgets {
    /// Wrap the widgets in the view seams the controllers render into.
    pub fn views(&self) -> Views {
        #[cfg_attr(not(target_os = "windows"), allow(unused_mut))]
        let mut observers: Vec<Box<dyn ThemeObserver>> = vec![
            Box::new(ScrollbarObserver::new(self.page.scroll.clone())),
            Box::new(IconBrightnessObserver::new(self.page.icons.clone())),
        ];
        #[cfg(target_os = "windows")]
        observers.push(Box::new(super::theme::TitlebarObserver::new(self.wind.clone())));

        let form: Box<dyn ContactFormView> = match self.page.form.clone() {
            Some(widgets) => Box::new(FltkContactForm::new(widgets)),
            None => Box::new(NoForm),
        };

        Views {
            surface: Box::new(FltkSurface::new(self.themed.clone())),
            toggle: Some(Box::new(FltkThemeToggle::new(
                self.navbar.theme_toggle.clone(),
            ))),
            observers,
            navbar: Box::new(FltkNavbar::new(&self.navbar, self.menu_panel.clone())),
            page: Box::new(FltkPage::new(&self.page)),
            notification: Box::new(FltkNotificationView::new(self.notification.clone())),
            form,
            subtitle: Box::new(FltkSubtitle::new(self.page.subtitle.clone())),
            focus_ring: Box::new(FltkFocusRing),
        }
    }

    /// Forward window level input to the channel.
    pub fn install_event_handlers(&mut self, sender: &Sender<Message>) {
        let text_inputs = self
            .page
            .form
            .as_ref()
            .map(ContactFormWidgets::text_inputs)
            .unwrap_or_default();

        self.wind.handle({
            let s = *sender;
            move |_, event| {
                match event {
                    Event::KeyDown => s.send(Message::KeyPressed(key_input(&text_inputs))),
                    Event::Push => s.send(Message::PointerPressed),
                    Event::Show => s.send(Message::WindowVisible(true)),
                    Event::Hide => s.send(Message::WindowVisible(false)),
                    _ => {}
                }
                // Observe only; default handling still runs
                false
            }
        });

        self.wind.resize_callback({
            let s = *sender;
            move |_, _, _, _, _| s.send(Message::Resized)
        });

        self.wind.set_callback({
            let s = *sender;
            move |_| {
                if app::event() == Event::Close {
                    s.send(Message::Quit);
                }
            }
        });
    }
}

/// Post `Message::Scrolled` whenever the page's scroll offset moves.
pub fn watch_scroll(scroll: &Scroll, sender: &Sender<Message>) {
    let scroll = scroll.clone();
    let s = *sender;
    let mut last = scroll.yposition();
    app::add_timeout3(SCROLL_POLL_SECS, move |handle| {
        let now = scroll.yposition();
        if now != last {
            last = now;
            s.send(Message::Scrolled);
        }
        app::repeat_timeout3(SCROLL_POLL_SECS, handle);
    });
}

fn key_input(text_inputs: &[Widget]) -> KeyInput {
    let state = app::event_state();
    let key = if app::event_key() == Key::Tab {
        KeyCode::Tab
    } else {
        app::event_text()
            .chars()
            .next()
            .filter(|c| !c.is_control())
            .map_or(KeyCode::Other, KeyCode::Char)
    };
    let in_text_input = app::focus().is_some_and(|focused| {
        text_inputs
            .iter()
            .any(|w| w.as_widget_ptr() == focused.as_widget_ptr())
    });

    KeyInput {
        key,
        ctrl: state.contains(EventState::Ctrl),
        meta: state.contains(EventState::Meta),
        alt: state.contains(EventState::Alt),
        in_text_input,
    }
}

/// Focus outline on keyboard navigation only.
pub struct FltkFocusRing;

impl FocusRingView for FltkFocusRing {
    fn set_visible(&mut self, visible: bool) {
        app::set_visible_focus(visible);
        app::redraw();
    }
}

/// Stand-in for portfolios without a contact section.
struct NoForm;

impl ContactFormView for NoForm {
    fn read(&self) -> crate::app::domain::contact::ContactSubmission {
        Default::default()
    }

    fn clear(&mut self) {}

    fn set_busy(&mut self, _busy: bool) {}
}
