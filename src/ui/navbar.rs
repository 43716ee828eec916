use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::{Flex, Pack, PackType},
    prelude::*,
};

use super::theme::{Role, ThemedWidgets, parse_color};
use crate::app::domain::config::PortfolioConfig;
use crate::app::domain::messages::Message;
use crate::app::view::{NavbarStyle, NavbarView, ThemeToggleView};

pub const NAVBAR_HEIGHT: i32 = 60;
const LINK_WIDTH: i32 = 90;
const ICON_BUTTON_WIDTH: i32 = 40;
const MENU_ITEM_HEIGHT: i32 = 36;
const MENU_WIDTH: i32 = 180;

pub struct NavbarWidgets {
    pub bar: Flex,
    pub links: Vec<(String, Button)>,
    pub theme_toggle: Button,
    pub hamburger: Button,
}

/// Top bar: brand, one link per section, theme toggle and hamburger.
/// Must be built inside the window's column flex.
pub fn build_navbar(
    config: &PortfolioConfig,
    sender: &Sender<Message>,
    themed: &ThemedWidgets,
) -> NavbarWidgets {
    let s = sender;

    let mut bar = Flex::default().row();
    bar.set_frame(FrameType::FlatBox);
    bar.set_margins(16, 10, 16, 10);
    bar.set_pad(4);

    let mut brand = Frame::default().with_label(&config.owner);
    brand.set_label_font(Font::HelveticaBold);
    brand.set_label_size(20);
    brand.set_align(Align::Left | Align::Inside);
    themed.add(Role::Heading, &brand);

    let mut links = Vec::new();
    for section in &config.sections {
        let mut link = Button::default().with_label(&section.title);
        link.set_frame(FrameType::FlatBox);
        link.set_down_frame(FrameType::FlatBox);
        link.clear_visible_focus();
        link.set_callback({
            let s = *s;
            let id = section.id.clone();
            move |_| s.send(Message::NavLinkClicked(id.clone()))
        });
        bar.fixed(&link, LINK_WIDTH);
        links.push((section.id.clone(), link));
    }

    let mut theme_toggle = Button::default();
    theme_toggle.set_frame(FrameType::OFlatFrame);
    theme_toggle.set_callback({
        let s = *s;
        move |_| s.send(Message::ToggleTheme)
    });
    bar.fixed(&theme_toggle, ICON_BUTTON_WIDTH);

    let mut hamburger = Button::default().with_label("@-2menu");
    hamburger.set_frame(FrameType::FlatBox);
    hamburger.set_tooltip("Menu");
    hamburger.set_callback({
        let s = *s;
        move |_| s.send(Message::ToggleMobileMenu)
    });
    bar.fixed(&hamburger, ICON_BUTTON_WIDTH);

    bar.end();

    NavbarWidgets {
        bar,
        links,
        theme_toggle,
        hamburger,
    }
}

/// Dropdown with the section links, placed directly in the window so it
/// overlays the page. Hidden until the hamburger opens it.
pub fn build_menu_panel(
    config: &PortfolioConfig,
    sender: &Sender<Message>,
    window_width: i32,
    themed: &ThemedWidgets,
) -> Pack {
    let height = MENU_ITEM_HEIGHT * config.sections.len() as i32;
    let mut panel = Pack::new(window_width - MENU_WIDTH - 16, NAVBAR_HEIGHT, MENU_WIDTH, height, None);
    panel.set_type(PackType::Vertical);
    panel.set_frame(FrameType::FlatBox);
    themed.add(Role::Card, &panel);

    for section in &config.sections {
        let mut item = Button::default()
            .with_size(MENU_WIDTH, MENU_ITEM_HEIGHT)
            .with_label(&section.title);
        item.set_frame(FrameType::FlatBox);
        item.set_align(Align::Left | Align::Inside);
        item.set_callback({
            let s = *sender;
            let id = section.id.clone();
            move |_| s.send(Message::NavLinkClicked(id.clone()))
        });
        themed.add(Role::Card, &item);
    }

    panel.end();
    panel.hide();
    panel
}

pub struct FltkNavbar {
    bar: Flex,
    links: Vec<(String, Button)>,
    hamburger: Button,
    menu_panel: Pack,
}

impl FltkNavbar {
    pub fn new(widgets: &NavbarWidgets, menu_panel: Pack) -> Self {
        Self {
            bar: widgets.bar.clone(),
            links: widgets.links.clone(),
            hamburger: widgets.hamburger.clone(),
            menu_panel,
        }
    }
}

impl NavbarView for FltkNavbar {
    fn set_scrolled(&mut self, scrolled: bool, style: NavbarStyle) {
        if let Some(color) = parse_color(style.background) {
            self.bar.set_color(color);
            for (_, link) in self.links.iter_mut() {
                link.set_color(color);
            }
            self.hamburger.set_color(color);
        }
        self.bar
            .set_frame(if scrolled { FrameType::ShadowBox } else { FrameType::FlatBox });
        self.bar.redraw();
    }

    fn set_active_link(&mut self, section: Option<&str>) {
        for (id, link) in self.links.iter_mut() {
            if Some(id.as_str()) == section {
                link.set_label_color(Color::Selection);
                link.set_label_font(Font::HelveticaBold);
            } else {
                link.set_label_color(Color::Foreground);
                link.set_label_font(Font::Helvetica);
            }
            link.redraw();
        }
    }

    fn set_menu_open(&mut self, open: bool) {
        if open {
            self.menu_panel.show();
            self.hamburger.set_frame(FrameType::DownBox);
        } else {
            self.menu_panel.hide();
            self.hamburger.set_frame(FrameType::FlatBox);
        }
        self.hamburger.redraw();
        if let Some(mut window) = self.menu_panel.window() {
            window.redraw();
        }
    }
}

pub struct FltkThemeToggle {
    button: Button,
}

impl FltkThemeToggle {
    pub fn new(button: Button) -> Self {
        Self { button }
    }
}

impl ThemeToggleView for FltkThemeToggle {
    fn set_appearance(&mut self, icon: &str, label: &str) {
        self.button.set_label(icon);
        self.button.set_tooltip(label);
        self.button.redraw();
    }
}
