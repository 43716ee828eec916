use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::LazyLock;

use fltk::{
    app,
    enums::{Color, FrameType},
    frame::Frame,
    group::Scroll,
    prelude::*,
    widget::Widget,
};
use regex_lite::Regex;

use crate::app::domain::theme::Theme;
use crate::app::view::{ThemeObserver, ThemeSurface};

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9a-fA-F]{6})").expect("hex pattern is valid"));

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})")
        .expect("rgb pattern is valid")
});

/// Convert a style value to an FLTK color.
///
/// Accepts `#rrggbb`, `rgb(..)` / `rgba(..)` (alpha is dropped) and gradients,
/// which resolve to their first color stop.
pub fn parse_color(value: &str) -> Option<Color> {
    let hex = HEX_RE.captures(value).map(|c| (c.get(0).map_or(0, |m| m.start()), c));
    let rgb = RGB_RE.captures(value).map(|c| (c.get(0).map_or(0, |m| m.start()), c));

    // Whichever appears first wins, so a gradient picks its first stop.
    match (hex, rgb) {
        (Some((h, caps)), rgb) if rgb.as_ref().is_none_or(|(r, _)| h < *r) => {
            let bits = u32::from_str_radix(&caps[1], 16).ok()?;
            let [_, r, g, b] = bits.to_be_bytes();
            Some(Color::from_rgb(r, g, b))
        }
        (_, Some((_, caps))) => {
            let r = caps[1].parse::<u8>().ok()?;
            let g = caps[2].parse::<u8>().ok()?;
            let b = caps[3].parse::<u8>().ok()?;
            Some(Color::from_rgb(r, g, b))
        }
        _ => None,
    }
}

/// Scale a color towards black.
pub fn dim(color: Color, factor: f32) -> Color {
    let (r, g, b) = color.to_rgb();
    let scale = |c: u8| (f32::from(c) * factor.clamp(0.0, 1.0)).round() as u8;
    Color::from_rgb(scale(r), scale(g), scale(b))
}

/// What part a widget plays on the page, which decides the variables it is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Page,
    AltSection,
    Card,
    Heading,
    Body,
    Muted,
    Accent,
    Tag,
}

/// Widgets repainted on every theme change. Cloned handles share one registry.
#[derive(Clone, Default)]
pub struct ThemedWidgets(Rc<RefCell<Vec<(Role, Widget)>>>);

impl ThemedWidgets {
    pub fn add<W: WidgetExt>(&self, role: Role, widget: &W) {
        self.0.borrow_mut().push((role, widget.as_base_widget()));
    }
}

/// Colors derived from the theme variables.
#[derive(Debug, Clone, Copy)]
struct Palette {
    bg_primary: Color,
    bg_secondary: Color,
    bg_tertiary: Color,
    text_primary: Color,
    text_secondary: Color,
    text_muted: Color,
    accent: Color,
    card: Color,
    border: Color,
}

impl Palette {
    fn from_variables(vars: &HashMap<String, String>) -> Self {
        let color = |name: &str, fallback: Color| {
            vars.get(name)
                .and_then(|v| parse_color(v))
                .unwrap_or(fallback)
        };
        Self {
            bg_primary: color("--bg-primary", Color::White),
            bg_secondary: color("--bg-secondary", Color::Light2),
            bg_tertiary: color("--bg-tertiary", Color::Light1),
            text_primary: color("--text-primary", Color::Black),
            text_secondary: color("--text-secondary", Color::Dark3),
            text_muted: color("--text-muted", Color::Dark2),
            accent: color("--accent-primary", Color::Blue),
            card: color("--card-bg", Color::White),
            border: color("--border-color", Color::Light1),
        }
    }
}

/// Root style scope. Variables accumulate until the theme class is set,
/// then the whole palette is pushed to FLTK at once.
pub struct FltkSurface {
    variables: HashMap<String, String>,
    widgets: ThemedWidgets,
}

impl FltkSurface {
    pub fn new(widgets: ThemedWidgets) -> Self {
        Self {
            variables: HashMap::new(),
            widgets,
        }
    }
}

impl ThemeSurface for FltkSurface {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_theme_class(&mut self, _theme: Theme) {
        let palette = Palette::from_variables(&self.variables);

        let (r, g, b) = palette.bg_primary.to_rgb();
        app::background(r, g, b);
        let (r, g, b) = palette.bg_tertiary.to_rgb();
        app::background2(r, g, b);
        let (r, g, b) = palette.text_primary.to_rgb();
        app::foreground(r, g, b);
        let (r, g, b) = palette.accent.to_rgb();
        app::set_selection_color(r, g, b);

        for (role, widget) in self.widgets.0.borrow_mut().iter_mut() {
            match role {
                Role::Page => widget.set_color(palette.bg_primary),
                Role::AltSection => widget.set_color(palette.bg_secondary),
                Role::Card => {
                    widget.set_color(palette.card);
                    widget.set_label_color(palette.text_primary);
                }
                Role::Heading => widget.set_label_color(palette.text_primary),
                Role::Body => widget.set_label_color(palette.text_secondary),
                Role::Muted => widget.set_label_color(palette.text_muted),
                Role::Accent => {
                    widget.set_color(palette.accent);
                    widget.set_label_color(Color::White);
                }
                Role::Tag => {
                    widget.set_color(palette.bg_tertiary);
                    widget.set_label_color(palette.text_secondary);
                    widget.set_selection_color(palette.border);
                }
            }
        }
        app::redraw();
    }
}

pub struct ScrollbarObserver {
    scroll: Scroll,
}

impl ScrollbarObserver {
    pub fn new(scroll: Scroll) -> Self {
        Self { scroll }
    }
}

impl ThemeObserver for ScrollbarObserver {
    fn theme_changed(&mut self, theme: Theme) {
        let colors = theme.scrollbar_colors();
        let mut bar = self.scroll.scrollbar();
        if let Some(track) = parse_color(colors.track) {
            bar.set_color(track);
        }
        if let Some(thumb) = parse_color(colors.thumb) {
            bar.set_selection_color(thumb);
        }
        bar.set_frame(FrameType::FlatBox);
        bar.redraw();
    }
}

/// Dims the hero's floating icons in light mode.
pub struct IconBrightnessObserver {
    icons: Vec<Frame>,
}

impl IconBrightnessObserver {
    pub fn new(icons: Vec<Frame>) -> Self {
        Self { icons }
    }
}

impl ThemeObserver for IconBrightnessObserver {
    fn theme_changed(&mut self, theme: Theme) {
        let accent = theme
            .variable("--accent-primary")
            .and_then(parse_color)
            .unwrap_or(Color::Blue);
        let color = dim(accent, theme.icon_brightness());
        for icon in self.icons.iter_mut() {
            icon.set_label_color(color);
            icon.redraw_label();
        }
    }
}

#[cfg(target_os = "windows")]
pub struct TitlebarObserver {
    window: fltk::window::Window,
}

#[cfg(target_os = "windows")]
impl TitlebarObserver {
    pub fn new(window: fltk::window::Window) -> Self {
        Self { window }
    }
}

#[cfg(target_os = "windows")]
impl ThemeObserver for TitlebarObserver {
    fn theme_changed(&mut self, theme: Theme) {
        // The HWND only exists once the window is shown
        if self.window.shown() {
            set_windows_titlebar_theme(&self.window, theme.is_dark());
        }
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 on Windows 11 / Windows 10 2004+, 19 on 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
