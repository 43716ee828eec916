//! Scroll-driven effects: navbar variant, active section, reveal,
//! entrance animations and parallax.
//!
//! Everything here is recomputed from the viewport on every scroll event.
//! The only remembered state is which section is active and which sections
//! and elements have already been revealed, since both are one-way.

use std::collections::HashSet;
use std::time::Duration;

use crate::app::domain::theme::Theme;
use crate::app::view::{
    ElementGeometry, NavbarStyle, NavbarView, PageView, ParallaxFrame, SectionGeometry, Viewport,
};

/// Scroll offset past which the navbar switches to its scrolled variant.
pub const NAVBAR_SCROLL_THRESHOLD: i32 = 100;

/// Sections count as current this many pixels before their top edge.
pub const ACTIVE_SECTION_OFFSET: i32 = 150;

/// A section is revealed once its top is this far above the viewport bottom.
pub const REVEAL_MARGIN: i32 = 150;

/// The bottom of the viewport is pulled up this far when checking elements.
pub const ANIMATE_BOTTOM_MARGIN: i32 = 50;

/// Share of an element's height that must be on screen before it animates in.
const ANIMATE_VISIBLE_RATIO: f64 = 0.1;

/// Extra entrance delay per element, by document position.
pub const ANIMATE_STAGGER: Duration = Duration::from_millis(100);

const HERO_PARALLAX_RATE: f64 = -0.5;
const ICON_PARALLAX_STEP: f64 = 0.3;
const ICON_ROTATION_RATE: f64 = 0.1;

pub fn is_navbar_scrolled(scroll_y: i32) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn navbar_style(theme: Theme, scrolled: bool) -> NavbarStyle {
    match (theme, scrolled) {
        (Theme::Dark, true) => NavbarStyle {
            background: "rgba(15, 15, 15, 0.98)",
            shadow: "0 5px 25px rgba(0, 0, 0, 0.5)",
        },
        (Theme::Dark, false) => NavbarStyle {
            background: "rgba(15, 15, 15, 0.95)",
            shadow: "0 2px 20px rgba(0, 0, 0, 0.3)",
        },
        (Theme::Light, true) => NavbarStyle {
            background: "rgba(255, 255, 255, 0.98)",
            shadow: "0 5px 25px rgba(0, 0, 0, 0.1)",
        },
        (Theme::Light, false) => NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            shadow: "0 2px 20px rgba(0, 0, 0, 0.05)",
        },
    }
}

/// The last section, in document order, whose activation band contains `scroll_y`.
pub fn active_section(scroll_y: i32, sections: &[SectionGeometry]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - ACTIVE_SECTION_OFFSET;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

pub fn should_reveal(viewport: Viewport, section: &SectionGeometry) -> bool {
    let top_in_viewport = section.top - viewport.scroll_y;
    top_in_viewport < viewport.height - REVEAL_MARGIN
}

pub fn should_animate(viewport: Viewport, element: ElementGeometry) -> bool {
    let visible_top = viewport.scroll_y;
    let visible_bottom = viewport.scroll_y + viewport.height - ANIMATE_BOTTOM_MARGIN;
    if element.height <= 0 {
        return element.top >= visible_top && element.top < visible_bottom;
    }
    let overlap = visible_bottom.min(element.top + element.height) - visible_top.max(element.top);
    overlap > 0 && f64::from(overlap) >= f64::from(element.height) * ANIMATE_VISIBLE_RATIO
}

pub fn parallax(scroll_y: i32, icon_count: usize) -> ParallaxFrame {
    let y = f64::from(scroll_y);
    ParallaxFrame {
        hero_offset: y * HERO_PARALLAX_RATE,
        icons: (0..icon_count)
            .map(|i| {
                let speed = (i + 1) as f64 * ICON_PARALLAX_STEP;
                (y * speed, y * ICON_ROTATION_RATE)
            })
            .collect(),
    }
}

pub struct ScrollEffects {
    navbar: Box<dyn NavbarView>,
    active: Option<String>,
    scrolled: bool,
    revealed: HashSet<String>,
    animated: HashSet<usize>,
}

impl ScrollEffects {
    pub fn new(navbar: Box<dyn NavbarView>) -> Self {
        Self {
            navbar,
            active: None,
            scrolled: false,
            revealed: HashSet::new(),
            animated: HashSet::new(),
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn is_animated(&self, index: usize) -> bool {
        self.animated.contains(&index)
    }

    /// Re-evaluate every effect against the page's current viewport.
    pub fn on_scroll(&mut self, page: &mut dyn PageView, theme: Theme) {
        let viewport = page.viewport();
        let sections = page.sections();

        self.update_navbar(viewport.scroll_y, theme);
        self.update_active(viewport.scroll_y, &sections);
        self.reveal(viewport, &sections, page);
        self.animate(viewport, page);

        let frame = parallax(viewport.scroll_y, page.floating_icon_count());
        page.apply_parallax(&frame);
    }

    /// Resize moves sections around but only affects what reveal/active see.
    pub fn on_resize(&mut self, page: &mut dyn PageView) {
        let viewport = page.viewport();
        let sections = page.sections();
        self.update_active(viewport.scroll_y, &sections);
        self.reveal(viewport, &sections, page);
        self.animate(viewport, page);
    }

    /// Restyle the navbar for a new theme without waiting for a scroll event.
    pub fn restyle(&mut self, theme: Theme) {
        self.navbar
            .set_scrolled(self.scrolled, navbar_style(theme, self.scrolled));
    }

    pub fn navbar_mut(&mut self) -> &mut dyn NavbarView {
        self.navbar.as_mut()
    }

    fn update_navbar(&mut self, scroll_y: i32, theme: Theme) {
        self.scrolled = is_navbar_scrolled(scroll_y);
        self.navbar
            .set_scrolled(self.scrolled, navbar_style(theme, self.scrolled));
    }

    fn update_active(&mut self, scroll_y: i32, sections: &[SectionGeometry]) {
        let current = active_section(scroll_y, sections).map(str::to_string);
        if current != self.active {
            self.navbar.set_active_link(current.as_deref());
            self.active = current;
        }
    }

    fn reveal(&mut self, viewport: Viewport, sections: &[SectionGeometry], page: &mut dyn PageView) {
        for section in sections {
            if !self.revealed.contains(&section.id) && should_reveal(viewport, section) {
                self.revealed.insert(section.id.clone());
                page.reveal_section(&section.id);
            }
        }
    }

    fn animate(&mut self, viewport: Viewport, page: &mut dyn PageView) {
        for (index, element) in page.animated_elements().into_iter().enumerate() {
            if !self.animated.contains(&index) && should_animate(viewport, element) {
                self.animated.insert(index);
                page.animate_element(index, ANIMATE_STAGGER * index as u32);
            }
        }
    }
}
