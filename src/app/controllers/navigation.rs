use crate::app::view::{NavbarView, PageView};

/// Height of the fixed navbar; scroll targets land just below it.
pub const NAVBAR_OFFSET: i32 = 80;

/// Mobile menu state and in-page navigation.
#[derive(Debug, Default)]
pub struct Navigation {
    menu_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self, navbar: &mut dyn NavbarView) {
        self.menu_open = !self.menu_open;
        navbar.set_menu_open(self.menu_open);
    }

    /// Close the menu and scroll so `section` sits under the navbar.
    /// Returns the target offset, or `None` for an unknown section.
    pub fn go_to(
        &mut self,
        section: &str,
        navbar: &mut dyn NavbarView,
        page: &mut dyn PageView,
    ) -> Option<i32> {
        if self.menu_open {
            self.menu_open = false;
            navbar.set_menu_open(false);
        }
        let target = page.sections().into_iter().find(|s| s.id == section)?;
        let y = (target.top - NAVBAR_OFFSET).max(0);
        page.scroll_to(y);
        Some(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{FakePage, RecordingNavbar};

    #[test]
    fn test_toggle_menu() {
        let mut nav = Navigation::new();
        let mut navbar = RecordingNavbar::default();
        nav.toggle_menu(&mut navbar);
        assert!(nav.is_menu_open());
        assert!(navbar.0.borrow().menu_open);
        nav.toggle_menu(&mut navbar);
        assert!(!navbar.0.borrow().menu_open);
    }

    #[test]
    fn test_go_to_offsets_and_closes_menu() {
        let mut nav = Navigation::new();
        let mut navbar = RecordingNavbar::default();
        let mut page = FakePage::new(&[("home", 0, 600), ("about", 600, 400)], 800);

        nav.toggle_menu(&mut navbar);
        assert_eq!(nav.go_to("about", &mut navbar, &mut page), Some(520));
        assert_eq!(page.0.borrow().scrolled_to, Some(520));
        assert!(!nav.is_menu_open());
        assert!(!navbar.0.borrow().menu_open);
    }

    #[test]
    fn test_go_to_clamps_at_top() {
        let mut nav = Navigation::new();
        let mut navbar = RecordingNavbar::default();
        let mut page = FakePage::new(&[("home", 20, 600)], 800);
        assert_eq!(nav.go_to("home", &mut navbar, &mut page), Some(0));
    }

    #[test]
    fn test_unknown_section() {
        let mut nav = Navigation::new();
        let mut navbar = RecordingNavbar::default();
        let mut page = FakePage::new(&[("home", 0, 600)], 800);
        assert_eq!(nav.go_to("blog", &mut navbar, &mut page), None);
        assert_eq!(page.0.borrow().scrolled_to, None);
    }
}
