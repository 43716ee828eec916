//! Recording test doubles for the view seams. Each double hands out a shared
//! log so a test can keep inspecting it after the double is boxed.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::app::domain::contact::ContactSubmission;
use crate::app::domain::messages::Message;
use crate::app::domain::notification::{Notification, NotificationStyle};
use crate::app::domain::theme::Theme;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::scheduler::{ManualScheduler, Scheduler, TimerHandle};
use crate::app::infrastructure::storage::{MemoryPreferenceStore, PreferenceStore};
use crate::app::infrastructure::submission::SubmissionChannel;
use crate::app::view::*;

pub type Shared<T> = Rc<RefCell<T>>;

#[derive(Clone, Default)]
pub struct SharedStore(pub Shared<MemoryPreferenceStore>);

impl SharedStore {
    pub fn with_theme(theme: &str) -> Self {
        Self(Rc::new(RefCell::new(MemoryPreferenceStore::with("theme", theme))))
    }
}

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().set(key, value)
    }
}

#[derive(Default)]
pub struct SurfaceLog {
    pub variables: BTreeMap<String, String>,
    pub class: Option<Theme>,
}

#[derive(Clone, Default)]
pub struct RecordingSurface(pub Shared<SurfaceLog>);

impl ThemeSurface for RecordingSurface {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.0.borrow_mut().variables.insert(name.to_string(), value.to_string());
    }

    fn set_theme_class(&mut self, theme: Theme) {
        self.0.borrow_mut().class = Some(theme);
    }
}

#[derive(Clone, Default)]
pub struct RecordingToggle(pub Shared<Option<(String, String)>>);

impl ThemeToggleView for RecordingToggle {
    fn set_appearance(&mut self, icon: &str, label: &str) {
        *self.0.borrow_mut() = Some((icon.to_string(), label.to_string()));
    }
}

#[derive(Clone, Default)]
pub struct RecordingObserver(pub Shared<Vec<Theme>>);

impl ThemeObserver for RecordingObserver {
    fn theme_changed(&mut self, theme: Theme) {
        self.0.borrow_mut().push(theme);
    }
}

#[derive(Default)]
pub struct NavbarLog {
    pub scrolled: Option<bool>,
    pub style: Option<NavbarStyle>,
    pub active: Option<String>,
    pub active_updates: usize,
    pub menu_open: bool,
}

#[derive(Clone, Default)]
pub struct RecordingNavbar(pub Shared<NavbarLog>);

impl NavbarView for RecordingNavbar {
    fn set_scrolled(&mut self, scrolled: bool, style: NavbarStyle) {
        let mut log = self.0.borrow_mut();
        log.scrolled = Some(scrolled);
        log.style = Some(style);
    }

    fn set_active_link(&mut self, section: Option<&str>) {
        let mut log = self.0.borrow_mut();
        log.active = section.map(str::to_string);
        log.active_updates += 1;
    }

    fn set_menu_open(&mut self, open: bool) {
        self.0.borrow_mut().menu_open = open;
    }
}

#[derive(Default)]
pub struct PageLog {
    pub viewport: Option<Viewport>,
    pub sections: Vec<SectionGeometry>,
    pub revealed: Vec<String>,
    pub elements: Vec<ElementGeometry>,
    pub animated: Vec<(usize, Duration)>,
    pub parallax: Option<ParallaxFrame>,
    pub icon_count: usize,
    pub scrolled_to: Option<i32>,
    pub skill_tags: Vec<usize>,
    pub lifted: BTreeMap<(usize, usize), bool>,
}

#[derive(Clone, Default)]
pub struct FakePage(pub Shared<PageLog>);

impl FakePage {
    pub fn new(sections: &[(&str, i32, i32)], viewport_height: i32) -> Self {
        let page = Self::default();
        {
            let mut log = page.0.borrow_mut();
            log.sections = sections
                .iter()
                .map(|(id, top, height)| SectionGeometry {
                    id: id.to_string(),
                    top: *top,
                    height: *height,
                })
                .collect();
            log.viewport = Some(Viewport {
                scroll_y: 0,
                height: viewport_height,
            });
        }
        page
    }

    pub fn scroll(&self, y: i32) {
        if let Some(vp) = self.0.borrow_mut().viewport.as_mut() {
            vp.scroll_y = y;
        }
    }
}

impl PageView for FakePage {
    fn viewport(&self) -> Viewport {
        self.0.borrow().viewport.unwrap_or(Viewport {
            scroll_y: 0,
            height: 800,
        })
    }

    fn sections(&self) -> Vec<SectionGeometry> {
        self.0.borrow().sections.clone()
    }

    fn reveal_section(&mut self, id: &str) {
        self.0.borrow_mut().revealed.push(id.to_string());
    }

    fn animated_elements(&self) -> Vec<ElementGeometry> {
        self.0.borrow().elements.clone()
    }

    fn animate_element(&mut self, index: usize, delay: Duration) {
        self.0.borrow_mut().animated.push((index, delay));
    }

    fn apply_parallax(&mut self, frame: &ParallaxFrame) {
        self.0.borrow_mut().parallax = Some(frame.clone());
    }

    fn floating_icon_count(&self) -> usize {
        self.0.borrow().icon_count
    }

    fn scroll_to(&mut self, y: i32) {
        self.0.borrow_mut().scrolled_to = Some(y);
        self.scroll(y);
    }

    fn set_skill_tag_lifted(&mut self, category: usize, tag: usize, lifted: bool) {
        self.0.borrow_mut().lifted.insert((category, tag), lifted);
    }

    fn skill_tag_count(&self, category: usize) -> usize {
        self.0.borrow().skill_tags.get(category).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Mount(String, &'static str),
    SlideIn,
    SlideOut,
    Detach,
}

#[derive(Default)]
pub struct NotificationLog {
    pub events: Vec<NotificationEvent>,
    /// Messages currently attached to the view.
    pub attached: Vec<String>,
}

#[derive(Clone, Default)]
pub struct RecordingNotificationView(pub Shared<NotificationLog>);

impl NotificationView for RecordingNotificationView {
    fn mount(&mut self, notification: &Notification, style: &NotificationStyle) {
        let mut log = self.0.borrow_mut();
        log.events.push(NotificationEvent::Mount(
            notification.message.clone(),
            style.background,
        ));
        log.attached.push(notification.message.clone());
    }

    fn slide_in(&mut self) {
        self.0.borrow_mut().events.push(NotificationEvent::SlideIn);
    }

    fn slide_out(&mut self) {
        self.0.borrow_mut().events.push(NotificationEvent::SlideOut);
    }

    fn detach(&mut self) {
        let mut log = self.0.borrow_mut();
        log.events.push(NotificationEvent::Detach);
        log.attached.clear();
    }
}

#[derive(Default)]
pub struct FormLog {
    pub fields: ContactSubmission,
    pub busy: bool,
    pub busy_history: Vec<bool>,
    pub cleared: usize,
}

#[derive(Clone, Default)]
pub struct FakeForm(pub Shared<FormLog>);

impl FakeForm {
    pub fn filled(submission: ContactSubmission) -> Self {
        let form = Self::default();
        form.0.borrow_mut().fields = submission;
        form
    }
}

impl ContactFormView for FakeForm {
    fn read(&self) -> ContactSubmission {
        self.0.borrow().fields.clone()
    }

    fn clear(&mut self) {
        let mut log = self.0.borrow_mut();
        log.fields = ContactSubmission::default();
        log.cleared += 1;
    }

    fn set_busy(&mut self, busy: bool) {
        let mut log = self.0.borrow_mut();
        log.busy = busy;
        log.busy_history.push(busy);
    }
}

#[derive(Clone, Default)]
pub struct RecordingChannel(pub Shared<Vec<ContactSubmission>>);

impl SubmissionChannel for RecordingChannel {
    fn dispatch(&mut self, submission: ContactSubmission) {
        self.0.borrow_mut().push(submission);
    }
}

#[derive(Clone, Default)]
pub struct RecordingSubtitle(pub Shared<Vec<String>>);

impl SubtitleView for RecordingSubtitle {
    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingFocusRing(pub Shared<Vec<bool>>);

impl FocusRingView for RecordingFocusRing {
    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().push(visible);
    }
}

#[derive(Clone, Default)]
pub struct SharedScheduler(pub Shared<ManualScheduler>);

impl Scheduler for SharedScheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle {
        self.0.borrow_mut().schedule(delay, message)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.0.borrow_mut().cancel(handle)
    }
}
