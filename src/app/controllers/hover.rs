use std::time::Duration;

use crate::app::domain::messages::Message;
use crate::app::infrastructure::scheduler::{Scheduler, TimerHandle};
use crate::app::view::PageView;

/// Delay between lifting consecutive tags of a hovered skill category.
pub const TAG_STAGGER: Duration = Duration::from_millis(50);

/// Staggered lift of skill tags while a category is hovered.
#[derive(Default)]
pub struct SkillHover {
    pending: Vec<(usize, TimerHandle)>,
}

impl SkillHover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, category: usize, page: &dyn PageView, scheduler: &mut dyn Scheduler) {
        self.cancel_category(category, scheduler);
        for tag in 0..page.skill_tag_count(category) {
            let handle = scheduler.schedule(
                TAG_STAGGER * tag as u32,
                Message::SkillTagLift { category, tag },
            );
            self.pending.push((category, handle));
        }
    }

    pub fn leave(&mut self, category: usize, page: &mut dyn PageView, scheduler: &mut dyn Scheduler) {
        self.cancel_category(category, scheduler);
        for tag in 0..page.skill_tag_count(category) {
            page.set_skill_tag_lifted(category, tag, false);
        }
    }

    pub fn lift(&mut self, category: usize, tag: usize, page: &mut dyn PageView) {
        page.set_skill_tag_lifted(category, tag, true);
    }

    fn cancel_category(&mut self, category: usize, scheduler: &mut dyn Scheduler) {
        self.pending.retain(|(c, handle)| {
            if *c == category {
                scheduler.cancel(*handle);
                false
            } else {
                true
            }
        });
    }
}
