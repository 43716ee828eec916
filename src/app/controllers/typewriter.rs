//! Typing animation for the hero subtitle.

use std::time::Duration;

use crate::app::domain::messages::Message;
use crate::app::infrastructure::scheduler::{Scheduler, TimerHandle};
use crate::app::view::SubtitleView;

pub const TYPE_SPEED: Duration = Duration::from_millis(100);
pub const WORD_PAUSE: Duration = Duration::from_millis(2000);
pub const NEXT_WORD_DELAY: Duration = Duration::from_millis(500);

pub struct TypeWriter {
    view: Box<dyn SubtitleView>,
    words: Vec<Vec<char>>,
    speed: Duration,
    pause: Duration,
    word_index: usize,
    char_index: usize,
    deleting: bool,
    timer: Option<TimerHandle>,
}

impl TypeWriter {
    pub fn new(view: Box<dyn SubtitleView>, words: Vec<String>) -> Self {
        Self::with_timing(view, words, TYPE_SPEED, WORD_PAUSE)
    }

    pub fn with_timing(
        view: Box<dyn SubtitleView>,
        words: Vec<String>,
        speed: Duration,
        pause: Duration,
    ) -> Self {
        Self {
            view,
            words: words
                .into_iter()
                .filter(|w| !w.is_empty())
                .map(|w| w.chars().collect())
                .collect(),
            speed,
            pause,
            word_index: 0,
            char_index: 0,
            deleting: false,
            timer: None,
        }
    }

    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        self.stop(scheduler);
        self.tick(scheduler);
    }

    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
        }
    }

    /// Render one step and schedule the next.
    pub fn tick(&mut self, scheduler: &mut dyn Scheduler) {
        let delay = self.step();
        if let Some(delay) = delay {
            self.timer = Some(scheduler.schedule(delay, Message::TypewriterTick));
        }
    }

    /// Advance by one character and return how long to wait before the next
    /// step, or `None` when there is nothing to animate.
    fn step(&mut self) -> Option<Duration> {
        let word = self.words.get(self.word_index)?;

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(word.len());
        }
        let text: String = word[..self.char_index].iter().collect();
        self.view.set_text(&text);

        let mut delay = if self.deleting { self.speed / 2 } else { self.speed };

        if !self.deleting && self.char_index == word.len() {
            delay = self.pause;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay = NEXT_WORD_DELAY;
        }

        Some(delay)
    }
}
