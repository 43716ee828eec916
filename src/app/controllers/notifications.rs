//! Queue-of-one notification center.
//!
//! A notification goes through `mount → slide in → (auto dismiss | close) →
//! slide out → detach`. Every timed step is a cancellable scheduler entry, so
//! replacing a notification cancels the old one's timers instead of letting
//! them fire against whatever is showing by then.

use std::time::Duration;

use crate::app::domain::messages::{Message, NotificationId, NotificationTimer};
use crate::app::domain::notification::{
    FADE_OUT_DELAY, Notification, NotificationKind, NotificationStyle, SLIDE_IN_DELAY,
};
use crate::app::domain::theme::Theme;
use crate::app::infrastructure::scheduler::{Scheduler, TimerHandle};
use crate::app::view::NotificationView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

struct Active {
    id: NotificationId,
    notification: Notification,
    phase: Phase,
    timers: Vec<TimerHandle>,
}

pub struct NotificationCenter {
    view: Box<dyn NotificationView>,
    active: Option<Active>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(view: Box<dyn NotificationView>) -> Self {
        Self {
            view,
            active: None,
            next_id: 0,
        }
    }

    /// Show `notification`, replacing any notification currently up.
    pub fn show(
        &mut self,
        notification: Notification,
        theme: Theme,
        scheduler: &mut dyn Scheduler,
    ) -> NotificationId {
        self.remove_now(scheduler);

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let style = NotificationStyle::resolve(notification.kind, theme);
        self.view.mount(&notification, &style);

        let timers = vec![
            scheduler.schedule(
                SLIDE_IN_DELAY,
                Message::NotificationTimer(NotificationTimer::SlideIn(id)),
            ),
            scheduler.schedule(
                notification.duration,
                Message::NotificationTimer(NotificationTimer::AutoDismiss(id)),
            ),
        ];

        self.active = Some(Active {
            id,
            notification,
            phase: Phase::Entering,
            timers,
        });
        id
    }

    /// Manual close: start the two-phase removal right away.
    pub fn close(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(id) = self.active.as_ref().map(|a| a.id) {
            self.dismiss(id, scheduler);
        }
    }

    pub fn handle_timer(&mut self, timer: NotificationTimer, scheduler: &mut dyn Scheduler) {
        match timer {
            NotificationTimer::SlideIn(id) => {
                if let Some(active) = self.active_mut(id)
                    && active.phase == Phase::Entering
                {
                    active.phase = Phase::Shown;
                    self.view.slide_in();
                }
            }
            NotificationTimer::AutoDismiss(id) => self.dismiss(id, scheduler),
            NotificationTimer::Detach(id) => {
                if self.active_mut(id).is_some_and(|a| a.phase == Phase::Leaving) {
                    self.active = None;
                    self.view.detach();
                }
            }
        }
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.active.as_ref().map(|a| &a.notification)
    }

    pub fn phase(&self) -> Option<Phase> {
        self.active.as_ref().map(|a| a.phase)
    }

    fn dismiss(&mut self, id: NotificationId, scheduler: &mut dyn Scheduler) {
        let Some(active) = self.active.as_mut().filter(|a| a.id == id) else {
            return;
        };
        if active.phase == Phase::Leaving {
            return;
        }
        for timer in active.timers.drain(..) {
            scheduler.cancel(timer);
        }
        active.phase = Phase::Leaving;
        active.timers.push(scheduler.schedule(
            FADE_OUT_DELAY,
            Message::NotificationTimer(NotificationTimer::Detach(id)),
        ));
        self.view.slide_out();
    }

    /// Detach the current notification without animating it out.
    fn remove_now(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(active) = self.active.take() {
            for timer in active.timers {
                scheduler.cancel(timer);
            }
            self.view.detach();
        }
    }

    fn active_mut(&mut self, id: NotificationId) -> Option<&mut Active> {
        self.active.as_mut().filter(|a| a.id == id)
    }
}

/// Borrow bundle for controllers that report back through notifications.
pub struct Notifier<'a> {
    pub center: &'a mut NotificationCenter,
    pub scheduler: &'a mut dyn Scheduler,
    pub theme: Theme,
}

impl Notifier<'_> {
    pub fn notify(&mut self, notification: Notification) -> NotificationId {
        self.center.show(notification, self.theme, self.scheduler)
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Notification::success(message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Notification::error(message))
    }

    pub fn info_for(&mut self, message: impl Into<String>, duration: Duration) -> NotificationId {
        self.notify(Notification::new(message, NotificationKind::Info, duration))
    }
}
