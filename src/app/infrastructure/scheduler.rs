//! Delayed delivery of messages with cancellation handles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use fltk::app::{self, Sender, TimeoutHandle};

use crate::app::domain::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    /// Deliver `message` after `delay`.
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle;

    /// Drop a pending delivery. Cancelling a fired or unknown timer is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Scheduler backed by FLTK timeouts that post onto the app channel.
pub struct FltkScheduler {
    sender: Sender<Message>,
    next_id: u64,
    // Only timers that have not fired yet are present.
    pending: Rc<RefCell<HashMap<u64, TimeoutHandle>>>,
}

impl FltkScheduler {
    pub fn new(sender: Sender<Message>) -> Self {
        Self {
            sender,
            next_id: 0,
            pending: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl Scheduler for FltkScheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        let s = self.sender;
        let pending = self.pending.clone();
        let handle = app::add_timeout3(delay.as_secs_f64(), move |_| {
            pending.borrow_mut().remove(&id);
            s.send(message.clone());
        });
        self.pending.borrow_mut().insert(id, handle);
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(timeout) = self.pending.borrow_mut().remove(&handle.0) {
            app::remove_timeout3(timeout);
        }
    }
}

/// Virtual-clock scheduler for tests. Time only moves on `advance`.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, u64, Message)>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return the messages that became due,
    /// ordered by due time then scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<Message> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<_> = Vec::new();
        self.pending.retain(|(at, id, msg)| {
            if *at <= now {
                due.push((*at, *id, msg.clone()));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, id, _)| (*at, *id));
        due.into_iter().map(|(_, _, m)| m).collect()
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push((self.now + delay, id, message));
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(_, id, _)| *id != handle.0);
    }
}
