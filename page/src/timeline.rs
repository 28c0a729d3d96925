//! Deterministic virtual clock for deferred tasks.
//!
//! The browser host turns each [`Action::Defer`] into a real timeout. Tests
//! (and any host without timers) feed actions through a [`Timeline`] instead:
//! deferred tasks queue up by due time and run through the controller only
//! when the clock is advanced. Tasks due at the same instant run in the order
//! they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::action::{Action, Task};
use crate::controller::PageController;

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    task: Task,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the timeline was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue every deferred task and return the immediate actions in order.
    pub fn absorb(&mut self, actions: Vec<Action>) -> Vec<Action> {
        let mut immediate = Vec::with_capacity(actions.len());
        for action in actions {
            match action {
                Action::Defer { delay, task } => {
                    self.queue.push(Reverse(Scheduled { due: self.now + delay, seq: self.seq, task }));
                    self.seq += 1;
                }
                other => immediate.push(other),
            }
        }
        immediate
    }

    /// Move the clock forward by `by`, running every task that falls due,
    /// including tasks scheduled by those tasks. Returns the immediate actions
    /// they produced.
    pub fn advance(&mut self, by: Duration, controller: &mut PageController) -> Vec<Action> {
        let until = self.now + by;
        let mut applied = Vec::new();
        loop {
            match self.queue.peek() {
                Some(Reverse(next)) if next.due <= until => {}
                _ => break,
            }
            let Some(Reverse(scheduled)) = self.queue.pop() else {
                break;
            };
            self.now = scheduled.due;
            let produced = controller.run(scheduled.task);
            applied.extend(self.absorb(produced));
        }
        self.now = until;
        applied
    }

    pub fn advance_ms(&mut self, ms: u64, controller: &mut PageController) -> Vec<Action> {
        self.advance(Duration::from_millis(ms), controller)
    }

    /// Run until nothing is queued.
    pub fn run_until_idle(&mut self, controller: &mut PageController) -> Vec<Action> {
        let mut applied = Vec::new();
        while let Some(Reverse(scheduled)) = self.queue.pop() {
            self.now = scheduled.due;
            let produced = controller.run(scheduled.task);
            applied.extend(self.absorb(produced));
        }
        applied
    }
}
