//! Single-threaded tick scheduler
//!
//! Each session is scheduled independently: its next tick is due one
//! interval after its previous tick finished. Sessions never run
//! concurrently; a slow tick simply delays whatever is due next.

use std::thread;
use std::time::{Duration, Instant};

use super::cancel::CancellationToken;
use super::event::{SyncEvent, TickOutcome, WatchExit};
use super::session::SyncSession;

/// Upper bound on how long the scheduler sleeps before rechecking the token.
pub const POLL_SLICE: Duration = Duration::from_millis(50);

struct Scheduled {
    session: SyncSession,
    next_due: Instant,
}

pub struct Scheduler {
    slots: Vec<Scheduled>,
    interval: Duration,
}

impl Scheduler {
    /// All sessions are due immediately.
    pub fn new(sessions: Vec<SyncSession>, interval: Duration) -> Self {
        let now = Instant::now();
        let slots = sessions
            .into_iter()
            .map(|session| Scheduled {
                session,
                next_due: now,
            })
            .collect();
        Self { slots, interval }
    }

    pub fn sessions(&self) -> impl Iterator<Item = &SyncSession> {
        self.slots.iter().map(|slot| &slot.session)
    }

    /// Tick every session once, in order, regardless of due time.
    ///
    /// Returns the exit reason if a manifest change ends the run.
    pub fn tick_all<F>(&mut self, sink: &mut F) -> Option<WatchExit>
    where
        F: FnMut(SyncEvent),
    {
        for index in 0..self.slots.len() {
            if let Some(exit) = self.run_slot(index, sink) {
                return Some(exit);
            }
        }
        None
    }

    /// Run until cancelled or until a manifest change.
    pub fn run<F>(&mut self, cancel: &CancellationToken, sink: &mut F) -> WatchExit
    where
        F: FnMut(SyncEvent),
    {
        loop {
            if cancel.is_cancelled() {
                return WatchExit::Cancelled;
            }

            let Some(index) = self.next_slot() else {
                return WatchExit::Cancelled;
            };

            let now = Instant::now();
            let due = self.slots[index].next_due;
            if due > now {
                thread::sleep((due - now).min(POLL_SLICE));
                continue;
            }

            if let Some(exit) = self.run_slot(index, sink) {
                return exit;
            }
        }
    }

    fn next_slot(&self) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .min_by_key(|(_, slot)| slot.next_due)
            .map(|(index, _)| index)
    }

    fn run_slot<F>(&mut self, index: usize, sink: &mut F) -> Option<WatchExit>
    where
        F: FnMut(SyncEvent),
    {
        let slot = &mut self.slots[index];
        let outcome = slot.session.tick(sink);
        slot.next_due = Instant::now() + self.interval;

        match outcome {
            TickOutcome::Completed(_) => None,
            TickOutcome::ManifestChanged(_) => Some(WatchExit::ManifestChanged {
                package: slot.session.package().name.clone(),
            }),
        }
    }
}
