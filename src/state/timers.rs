//! Cancellable timers for the state machines.
//!
//! The controllers never own a real timer. When they want something to
//! happen later they arm a [`TimerSlot`] and hand the returned [`Ticket`] to
//! whoever drives them; when the delay elapses the driver passes the ticket
//! back. Re-arming or cancelling a slot bumps its generation, so a callback
//! that was already queued for an older ticket is ignored.

use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct TimerSlot {
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot, superseding any ticket handed out before.
    pub fn arm(&mut self) -> Ticket {
        self.generation += 1;
        self.armed = true;
        Ticket(self.generation)
    }

    pub fn cancel(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consumes `ticket` if it is the live one. Returns false for stale tickets.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

/// Browser side of a slot: keeps at most one pending `Timeout` alive.
///
/// Dropping a `Timeout` clears it, so scheduling over an existing task or
/// dropping the owning component cancels the old callback.
#[derive(Default)]
pub struct ScheduledTask {
    handle: Option<Timeout>,
}

impl ScheduledTask {
    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.handle = Some(Timeout::new(delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        self.handle = None;
    }
}
