//! Shared control cell between the tick task and the control loop.
//!
//! Two fields cross contexts: the selected mode and the ready flag.
//! Ownership of each write is fixed:
//!
//! | Field | Written by                               |
//! |-------|------------------------------------------|
//! | mode  | tick only ([`ControlCell::publish`])     |
//! | ready | tick (raise on press), control loop      |
//! |       | (clear on dispatch), engine (raise when  |
//! |       | a session ends)                          |
//!
//! The mode is stored before the flag is raised with `Release`, and
//! the flag is consumed with `Acquire` before the mode is read, so a
//! dispatcher that sees the flag always sees the matching mode.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::mode::Mode;

pub struct ControlCell {
    mode: AtomicU8,
    ready: AtomicBool,
}

impl ControlCell {
    /// Idle, ready: the first control-loop pass runs `Idle` once.
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(Mode::Idle as u8),
            ready: AtomicBool::new(true),
        }
    }

    /// Tick side: a press selected `mode`, make it runnable.
    pub fn publish(&self, mode: Mode) {
        self.mode.store(mode.index(), Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
    }

    /// Dispatcher side: consume the ready flag and return the mode to run.
    pub fn take(&self) -> Option<Mode> {
        if self.ready.swap(false, Ordering::Acquire) {
            Some(self.mode())
        } else {
            None
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Engine side: session finished, hand control back.
    pub fn yield_control(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn mode(&self) -> Mode {
        Mode::from_index(self.mode.load(Ordering::Relaxed))
    }
}

impl Default for ControlCell {
    fn default() -> Self {
        Self::new()
    }
}
