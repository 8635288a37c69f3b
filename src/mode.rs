//! Operating modes and the button-driven mode state machine.
//!
//! ```text
//!        press          press              press
//!  Idle ───────▶ Listen ───────▶ Transceive ───────▶ Idle …
//! ```
//!
//! Only a rising edge (Released → Pressed between two consecutive
//! samples) advances the mode.  Holding the button or releasing it
//! does nothing.

use crate::button::ButtonState;

/// Number of modes in the cycle.
pub const MODE_COUNT: u8 = 3;

/// What the transfer engine does while this mode is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Peer link torn down, nothing moves.
    #[default]
    Idle = 0,
    /// Receive-only: peer → terminal.
    Listen = 1,
    /// Compose on the terminal, send to the peer, show peer traffic.
    Transceive = 2,
}

impl Mode {
    /// The mode a press moves to.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Build a mode from any index, wrapping modulo [`MODE_COUNT`].
    pub const fn from_index(index: u8) -> Self {
        match index % MODE_COUNT {
            0 => Mode::Idle,
            1 => Mode::Listen,
            _ => Mode::Transceive,
        }
    }
}

/// Edge-triggered mode selector, fed one button sample per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeMachine {
    last: ButtonState,
    mode: Mode,
}

impl ModeMachine {
    pub const fn new() -> Self {
        Self {
            last: ButtonState::Released,
            mode: Mode::Idle,
        }
    }

    /// Apply one sample.  Returns the new mode on a press edge.
    pub fn on_sample(&mut self, current: ButtonState) -> Option<Mode> {
        let edge = current == ButtonState::Pressed && self.last == ButtonState::Released;
        self.last = current;

        if edge {
            self.mode = self.mode.next();
            Some(self.mode)
        } else {
            None
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_state(&self) -> ButtonState {
        self.last
    }
}
