//! Mode button input.
//!
//! The button is not filtered here: it is debounced by being sampled
//! only once per tick (see [`crate::config::TICK_PERIOD_MS`]).  This
//! module just reads the raw level and maps it through the wiring
//! polarity.

use embedded_hal::digital::InputPin;

use crate::error::Error;

/// How the switch is wired to its pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wiring {
    /// Pin pulled low; pressing drives it high.
    PullDown,
    /// Pin pulled high; pressing drives it low.
    PullUp,
}

impl Wiring {
    /// Map an electrical level to a logical button state.
    pub const fn classify(self, level_high: bool) -> ButtonState {
        match (self, level_high) {
            (Wiring::PullUp, false) | (Wiring::PullDown, true) => ButtonState::Pressed,
            (Wiring::PullUp, true) | (Wiring::PullDown, false) => ButtonState::Released,
        }
    }
}

/// Logical (polarity-corrected) button state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

/// A single physical button.
pub struct Button<P> {
    pin: P,
    wiring: Wiring,
    state: ButtonState,
}

impl<P: InputPin> Button<P> {
    /// Wrap an already-configured input pin.  Starts out `Released`.
    pub fn new(pin: P, wiring: Wiring) -> Self {
        Self {
            pin,
            wiring,
            state: ButtonState::Released,
        }
    }

    /// Sample the pin and classify it.
    ///
    /// A failed read leaves the stored state untouched and returns
    /// `None`; callers treat that as "no information this tick".
    pub fn sample(&mut self) -> Option<ButtonState> {
        let level_high = self.read_level().ok()?;
        self.state = self.wiring.classify(level_high);
        Some(self.state)
    }

    /// Last successfully sampled state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn wiring(&self) -> Wiring {
        self.wiring
    }

    fn read_level(&mut self) -> Result<bool, Error> {
        self.pin.is_high().map_err(|_| Error::PinRead)
    }
}
