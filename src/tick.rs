//! Periodic debounce tick.
//!
//! Each tick samples the mode button once, runs the edge rule and,
//! on a press, publishes the new mode to the [`ControlCell`].  The
//! tick is a self re-arming one-shot: [`ModeTicker::on_tick`] returns
//! the delay until it must run again.

use embedded_hal::digital::InputPin;

use crate::button::{Button, ButtonState};
use crate::config::{FIRST_TICK_MS, TICK_PERIOD_MS};
use crate::control::ControlCell;
use crate::mode::{Mode, ModeMachine};

pub struct ModeTicker<'a, P> {
    button: Button<P>,
    machine: ModeMachine,
    control: &'a ControlCell,
}

impl<'a, P: InputPin> ModeTicker<'a, P> {
    pub fn new(button: Button<P>, control: &'a ControlCell) -> Self {
        Self {
            button,
            machine: ModeMachine::new(),
            control,
        }
    }

    /// Delay before the very first tick (ms).
    pub const fn first_period(&self) -> u64 {
        FIRST_TICK_MS
    }

    /// Run one tick.  Returns the period to re-arm with (ms).
    pub fn on_tick(&mut self) -> u64 {
        // An unreadable pin counts as released.
        let current = self.button.sample().unwrap_or(ButtonState::Released);

        if let Some(mode) = self.machine.on_sample(current) {
            #[cfg(feature = "defmt")]
            defmt::info!("Mode: -> {}", mode);
            self.control.publish(mode);
        }

        TICK_PERIOD_MS
    }

    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Wiring;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Pin whose level is set from the test between ticks.
    struct SharedLevel<'a>(&'a Cell<bool>);

    impl ErrorType for SharedLevel<'_> {
        type Error = Infallible;
    }

    impl InputPin for SharedLevel<'_> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.get())
        }
        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0.get())
        }
    }

    #[test]
    fn rearms_with_fixed_period() {
        let level = Cell::new(true);
        let cell = ControlCell::new();
        let mut ticker = ModeTicker::new(Button::new(SharedLevel(&level), Wiring::PullUp), &cell);
        assert_eq!(ticker.first_period(), FIRST_TICK_MS);
        assert_eq!(ticker.on_tick(), TICK_PERIOD_MS);
        assert_eq!(ticker.on_tick(), TICK_PERIOD_MS);
    }

    #[test]
    fn press_publishes_and_raises_ready() {
        let level = Cell::new(true);
        let cell = ControlCell::new();
        cell.take();
        let mut ticker = ModeTicker::new(Button::new(SharedLevel(&level), Wiring::PullUp), &cell);

        ticker.on_tick();
        assert!(!cell.is_ready());

        level.set(false);
        ticker.on_tick();
        assert_eq!(cell.take(), Some(Mode::Listen));

        // Held down: no further change, flag untouched.
        ticker.on_tick();
        assert!(!cell.is_ready());
        assert_eq!(ticker.mode(), Mode::Listen);
    }
}
