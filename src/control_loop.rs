//! Top-level driver: run whatever mode is runnable, forever.

use embassy_futures::yield_now;

use crate::control::ControlCell;
use crate::engine::TransferEngine;
use crate::mode::Mode;
use crate::transport::{ByteStream, PeerLink};

pub struct ControlLoop<'a, T, P> {
    engine: TransferEngine<'a, T, P>,
}

impl<'a, T: ByteStream, P: PeerLink> ControlLoop<'a, T, P> {
    pub fn new(terminal: T, peer: P, control: &'a ControlCell) -> Self {
        Self {
            engine: TransferEngine::new(terminal, peer, control),
        }
    }

    /// One pass: if the ready flag is up, consume it and run the
    /// selected mode.  Returns the mode that ran.
    pub async fn step(&mut self) -> Option<Mode> {
        let mode = self.engine.control().take()?;
        self.engine.run(mode).await;
        Some(mode)
    }

    pub async fn run(&mut self) -> ! {
        loop {
            if self.step().await.is_none() {
                yield_now().await;
            }
        }
    }
}
