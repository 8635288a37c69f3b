//! Transfer engine - the three mode behaviours.
//!
//! | Mode       | Terminal link              | Peer link                   |
//! |------------|----------------------------|-----------------------------|
//! | Idle       | -                          | disabled                    |
//! | Listen     | shows peer bytes           | enabled, read only          |
//! | Transceive | composes, shows both sides | read live, sent on flush    |
//!
//! A session loop polls its stream(s) and yields to the executor when
//! nothing is waiting.  It ends on a terminator byte (`#` or CR, never
//! forwarded) or when the ready flag is raised by a button press.

use embassy_futures::yield_now;

use crate::config::{is_terminator, MAX_MESSAGE_LEN};
use crate::control::ControlCell;
use crate::message::PendingMessage;
use crate::mode::Mode;
use crate::transport::{ByteStream, PeerLink};

/// Printed once per session before the first byte from the peer.
pub const RECEIVED_LABEL: &str = "Message Received : ";

/// Printed before the local echo of a flushed message.
pub const SENT_LABEL: &str = "Message Sent : ";

/// Line ending used on the terminal.
pub const NEWLINE: &str = "\n\r";

pub struct TransferEngine<'a, T, P> {
    terminal: T,
    peer: P,
    control: &'a ControlCell,
}

impl<'a, T: ByteStream, P: PeerLink> TransferEngine<'a, T, P> {
    pub fn new(terminal: T, peer: P, control: &'a ControlCell) -> Self {
        Self {
            terminal,
            peer,
            control,
        }
    }

    /// Run the behaviour for `mode` to completion.
    ///
    /// The ready flag must already have been consumed by the caller
    /// (see [`ControlCell::take`]).
    pub async fn run(&mut self, mode: Mode) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Session: {} start", mode);

        match mode {
            Mode::Idle => self.off(),
            Mode::Listen => self.listen().await,
            Mode::Transceive => self.transceive().await,
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Session: {} end", mode);
    }

    /// Idle: tear the peer link down and stay not-ready until the next
    /// press.
    pub fn off(&mut self) {
        self.peer.disable();
    }

    /// Listen: peer → terminal until a terminator or a press.
    pub async fn listen(&mut self) {
        self.peer.enable();
        let mut labelled = false;

        while !self.control.is_ready() {
            match self.peer.try_read() {
                Some(byte) if is_terminator(byte) => break,
                Some(byte) => self.show_received(byte, &mut labelled),
                None => yield_now().await,
            }
        }

        self.terminal.print(NEWLINE);
        self.control.yield_control();
    }

    /// Transceive: compose from the terminal while showing peer traffic,
    /// then flush the composed message to both links.
    ///
    /// Terminal input queued before entry is discarded.  The terminal
    /// has priority; the peer is only polled when the terminal had
    /// nothing this pass.
    pub async fn transceive(&mut self) {
        // Keystrokes from Idle/Listen are not part of this message.
        self.terminal.discard_pending();

        let mut message: PendingMessage<MAX_MESSAGE_LEN> = PendingMessage::new();
        let mut labelled = false;

        while !self.control.is_ready() {
            if let Some(byte) = self.terminal.try_read() {
                if is_terminator(byte) {
                    break;
                }
                // Overflow is latched in the message and checked at flush.
                let _ = message.push(byte);
            } else if let Some(byte) = self.peer.try_read() {
                if is_terminator(byte) {
                    break;
                }
                self.show_received(byte, &mut labelled);
            } else {
                yield_now().await;
            }
        }

        match message.sendable() {
            Some(bytes) => {
                self.terminal.print(SENT_LABEL);
                for &b in bytes {
                    self.terminal.write_byte(b);
                    self.peer.write_byte(b);
                }
            }
            None if message.overflowed() || !message.is_empty() => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Message of {} bytes dropped", message.len());
            }
            None => {}
        }

        self.control.yield_control();
        self.terminal.print(NEWLINE);
    }

    fn show_received(&mut self, byte: u8, labelled: &mut bool) {
        if !*labelled {
            self.terminal.print(RECEIVED_LABEL);
            *labelled = true;
        }
        self.terminal.write_byte(byte);
    }

    pub fn control(&self) -> &'a ControlCell {
        self.control
    }
}
