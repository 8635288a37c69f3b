//! Byte-stream seams between the transfer engine and the UARTs.
//!
//! The engine never touches a peripheral directly.  On target these
//! are backed by UARTE adapters (see `main.rs`); in tests by in-memory
//! queues.

/// A polled, byte-oriented duplex link.
pub trait ByteStream {
    /// Pop one received byte if any is waiting.  Never blocks.
    fn try_read(&mut self) -> Option<u8>;

    /// Transmit one byte, blocking until it is accepted.
    fn write_byte(&mut self, byte: u8);

    /// Drop everything received so far.
    fn discard_pending(&mut self) {
        while self.try_read().is_some() {}
    }

    fn write_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    /// Print a text literal byte by byte.
    fn print(&mut self, text: &str) {
        self.write_all(text.as_bytes());
    }
}

/// The link to the other board, which can be switched off.
pub trait PeerLink: ByteStream {
    fn enable(&mut self);
    fn disable(&mut self);
}

impl<S: ByteStream + ?Sized> ByteStream for &mut S {
    fn try_read(&mut self) -> Option<u8> {
        (**self).try_read()
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }
}

impl<S: PeerLink + ?Sized> PeerLink for &mut S {
    fn enable(&mut self) {
        (**self).enable()
    }

    fn disable(&mut self) {
        (**self).disable()
    }
}
