//! Outbound message being composed in Transceive mode.
//!
//! Overflow policy is all-or-nothing: a message that reaches capacity
//! is dropped whole, never truncated.

use heapless::Vec;

use crate::error::Error;

/// Bounded compose buffer, created fresh for each Transceive session.
pub struct PendingMessage<const N: usize> {
    bytes: Vec<u8, N>,
    overflowed: bool,
}

impl<const N: usize> PendingMessage<N> {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            overflowed: false,
        }
    }

    /// Append one byte.  Once the buffer is full every further push
    /// fails and the message is marked as lost.
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        if self.overflowed || self.bytes.push(byte).is_err() {
            self.overflowed = true;
            return Err(Error::BufferOverflow);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// The bytes to transmit, or `None` if the message is empty or has
    /// reached capacity.
    pub fn sendable(&self) -> Option<&[u8]> {
        let len = self.bytes.len();
        if self.overflowed || len == 0 || len >= N {
            None
        } else {
            Some(self.bytes.as_slice())
        }
    }
}

impl<const N: usize> Default for PendingMessage<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_not_sent() {
        let msg: PendingMessage<8> = PendingMessage::new();
        assert!(msg.is_empty());
        assert_eq!(msg.sendable(), None);
    }

    #[test]
    fn short_message_is_sent_verbatim() {
        let mut msg: PendingMessage<8> = PendingMessage::new();
        for &b in b"hello" {
            msg.push(b).unwrap();
        }
        assert_eq!(msg.sendable(), Some(&b"hello"[..]));
    }

    #[test]
    fn message_at_capacity_is_dropped() {
        let mut msg: PendingMessage<4> = PendingMessage::new();
        for &b in b"abcd" {
            msg.push(b).unwrap();
        }
        assert_eq!(msg.len(), 4);
        assert!(!msg.overflowed());
        assert_eq!(msg.sendable(), None);
    }

    #[test]
    fn overflow_latches() {
        let mut msg: PendingMessage<2> = PendingMessage::new();
        msg.push(b'a').unwrap();
        msg.push(b'b').unwrap();
        assert_eq!(msg.push(b'c'), Err(Error::BufferOverflow));
        assert_eq!(msg.push(b'd'), Err(Error::BufferOverflow));
        assert!(msg.overflowed());
        assert_eq!(msg.sendable(), None);
    }
}
