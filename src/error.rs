//! Unified error type for uart-chat.
//!
//! Fixed-size variants only, no `alloc`.  None of these escape the
//! transfer engine or the control loop: each is absorbed where it
//! arises (no-op or silent drop).

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The button GPIO could not be sampled.
    PinRead,

    /// Outbound message reached capacity.
    BufferOverflow,

    /// UARTE reported a transfer error.
    Uart,
}
