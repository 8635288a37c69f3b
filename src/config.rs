//! Application-wide constants and compile-time configuration.
//!
//! UART line settings, tick timing, and the chat session protocol all
//! live here so they can be tuned in one place.

// UART

/// Baud rate shared by the terminal link and the peer link.
///
/// Both links run 8 data bits, 1 stop bit, no parity.
pub const UART_BAUD: u32 = 115_200;

/// Depth of the receive queue behind each UART adapter (bytes).
///
/// Bytes arriving while the queue is full are dropped.
pub const UART_RX_QUEUE_DEPTH: usize = 64;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Logical names only; the concrete `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Adjust for a custom board.
//
//   Terminal UART (UARTE0) TX → P0.06   (J-Link VCOM)
//   Terminal UART (UARTE0) RX → P0.08   (J-Link VCOM)
//   Peer UART (UARTE1)     TX → P1.02   → other board's RX
//   Peer UART (UARTE1)     RX → P1.01   ← other board's TX
//   Mode button            → P0.11   (Button 1, active-low, pull-up)

// Tick / debounce

/// Delay before the first debounce tick after start-up (ms).
pub const FIRST_TICK_MS: u64 = 50;

/// Period every tick re-arms itself with (ms).
///
/// This is the debounce window: the button is sampled once per period
/// and a single sample is trusted.
pub const TICK_PERIOD_MS: u64 = 30;

// Chat session protocol

/// Terminator sent by the peer (and accepted from the terminal).
pub const HASH_TERMINATOR: u8 = b'#';

/// Carriage return, the terminal's Enter key.
pub const CR_TERMINATOR: u8 = 0x0D;

/// Maximum outbound message size.
///
/// A message whose length reaches this value is dropped whole; only
/// messages of 1..`MAX_MESSAGE_LEN - 1` bytes are ever sent.
pub const MAX_MESSAGE_LEN: usize = 200;

/// Returns `true` for a byte that ends a receive session.
pub const fn is_terminator(byte: u8) -> bool {
    byte == HASH_TERMINATOR || byte == CR_TERMINATOR
}
