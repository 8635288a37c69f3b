//! Two-board UART chat - host-testable core.
//!
//! A push-button cycles three modes; the transfer engine moves bytes
//! between the local terminal UART and the UART wired to the other
//! board:
//!
//! ```text
//! tick (30 ms) ─▶ Button ─▶ ModeMachine ─▶ ControlCell ◀─ ControlLoop ─▶ TransferEngine
//!                                          (mode, ready)                  ├─ terminal
//!                                                                          └─ peer
//! ```
//!
//! Usage: `cargo test` on the host.  The firmware in `main.rs` binds
//! these modules to the nRF52840 peripherals (`--features embedded`).

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod control;
pub mod control_loop;
pub mod engine;
pub mod error;
pub mod message;
pub mod mode;
pub mod tick;
pub mod transport;

pub use button::{Button, ButtonState, Wiring};
pub use control::ControlCell;
pub use control_loop::ControlLoop;
pub use engine::TransferEngine;
pub use error::Error;
pub use mode::{Mode, ModeMachine};
pub use tick::ModeTicker;
pub use transport::{ByteStream, PeerLink};
