//! UARTE adapters for the transfer engine.
//!
//! Each UARTE is split.  A receive task drains the RX half with
//! idle-line detection into a bounded channel; the adapter's
//! `try_read` pops that channel and `write_byte` is a blocking TX.
//!
//! The peer adapter has an enable gate: while disabled, received
//! bytes are discarded and nothing is transmitted.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::warn;
use embassy_nrf::timer::Instance as TimerInstance;
use embassy_nrf::uarte::{self, Baudrate, Instance, Parity, UarteRxWithIdle, UarteTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use uart_chat::config::{UART_BAUD, UART_RX_QUEUE_DEPTH};
use uart_chat::{ByteStream, Error, PeerLink};

/// Largest chunk one idle-terminated DMA read delivers.
const RX_CHUNK: usize = 32;

pub type RxQueue = Channel<CriticalSectionRawMutex, u8, UART_RX_QUEUE_DEPTH>;

pub static TERMINAL_RX: RxQueue = Channel::new();
pub static PEER_RX: RxQueue = Channel::new();

/// Peer link gate, shared by the peer adapter and its receive task.
pub static PEER_ENABLED: AtomicBool = AtomicBool::new(false);

/// 8N1 at [`UART_BAUD`].
pub fn line_config() -> uarte::Config {
    let mut config = uarte::Config::default();
    config.parity = Parity::EXCLUDED;
    config.baudrate = match UART_BAUD {
        9_600 => Baudrate::BAUD9600,
        19_200 => Baudrate::BAUD19200,
        38_400 => Baudrate::BAUD38400,
        57_600 => Baudrate::BAUD57600,
        230_400 => Baudrate::BAUD230400,
        _ => Baudrate::BAUD115200,
    };
    config
}

/// Move received bytes into `queue`, forever.
///
/// With a `gate`, bytes are only queued while the gate is open.
pub async fn pump_rx<T: Instance, U: TimerInstance>(
    mut rx: UarteRxWithIdle<'static, T, U>,
    queue: &'static RxQueue,
    gate: Option<&'static AtomicBool>,
) -> ! {
    let mut buf = [0u8; RX_CHUNK];

    loop {
        let n = match rx.read_until_idle(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("{}: rx {}", Error::Uart, e);
                continue;
            }
        };

        if gate.is_some_and(|g| !g.load(Ordering::Acquire)) {
            continue;
        }

        let dropped = buf[..n].iter().filter(|&&b| queue.try_send(b).is_err()).count();
        if dropped > 0 {
            warn!("RX queue full, {} bytes dropped", dropped);
        }
    }
}

fn blocking_put<T: Instance>(tx: &mut UarteTx<'static, T>, byte: u8) {
    if let Err(e) = tx.blocking_write(&[byte]) {
        warn!("{}: tx {}", Error::Uart, e);
    }
}

/// Local terminal (J-Link VCOM).
pub struct UartTerminal<T: Instance> {
    tx: UarteTx<'static, T>,
    rx: &'static RxQueue,
}

impl<T: Instance> UartTerminal<T> {
    pub fn new(tx: UarteTx<'static, T>, rx: &'static RxQueue) -> Self {
        Self { tx, rx }
    }
}

impl<T: Instance> ByteStream for UartTerminal<T> {
    fn try_read(&mut self) -> Option<u8> {
        self.rx.try_receive().ok()
    }

    fn write_byte(&mut self, byte: u8) {
        blocking_put(&mut self.tx, byte);
    }
}

/// Link to the other board.
pub struct UartPeer<T: Instance> {
    tx: UarteTx<'static, T>,
    rx: &'static RxQueue,
    enabled: &'static AtomicBool,
}

impl<T: Instance> UartPeer<T> {
    pub fn new(tx: UarteTx<'static, T>, rx: &'static RxQueue, enabled: &'static AtomicBool) -> Self {
        Self { tx, rx, enabled }
    }
}

impl<T: Instance> ByteStream for UartPeer<T> {
    fn try_read(&mut self) -> Option<u8> {
        self.rx.try_receive().ok()
    }

    fn write_byte(&mut self, byte: u8) {
        if self.enabled.load(Ordering::Acquire) {
            blocking_put(&mut self.tx, byte);
        }
    }
}

impl<T: Instance> PeerLink for UartPeer<T> {
    fn enable(&mut self) {
        self.enabled.store(true, Ordering::Release);
    }

    fn disable(&mut self) {
        self.enabled.store(false, Ordering::Release);
        // Anything queued before the link went down is stale.
        while self.rx.try_receive().is_ok() {}
    }
}
