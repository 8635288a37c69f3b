//! uart-chat firmware entry point (nRF52840).
//!
//! Tasks on the thread-mode executor:
//!
//! - **main**: the control loop, runs the selected mode's session
//! - **tick**: samples the mode button every 30 ms, publishes mode changes
//! - **terminal_rx / peer_rx**: drain each UARTE into its receive queue
//!
//! Session loops yield whenever no byte is waiting, so the tick keeps
//! running during a session.

#![no_std]
#![no_main]

mod serial;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::peripherals::{TIMER0, TIMER1, UARTE0, UARTE1};
use embassy_nrf::uarte::{self, Uarte, UarteRxWithIdle};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Timer;
use uart_chat::{Button, ControlCell, ControlLoop, ModeTicker, Wiring};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    UARTE1 => uarte::InterruptHandler<peripherals::UARTE1>;
});

/// Mode + ready flag shared by the tick task and the control loop.
static CONTROL: ControlCell = ControlCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("uart-chat starting");

    // Mode button: Button 1 on the DK, active-low.
    let button = Button::new(Input::new(p.P0_11, Pull::Up), Wiring::PullUp);
    info!("Mode button wiring: {}", button.wiring());
    unwrap!(spawner.spawn(tick_task(ModeTicker::new(button, &CONTROL))));

    // Terminal: UARTE0 on the J-Link VCOM pins.
    let terminal_uart = Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, serial::line_config());
    let (terminal_tx, terminal_rx) =
        terminal_uart.split_with_idle(p.TIMER0, p.PPI_CH0, p.PPI_CH1);
    unwrap!(spawner.spawn(terminal_rx_task(terminal_rx)));

    // Peer: UARTE1, crossed over to the other board.
    let peer_uart = Uarte::new(p.UARTE1, Irqs, p.P1_01, p.P1_02, serial::line_config());
    let (peer_tx, peer_rx) = peer_uart.split_with_idle(p.TIMER1, p.PPI_CH2, p.PPI_CH3);
    unwrap!(spawner.spawn(peer_rx_task(peer_rx)));

    let terminal = serial::UartTerminal::new(terminal_tx, &serial::TERMINAL_RX);
    let peer = serial::UartPeer::new(peer_tx, &serial::PEER_RX, &serial::PEER_ENABLED);

    let mut control_loop = ControlLoop::new(terminal, peer, &CONTROL);
    info!("Control loop running");
    control_loop.run().await
}

#[embassy_executor::task]
async fn tick_task(mut ticker: ModeTicker<'static, Input<'static>>) {
    let mut period = ticker.first_period();
    loop {
        Timer::after_millis(period).await;
        period = ticker.on_tick();
    }
}

#[embassy_executor::task]
async fn terminal_rx_task(rx: UarteRxWithIdle<'static, UARTE0, TIMER0>) {
    serial::pump_rx(rx, &serial::TERMINAL_RX, None).await
}

#[embassy_executor::task]
async fn peer_rx_task(rx: UarteRxWithIdle<'static, UARTE1, TIMER1>) {
    serial::pump_rx(rx, &serial::PEER_RX, Some(&serial::PEER_ENABLED)).await
}
