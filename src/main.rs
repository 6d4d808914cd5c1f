//! callpad firmware - nRF52840 dial pad driving a cellular modem.
//!
//! Wires the board peripherals into [`Phone`] and polls it forever:
//!
//! - ILI9341 TFT on SPIM3
//! - XPT2046 touch controller on SPIM2
//! - Modem on UARTE1, operator console on UARTE0 (both buffered)
//!
//! The dial pad itself is blocking, so the executor runs a single task and
//! the UARTs are driven by their interrupts.

#![no_std]
#![no_main]

use core::task::Poll;

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_futures::{block_on, poll_once, yield_now};
use embassy_nrf::buffered_uarte::{self, BufferedUarte};
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::uarte::{self, Baudrate};
use embassy_nrf::{bind_interrupts, peripherals, spim, timer};
use embassy_time::{Delay, Timer};
use embedded_hal::delay::DelayNs;
use {defmt_rtt as _, panic_probe as _};

use callpad::config::UART_BAUD;
use callpad::modem::IoLink;
use callpad::touch::xpt2046::Xpt2046;
use callpad::ui::display::GraphicsSurface;
use callpad::ui::ili9341::Ili9341;
use callpad::Phone;

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<peripherals::SPI2>;
    UARTE0_UART0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
    UARTE1 => buffered_uarte::InterruptHandler<peripherals::UARTE1>;
});

/// Blocking `embedded-io` view of a buffered UARTE.
///
/// Writes wait for the TX ring to drain; reads are only issued once
/// `read_ready` has seen bytes in the RX ring.
struct Port<'d, U: uarte::Instance, T: timer::Instance> {
    uart: BufferedUarte<'d, U, T>,
}

#[derive(Debug, defmt::Format)]
struct PortError;

impl embedded_io::Error for PortError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

impl<U: uarte::Instance, T: timer::Instance> embedded_io::ErrorType for Port<'_, U, T> {
    type Error = PortError;
}

impl<U: uarte::Instance, T: timer::Instance> embedded_io::Read for Port<'_, U, T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, PortError> {
        block_on(self.uart.read(buf)).map_err(|_| PortError)
    }
}

impl<U: uarte::Instance, T: timer::Instance> embedded_io::ReadReady for Port<'_, U, T> {
    fn read_ready(&mut self) -> Result<bool, PortError> {
        match poll_once(self.uart.fill_buf()) {
            Poll::Ready(Ok(bytes)) => Ok(!bytes.is_empty()),
            Poll::Ready(Err(_)) => Err(PortError),
            Poll::Pending => Ok(false),
        }
    }
}

impl<U: uarte::Instance, T: timer::Instance> embedded_io::Write for Port<'_, U, T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, PortError> {
        block_on(self.uart.write(buf)).map_err(|_| PortError)
    }

    fn flush(&mut self) -> Result<(), PortError> {
        block_on(self.uart.flush()).map_err(|_| PortError)
    }
}

fn uart_config() -> uarte::Config {
    let mut config = uarte::Config::default();
    config.baudrate = match UART_BAUD {
        9_600 => Baudrate::BAUD9600,
        57_600 => Baudrate::BAUD57600,
        _ => Baudrate::BAUD115200,
    };
    config
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("callpad starting");

    let p = embassy_nrf::init(Default::default());
    let mut delay = Delay;

    // ── Display (SPIM3, write-only) ──────────────────────────────
    let mut tft_config = spim::Config::default();
    tft_config.frequency = spim::Frequency::M8;
    let tft_spi = spim::Spim::new_txonly(p.SPI3, Irqs, p.P1_15, p.P1_13, tft_config);
    let tft_cs = Output::new(p.P1_12, Level::High, OutputDrive::Standard);
    let tft_dc = Output::new(p.P1_11, Level::High, OutputDrive::Standard);
    let mut tft_rst = Output::new(p.P1_10, Level::High, OutputDrive::Standard);

    tft_rst.set_low();
    Timer::after_millis(10).await;
    tft_rst.set_high();
    delay.delay_ms(120);

    let panel = unwrap!(Ili9341::new(tft_spi, tft_dc, tft_cs, &mut delay));
    info!("display ready");

    // ── Touch (SPIM2) ────────────────────────────────────────────
    let mut touch_config = spim::Config::default();
    touch_config.frequency = spim::Frequency::M1;
    let touch_spi = spim::Spim::new(p.SPI2, Irqs, p.P0_26, p.P0_04, p.P0_27, touch_config);
    let touch_cs = Output::new(p.P0_03, Level::High, OutputDrive::Standard);
    let touch = Xpt2046::new(touch_spi, touch_cs);

    // ── Modem (UARTE1) and console (UARTE0) ──────────────────────
    let mut modem_rx = [0u8; 256];
    let mut modem_tx = [0u8; 64];
    let modem = BufferedUarte::new(
        p.UARTE1,
        p.TIMER0,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        Irqs,
        p.P1_01,
        p.P1_02,
        uart_config(),
        &mut modem_rx,
        &mut modem_tx,
    );

    let mut console_rx = [0u8; 256];
    let mut console_tx = [0u8; 256];
    let console = BufferedUarte::new(
        p.UARTE0,
        p.TIMER1,
        p.PPI_CH2,
        p.PPI_CH3,
        p.PPI_GROUP1,
        Irqs,
        p.P0_08,
        p.P0_06,
        uart_config(),
        &mut console_rx,
        &mut console_tx,
    );
    info!("uarts ready at {} baud", UART_BAUD);

    let mut phone = Phone::new(
        GraphicsSurface::new(panel),
        touch,
        IoLink::new(Port { uart: modem }),
        IoLink::new(Port { uart: console }),
        delay,
    );

    if let Err(e) = phone.start() {
        warn!("start: {}", e);
    }
    info!("keypad drawn, polling touch");

    loop {
        match phone.poll() {
            Ok(Some(event)) => info!("{}", event),
            Ok(None) => {}
            Err(e) => warn!("poll: {}", e),
        }
        yield_now().await;
    }
}
