//! ILI9341 240×320 TFT over 4-wire SPI, as an `embedded-graphics` draw target.
//!
//! Write-only: MISO is not used.  Pixels are sent as big-endian RGB565
//! after opening a column/page window with CASET/PASET and RAMWR.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const PASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const PIXFMT: u8 = 0x3A;
}

/// MADCTL: portrait, column address mirrored, BGR panel.
const MADCTL_PORTRAIT_BGR: u8 = 0x48;
/// COLMOD: 16 bits per pixel.
const PIXFMT_16BIT: u8 = 0x55;

/// Pixels pushed per SPI write when filling.
const FILL_CHUNK_PIXELS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ili9341Error {
    Spi,
    Pin,
}

pub struct Ili9341<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> Ili9341<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Reset and configure the panel for portrait RGB565.
    pub fn new<D: DelayNs>(spi: SPI, dc: DC, cs: CS, delay: &mut D) -> Result<Self, Ili9341Error> {
        let mut panel = Self { spi, dc, cs };
        panel.command(cmd::SWRESET, &[])?;
        delay.delay_ms(120);
        panel.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(120);
        panel.command(cmd::PIXFMT, &[PIXFMT_16BIT])?;
        panel.command(cmd::MADCTL, &[MADCTL_PORTRAIT_BGR])?;
        panel.command(cmd::DISPON, &[])?;
        Ok(panel)
    }

    pub fn release(self) -> (SPI, DC, CS) {
        (self.spi, self.dc, self.cs)
    }

    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), Ili9341Error> {
        self.cs.set_low().map_err(|_| Ili9341Error::Pin)?;
        let result = self.send(command, params);
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;
        result
    }

    fn send(&mut self, command: u8, params: &[u8]) -> Result<(), Ili9341Error> {
        self.dc.set_low().map_err(|_| Ili9341Error::Pin)?;
        self.spi.write(&[command]).map_err(|_| Ili9341Error::Spi)?;
        self.dc.set_high().map_err(|_| Ili9341Error::Pin)?;
        if !params.is_empty() {
            self.spi.write(params).map_err(|_| Ili9341Error::Spi)?;
        }
        self.spi.flush().map_err(|_| Ili9341Error::Spi)
    }

    /// Open a RAM write window over `area` (already clipped to the panel)
    /// and fill it with `color`.
    fn fill_window(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Ili9341Error> {
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let x0 = area.top_left.x as u16;
        let y0 = area.top_left.y as u16;
        let x1 = bottom_right.x as u16;
        let y1 = bottom_right.y as u16;

        self.cs.set_low().map_err(|_| Ili9341Error::Pin)?;
        let result = self.stream(x0, y0, x1, y1, color, area.size.width as usize * area.size.height as usize);
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;
        result
    }

    fn stream(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Rgb565,
        count: usize,
    ) -> Result<(), Ili9341Error> {
        let [xa, xb] = x0.to_be_bytes();
        let [xc, xd] = x1.to_be_bytes();
        self.send(cmd::CASET, &[xa, xb, xc, xd])?;
        let [ya, yb] = y0.to_be_bytes();
        let [yc, yd] = y1.to_be_bytes();
        self.send(cmd::PASET, &[ya, yb, yc, yd])?;
        self.send(cmd::RAMWR, &[])?;

        let raw = RawU16::from(color).into_inner().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&raw);
        }

        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK_PIXELS);
            self.spi.write(&chunk[..n * 2]).map_err(|_| Ili9341Error::Spi)?;
            remaining -= n;
        }
        self.spi.flush().map_err(|_| Ili9341Error::Spi)
    }
}

impl<SPI, DC, CS> OriginDimensions for Ili9341<SPI, DC, CS> {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl<SPI, DC, CS> DrawTarget for Ili9341<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    type Color = Rgb565;
    type Error = Ili9341Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.fill_window(&Rectangle::new(point, Size::new(1, 1)), color)?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        self.fill_window(&clipped, color)
    }
}
