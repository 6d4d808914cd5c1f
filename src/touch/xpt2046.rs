//! XPT2046 resistive touch controller over SPI.
//!
//! Each conversion is a 3-byte transfer: the control byte, then two bytes
//! carrying the 12-bit result left-aligned (`result = word >> 3`).
//! Pressure is estimated as `z1 + 4095 - z2`, which grows with contact
//! force and stays near zero with the pen up.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::{TouchSample, TouchSensor};

/// Control bytes: start bit, channel, 12-bit differential mode, power-down
/// between conversions.
mod cmd {
    pub const READ_X: u8 = 0xD0;
    pub const READ_Y: u8 = 0x90;
    pub const READ_Z1: u8 = 0xB0;
    pub const READ_Z2: u8 = 0xC0;
}

const FULL_SCALE: u16 = 4095;

/// Touch driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Xpt2046Error {
    Spi,
    Pin,
}

/// XPT2046 on its own SPI bus with a manually driven chip select.
pub struct Xpt2046<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> Xpt2046<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn read_channel(&mut self, command: u8) -> Result<u16, Xpt2046Error> {
        let mut frame = [command, 0, 0];
        self.cs.set_low().map_err(|_| Xpt2046Error::Pin)?;
        let transfer = self
            .spi
            .transfer_in_place(&mut frame)
            .and_then(|_| self.spi.flush());
        // Release CS even if the transfer failed.
        self.cs.set_high().map_err(|_| Xpt2046Error::Pin)?;
        transfer.map_err(|_| Xpt2046Error::Spi)?;

        Ok((u16::from_be_bytes([frame[1], frame[2]]) >> 3) & FULL_SCALE)
    }
}

impl<SPI, CS> TouchSensor for Xpt2046<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = Xpt2046Error;

    fn sample(&mut self) -> Result<TouchSample, Self::Error> {
        let z1 = self.read_channel(cmd::READ_Z1)?;
        let z2 = self.read_channel(cmd::READ_Z2)?;
        let x = self.read_channel(cmd::READ_X)?;
        let y = self.read_channel(cmd::READ_Y)?;

        let pressure = (z1 + FULL_SCALE).saturating_sub(z2);
        Ok(TouchSample { x, y, pressure })
    }
}
