//! Call controller: the "call" and "end" buttons.
//!
//! "call" runs a fixed, blocking sequence:
//!
//! ```text
//! banner "Calling..."
//! ATD<number>;     relay SETTLE_MS
//! hold CALL_HOLD_MS
//! ATH              relay SETTLE_MS
//! ```
//!
//! Nothing else runs while it does.  "end" only changes the banner; it
//! sends no hang-up and leaves the dialed number alone.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;

use crate::config::{
    BACKGROUND, BANNER_CALLING, BANNER_ENDED, BANNER_HEIGHT, BANNER_TEXT_COLOR, BANNER_TEXT_SIZE,
    BANNER_TEXT_X, BANNER_Y, CALL_HOLD_MS, DIAL_NUMBER, SETTLE_MS,
};
use crate::error::Error;
use crate::modem::relay::relay;
use crate::modem::{dial_command, hangup_command, SerialLink};
use crate::ui::{glyph_size, Surface, TextStyle};

/// Where the number passed to `ATD` comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialSource {
    /// Always dial this number, whatever is on screen.
    Fixed(&'static str),
    /// Dial the digits entered on the keypad.
    DialBuffer,
}

/// Timing and number source for the call sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CallConfig {
    pub source: DialSource,
    pub settle_ms: u32,
    pub hold_ms: u32,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            source: DialSource::Fixed(DIAL_NUMBER),
            settle_ms: SETTLE_MS,
            hold_ms: CALL_HOLD_MS,
        }
    }
}

/// Status banner plus the modem call sequence.
#[derive(Clone, Debug, Default)]
pub struct CallController {
    config: CallConfig,
}

impl CallController {
    pub fn new(config: CallConfig) -> Self {
        Self { config }
    }

    /// Number to dial given the current on-screen digits. `None` if the
    /// configured source has nothing to dial.
    pub fn destination<'a>(&self, dialed: &'a str) -> Option<&'a str> {
        let number = match self.config.source {
            DialSource::Fixed(number) => number,
            DialSource::DialBuffer => dialed,
        };
        (!number.is_empty()).then_some(number)
    }

    /// "end": replace the banner with the ended message.
    pub fn end<S: Surface>(&self, surface: &mut S) -> Result<(), Error> {
        show_banner(surface, BANNER_ENDED)
    }

    /// "call": dial `number`, hold, hang up.
    ///
    /// The whole sequence always runs to completion. The banner is drawn
    /// first and a display failure aborts before any modem traffic; after
    /// that, modem and console failures are collected and the first one is
    /// returned at the end.
    pub fn call<S, M, C, D>(
        &self,
        number: &str,
        surface: &mut S,
        modem: &mut M,
        console: &mut C,
        delay: &mut D,
    ) -> Result<(), Error>
    where
        S: Surface,
        M: SerialLink,
        C: SerialLink,
        D: DelayNs,
    {
        let dial = dial_command(number)?;
        show_banner(surface, BANNER_CALLING)?;

        let mut first_error = modem.write_all(dial.as_bytes()).err().map(|_| Error::Modem);
        if let Err(e) = relay(console, modem, delay, self.config.settle_ms) {
            first_error.get_or_insert(e);
        }

        delay.delay_ms(self.config.hold_ms);

        if modem.write_all(hangup_command().as_bytes()).is_err() {
            first_error.get_or_insert(Error::Modem);
        }
        if let Err(e) = relay(console, modem, delay, self.config.settle_ms) {
            first_error.get_or_insert(e);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Band cleared before each status message, spanning the display width.
pub fn banner_area(width: u32) -> Rectangle {
    Rectangle::new(Point::new(0, BANNER_Y), Size::new(width, BANNER_HEIGHT))
}

fn show_banner<S: Surface>(surface: &mut S, message: &str) -> Result<(), Error> {
    let area = banner_area(surface.width());
    surface.fill_rect(area, BACKGROUND).map_err(|_| Error::Display)?;

    let text_y = BANNER_Y + (BANNER_HEIGHT as i32 - glyph_size(BANNER_TEXT_SIZE).height as i32) / 2;
    let style = TextStyle::new(BANNER_TEXT_SIZE, BANNER_TEXT_COLOR);
    surface
        .draw_text(message, Point::new(BANNER_TEXT_X, text_y), style)
        .map_err(|_| Error::Display)
}
