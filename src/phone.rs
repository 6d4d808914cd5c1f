//! Top-level controller: owns the hardware and all mutable UI state.
//!
//! [`Phone::poll`] is one iteration of the main loop: sample the touch
//! sensor, resolve a button, flash it and act on it.  A call blocks the
//! loop until the modem has been told to hang up.

use embedded_graphics::primitives::Rectangle;
use embedded_graphics::prelude::Point;
use embedded_hal::delay::DelayNs;

use crate::config::BACKGROUND;
use crate::error::Error;
use crate::modem::call::{CallConfig, CallController};
use crate::modem::SerialLink;
use crate::touch::{Calibration, TouchSensor};
use crate::ui::dial::DialBuffer;
use crate::ui::hit_test;
use crate::ui::keypad::{ButtonKind, Keypad};
use crate::ui::Surface;

/// What a poll did, for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Character added to the dial line.
    Appended(char),
    /// Dial line full, press dropped.
    BufferFull(char),
    /// Last character removed.
    Removed(char),
    /// Delete pressed on an empty line.
    NothingToRemove,
    /// "end" pressed.
    CallEnded,
    /// "call" pressed and the dial/hold/hang-up sequence finished.
    CallCompleted,
    /// "call" pressed but the dial source had no number.
    NoNumber,
}

/// The phone UI and everything it drives.
pub struct Phone<S, T, M, C, D> {
    surface: S,
    touch: T,
    modem: M,
    console: C,
    delay: D,
    keypad: Keypad,
    dial: DialBuffer,
    calibration: Calibration,
    call: CallController,
}

impl<S, T, M, C, D> Phone<S, T, M, C, D>
where
    S: Surface,
    T: TouchSensor,
    M: SerialLink,
    C: SerialLink,
    D: DelayNs,
{
    /// Build with default calibration and call settings.
    pub fn new(surface: S, touch: T, modem: M, console: C, delay: D) -> Self {
        Self::with_config(
            surface,
            touch,
            modem,
            console,
            delay,
            Calibration::default(),
            CallConfig::default(),
        )
    }

    pub fn with_config(
        surface: S,
        touch: T,
        modem: M,
        console: C,
        delay: D,
        calibration: Calibration,
        call: CallConfig,
    ) -> Self {
        let keypad = Keypad::new(surface.size());
        Self {
            surface,
            touch,
            modem,
            console,
            delay,
            keypad,
            dial: DialBuffer::new(),
            calibration,
            call: CallController::new(call),
        }
    }

    /// Clear the screen and draw the keypad.
    pub fn start(&mut self) -> Result<(), Error> {
        let screen = Rectangle::new(Point::zero(), self.surface.size());
        self.surface
            .fill_rect(screen, BACKGROUND)
            .map_err(|_| Error::Display)?;
        self.keypad.draw(&mut self.surface).map_err(|_| Error::Display)
    }

    /// One main-loop iteration.
    ///
    /// Returns `Ok(None)` when the sample was not a press or missed every
    /// button.
    pub fn poll(&mut self) -> Result<Option<Event>, Error> {
        let sample = self.touch.sample().map_err(|_| Error::Touch)?;
        let Some(index) = hit_test::hit(&self.keypad, &sample, &self.calibration, self.surface.size())
        else {
            return Ok(None);
        };
        let button = self.keypad.buttons()[index];

        hit_test::flash(&button, &mut self.surface, &mut self.delay).map_err(|_| Error::Display)?;
        self.press(button.kind).map(Some)
    }

    /// Act on a resolved button.
    fn press(&mut self, kind: ButtonKind) -> Result<Event, Error> {
        let event = match kind {
            ButtonKind::Digit(ch) | ButtonKind::Symbol(ch) => {
                let added = self
                    .dial
                    .push(ch, &mut self.surface)
                    .map_err(|_| Error::Display)?;
                if added {
                    Event::Appended(ch)
                } else {
                    Event::BufferFull(ch)
                }
            }
            ButtonKind::Delete => match self.dial.pop(&mut self.surface).map_err(|_| Error::Display)? {
                Some(ch) => Event::Removed(ch),
                None => Event::NothingToRemove,
            },
            ButtonKind::End => {
                self.call.end(&mut self.surface)?;
                Event::CallEnded
            }
            ButtonKind::Call => match self.call.destination(self.dial.as_str()) {
                Some(number) => {
                    self.call.call(
                        number,
                        &mut self.surface,
                        &mut self.modem,
                        &mut self.console,
                        &mut self.delay,
                    )?;
                    Event::CallCompleted
                }
                None => Event::NoNumber,
            },
        };
        Ok(event)
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn dial(&self) -> &DialBuffer {
        &self.dial
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn touch_mut(&mut self) -> &mut T {
        &mut self.touch
    }

    pub fn modem(&self) -> &M {
        &self.modem
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Give the hardware back, dropping the UI state.
    pub fn into_parts(self) -> (S, T, M, C, D) {
        (self.surface, self.touch, self.modem, self.console, self.delay)
    }
}
