//! Touch-screen dial pad for a cellular modem.
//!
//! Everything here is hardware-agnostic and builds for the host, so the
//! keypad geometry, hit testing, dial buffer and call sequence can be
//! tested without a board:
//!
//! - [`ui`]     - drawing surface, keypad layout, hit test, dial line
//! - [`touch`]  - touch samples, calibration, XPT2046 driver
//! - [`modem`]  - serial link, AT commands, console relay, call sequence
//! - [`phone`]  - the main-loop controller tying them together
//!
//! Usage: `cargo test`
//!
//! The firmware in main.rs (feature `embedded`) supplies the nRF52840
//! peripherals and runs [`Phone::poll`] forever.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod modem;
pub mod phone;
pub mod touch;
pub mod ui;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use phone::{Event, Phone};
