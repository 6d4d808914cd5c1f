//! Application-wide constants and compile-time configuration.
//!
//! All calibration values, layout geometry, timing parameters and modem
//! protocol constants live here so they can be tuned in one place.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

// Touch

/// Raw XPT2046 reading at the left edge of the panel. The X axis is
/// mounted mirrored, so the pair is inverted (min > max).
pub const TOUCH_X_MIN: i32 = 3800;
pub const TOUCH_X_MAX: i32 = 200;

/// Raw XPT2046 reading at the top / bottom edge of the panel.
pub const TOUCH_Y_MIN: i32 = 200;
pub const TOUCH_Y_MAX: i32 = 3800;

/// Pressure window. Samples must fall strictly inside it to count as a press:
/// below rejects a lifted pen, above rejects saturated readings.
pub const TOUCH_PRESSURE_MIN: u16 = 100;
pub const TOUCH_PRESSURE_MAX: u16 = 4000;

// Display

/// Panel resolution in portrait orientation.
pub const DISPLAY_WIDTH: u32 = 240;
pub const DISPLAY_HEIGHT: u32 = 320;

/// Screen background, also used to erase glyphs and the status banner.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Base glyph cell of the font (FONT_6X10) before scaling.
pub const GLYPH_WIDTH: u32 = 6;
pub const GLYPH_HEIGHT: u32 = 10;

// Keypad layout

/// Radius of every button disk (pixels).
pub const BUTTON_RADIUS: u32 = 22;

/// Distance between neighbouring button centers.
pub const BUTTON_SPACING_X: u32 = 80;
pub const BUTTON_SPACING_Y: u32 = 50;

/// Gap between the bottom row and the bottom edge of the screen.
pub const BUTTON_MARGIN_BOTTOM: u32 = 4;

/// Text scale for digit / symbol labels and for the word labels.
pub const DIGIT_LABEL_SIZE: u32 = 2;
pub const WORD_LABEL_SIZE: u32 = 1;

pub const DIGIT_FILL: Rgb565 = Rgb565::new(8, 16, 8);
pub const DIGIT_LABEL: Rgb565 = Rgb565::WHITE;
pub const END_FILL: Rgb565 = Rgb565::RED;
pub const CALL_FILL: Rgb565 = Rgb565::GREEN;
pub const DELETE_FILL: Rgb565 = Rgb565::new(31, 40, 0);
pub const WORD_LABEL: Rgb565 = Rgb565::BLACK;

/// How long a pressed button stays inverted.
pub const FLASH_MS: u32 = 100;

// Dial number line

/// Top-left corner of the first dialed glyph.
pub const DIAL_TEXT_X: i32 = 10;
pub const DIAL_TEXT_Y: i32 = 6;

/// Text scale of the dialed number.
pub const DIAL_TEXT_SIZE: u32 = 3;
pub const DIAL_TEXT_COLOR: Rgb565 = Rgb565::WHITE;

/// Number of characters that fit on the dial line without wrapping.
pub const DIAL_CAPACITY: usize = 12;

// Status banner

/// Vertical band cleared before each status message.
pub const BANNER_Y: i32 = 40;
pub const BANNER_HEIGHT: u32 = 26;
pub const BANNER_TEXT_X: i32 = 10;
pub const BANNER_TEXT_SIZE: u32 = 2;
pub const BANNER_TEXT_COLOR: Rgb565 = Rgb565::YELLOW;

pub const BANNER_CALLING: &str = "Calling...";
pub const BANNER_ENDED: &str = "Calling ended.";

// Modem

/// Destination dialed by the call button.
pub const DIAL_NUMBER: &str = "+15555550123";

/// Appended to every command line. AT command lines end with CR; the LF
/// keeps the console relay readable.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Window during which modem and console bytes are relayed after a command.
pub const SETTLE_MS: u32 = 1000;

/// Granularity of the relay loop.
pub const RELAY_STEP_MS: u32 = 1;

/// How long the call is held before hanging up.
pub const CALL_HOLD_MS: u32 = 20_000;

/// Longest command line built by the call controller.
pub const MAX_COMMAND_LEN: usize = 40;

// UART / pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Console UARTE0  TX → P0.06   RX → P0.08  (J-Link VCOM)
//   Modem   UARTE1  TX → P1.02   RX → P1.01
//   TFT     SPIM3   SCK → P1.15  MOSI → P1.13  MISO → P1.14
//                   CS  → P1.12  DC   → P1.11  RST  → P1.10
//   Touch   SPIM2   SCK → P0.26  MOSI → P0.27  MISO → P0.04  CS → P0.03

/// Baud rate shared by the modem and the console.
pub const UART_BAUD: u32 = 115_200;
