//! User interface subsystem - touch display + on-screen keypad.
//!
//! ## Components
//!
//! - **Surface**: the drawing primitives the keypad logic needs from a display
//! - **Keypad**: fixed layout of the 15 on-screen buttons
//! - **Hit test**: maps a touch sample onto a button
//! - **Dial buffer**: the number line at the top of the screen
//!
//! `display` adapts any `embedded-graphics` draw target to [`Surface`];
//! `ili9341` is the panel driver used on the board.

pub mod dial;
pub mod display;
pub mod ili9341;
pub mod keypad;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// How a string is rendered by [`Surface::draw_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Integer scale applied to the base glyph cell.
    pub size: u32,
    /// Glyph color.
    pub color: Rgb565,
    /// Cell background. `None` draws glyphs only (transparent mode).
    pub background: Option<Rgb565>,
}

impl TextStyle {
    pub const fn new(size: u32, color: Rgb565) -> Self {
        Self {
            size,
            color,
            background: None,
        }
    }

    pub const fn with_background(mut self, background: Rgb565) -> Self {
        self.background = Some(background);
        self
    }
}

/// Drawing primitives consumed by the keypad logic.
///
/// Implemented by [`display::GraphicsSurface`] on hardware and by
/// recording fakes in tests.
pub trait Surface {
    type Error;

    /// Drawable area in pixels.
    fn size(&self) -> Size;

    fn width(&self) -> u32 {
        self.size().width
    }

    fn height(&self) -> u32 {
        self.size().height
    }

    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error>;

    /// Fill a disk of the given radius around `center`.
    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb565)
        -> Result<(), Self::Error>;

    /// Draw `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: TextStyle)
        -> Result<(), Self::Error>;
}

/// Pixel footprint of one glyph at the given scale.
pub const fn glyph_size(scale: u32) -> Size {
    Size::new(GLYPH_WIDTH * scale, GLYPH_HEIGHT * scale)
}

/// Pixel footprint of `text` at the given scale (single line).
pub fn text_size(text: &str, scale: u32) -> Size {
    let glyph = glyph_size(scale);
    Size::new(glyph.width * text.chars().count() as u32, glyph.height)
}
