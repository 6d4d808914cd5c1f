//! Dialed-number line at the top of the screen.
//!
//! Characters are drawn left to right from [`DIAL_TEXT_X`], one glyph
//! cell apart. The line does not wrap: once [`DIAL_CAPACITY`] characters
//! are shown further presses are dropped.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::config::{
    BACKGROUND, DIAL_CAPACITY, DIAL_TEXT_COLOR, DIAL_TEXT_SIZE, DIAL_TEXT_X, DIAL_TEXT_Y,
};
use crate::ui::{glyph_size, Surface, TextStyle};

/// Bytes needed for [`DIAL_CAPACITY`] characters of any width.
const DIAL_BYTES: usize = DIAL_CAPACITY * 4;

/// The number being dialed, mirrored on screen.
///
/// `text` is the only record of what was dialed; the cursor and glyph
/// positions follow from its character count.
#[derive(Clone, Debug)]
pub struct DialBuffer {
    text: String<DIAL_BYTES>,
    cursor: Point,
}

impl Default for DialBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DialBuffer {
    /// Empty buffer with the cursor at the text origin.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: Self::ORIGIN,
        }
    }

    pub const ORIGIN: Point = Point::new(DIAL_TEXT_X, DIAL_TEXT_Y);

    /// Horizontal advance per character.
    pub const fn advance() -> i32 {
        glyph_size(DIAL_TEXT_SIZE).width as i32
    }

    /// Number of characters dialed.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= DIAL_CAPACITY
    }

    /// The dialed characters as a string.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Where the next glyph will be drawn.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Append `ch` and draw it. Returns `Ok(false)` without drawing if the
    /// line is already full.
    pub fn push<S: Surface>(&mut self, ch: char, surface: &mut S) -> Result<bool, S::Error> {
        if self.is_full() || self.text.push(ch).is_err() {
            return Ok(false);
        }

        let mut utf8 = [0u8; 4];
        let glyph = ch.encode_utf8(&mut utf8);
        let style = TextStyle::new(DIAL_TEXT_SIZE, DIAL_TEXT_COLOR).with_background(BACKGROUND);
        if let Err(e) = surface.draw_text(glyph, self.cursor, style) {
            self.text.pop();
            return Err(e);
        }

        self.cursor.x += Self::advance();
        Ok(true)
    }

    /// Remove the last character and erase its glyph. Returns `Ok(None)`
    /// if the buffer was already empty.
    pub fn pop<S: Surface>(&mut self, surface: &mut S) -> Result<Option<char>, S::Error> {
        let Some(last) = self.text.chars().next_back() else {
            return Ok(None);
        };

        let x = self.cursor.x - Self::advance();
        let cell = Rectangle::new(Point::new(x, DIAL_TEXT_Y), glyph_size(DIAL_TEXT_SIZE));
        surface.fill_rect(cell, BACKGROUND)?;

        self.text.pop();
        self.cursor.x = x;
        Ok(Some(last))
    }
}
