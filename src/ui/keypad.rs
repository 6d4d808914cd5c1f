//! Fixed on-screen keypad: three columns by five rows of round buttons.
//!
//! ```text
//!   1    2    3
//!   4    5    6
//!   7    8    9
//!   *    0    #
//!  end  call dele
//! ```
//!
//! The grid is centered horizontally and anchored to the bottom edge, so
//! it sits in the same place relative to the bottom on any panel height.
//! Row-major order above is the layout order used by the hit test.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};

use crate::config::{
    BUTTON_MARGIN_BOTTOM, BUTTON_RADIUS, BUTTON_SPACING_X, BUTTON_SPACING_Y, CALL_FILL,
    DELETE_FILL, DIGIT_FILL, DIGIT_LABEL, DIGIT_LABEL_SIZE, END_FILL, WORD_LABEL, WORD_LABEL_SIZE,
};
use crate::ui::{text_size, Surface, TextStyle};

pub const COLUMNS: usize = 3;
pub const ROWS: usize = 5;
pub const BUTTON_COUNT: usize = COLUMNS * ROWS;

/// What pressing a button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonKind {
    /// `0`-`9`: appended to the dial buffer.
    Digit(char),
    /// `*` or `#`: appended to the dial buffer.
    Symbol(char),
    End,
    Call,
    Delete,
}

impl ButtonKind {
    /// Character this button contributes to the dialed number, if any.
    pub fn dial_char(self) -> Option<char> {
        match self {
            ButtonKind::Digit(c) | ButtonKind::Symbol(c) => Some(c),
            _ => None,
        }
    }
}

/// One immutable on-screen button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub kind: ButtonKind,
    pub label_size: u32,
    pub label_color: Rgb565,
    pub fill_color: Rgb565,
    /// Center of the disk in display coordinates.
    pub center: Point,
}

impl Button {
    /// Radius shared by every button.
    pub const RADIUS: u32 = BUTTON_RADIUS;

    /// True if `point` lies strictly inside the button's bounding square.
    /// Points on an edge do not count.
    pub fn contains(&self, point: Point) -> bool {
        let r = Self::RADIUS as i32;
        point.x > self.center.x - r
            && point.x < self.center.x + r
            && point.y > self.center.y - r
            && point.y < self.center.y + r
    }

    /// Top-left corner of the label so that it is centered on the disk.
    pub fn label_origin(&self) -> Point {
        let extent: Size = text_size(self.label, self.label_size);
        Point::new(
            self.center.x - extent.width as i32 / 2,
            self.center.y - extent.height as i32 / 2,
        )
    }

    /// Render with the normal colors.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.paint(surface, self.fill_color, self.label_color)
    }

    /// Render with fill and label colors swapped (press feedback).
    pub fn draw_inverted<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.paint(surface, self.label_color, self.fill_color)
    }

    fn paint<S: Surface>(&self, surface: &mut S, fill: Rgb565, text: Rgb565) -> Result<(), S::Error> {
        surface.fill_circle(self.center, Self::RADIUS, fill)?;
        let style = TextStyle::new(self.label_size, text).with_background(fill);
        surface.draw_text(self.label, self.label_origin(), style)
    }
}

/// Label and kind of every button in layout order.
const LAYOUT: [(&str, ButtonKind); BUTTON_COUNT] = [
    ("1", ButtonKind::Digit('1')),
    ("2", ButtonKind::Digit('2')),
    ("3", ButtonKind::Digit('3')),
    ("4", ButtonKind::Digit('4')),
    ("5", ButtonKind::Digit('5')),
    ("6", ButtonKind::Digit('6')),
    ("7", ButtonKind::Digit('7')),
    ("8", ButtonKind::Digit('8')),
    ("9", ButtonKind::Digit('9')),
    ("*", ButtonKind::Symbol('*')),
    ("0", ButtonKind::Digit('0')),
    ("#", ButtonKind::Symbol('#')),
    ("end", ButtonKind::End),
    ("call", ButtonKind::Call),
    ("dele", ButtonKind::Delete),
];

/// The full set of buttons, built once at startup.
#[derive(Clone, Debug)]
pub struct Keypad {
    buttons: [Button; BUTTON_COUNT],
}

impl Keypad {
    /// Lay the keypad out for a display of the given size.
    pub fn new(display: Size) -> Self {
        let center_x = display.width as i32 / 2;
        let bottom_y = display.height as i32 - (BUTTON_MARGIN_BOTTOM + BUTTON_RADIUS) as i32;

        let buttons = core::array::from_fn(|i| {
            let (label, kind) = LAYOUT[i];
            let col = (i % COLUMNS) as i32;
            let row = (i / COLUMNS) as i32;
            let rows_below = (ROWS as i32 - 1) - row;

            let (label_size, label_color, fill_color) = match kind {
                ButtonKind::Digit(_) | ButtonKind::Symbol(_) => {
                    (DIGIT_LABEL_SIZE, DIGIT_LABEL, DIGIT_FILL)
                }
                ButtonKind::End => (WORD_LABEL_SIZE, WORD_LABEL, END_FILL),
                ButtonKind::Call => (WORD_LABEL_SIZE, WORD_LABEL, CALL_FILL),
                ButtonKind::Delete => (WORD_LABEL_SIZE, WORD_LABEL, DELETE_FILL),
            };

            Button {
                label,
                kind,
                label_size,
                label_color,
                fill_color,
                center: Point::new(
                    center_x + (col - 1) * BUTTON_SPACING_X as i32,
                    bottom_y - rows_below * BUTTON_SPACING_Y as i32,
                ),
            }
        });

        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button; BUTTON_COUNT] {
        &self.buttons
    }

    pub fn get(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }

    /// First button of the given kind, in layout order.
    pub fn find(&self, kind: ButtonKind) -> Option<&Button> {
        self.buttons.iter().find(|b| b.kind == kind)
    }

    /// Render every button.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for button in &self.buttons {
            button.draw(surface)?;
        }
        Ok(())
    }
}
