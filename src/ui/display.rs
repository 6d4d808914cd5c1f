//! `embedded-graphics` backed [`Surface`].

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use super::{text_size, Surface, TextStyle};

/// Wraps a draw target (the panel driver, or a framebuffer) as a [`Surface`].
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn inner(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    type Error = D::Error;

    fn size(&self) -> Size {
        self.target.size()
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.target.fill_solid(&area, color)
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: TextStyle) -> Result<(), Self::Error> {
        let scale = style.size.max(1);
        if let Some(bg) = style.background {
            let cell = Rectangle::new(origin, text_size(text, scale));
            self.target.fill_solid(&cell, bg)?;
        }

        let mut scaled = Scaled {
            target: &mut self.target,
            origin,
            scale,
        };
        let font = MonoTextStyle::new(&FONT_6X10, style.color);
        Text::with_baseline(text, Point::zero(), font, Baseline::Top).draw(&mut scaled)?;
        Ok(())
    }
}

/// Draw target that blows every pixel up into a `scale`×`scale` block,
/// offset by `origin`. Lets the fixed-size mono font render at any size.
struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<D> OriginDimensions for Scaled<'_, D>
where
    D: OriginDimensions,
{
    fn size(&self) -> Size {
        self.target.size() / self.scale
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new_equal(self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + point * self.scale as i32;
            self.target.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}
