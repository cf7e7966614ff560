use crate::coords::{Rect, Vec2};

use super::Graphics;

/// Convenience overloads built purely on the [`Graphics`] primitives.
///
/// Implemented for every `Graphics`; back ends never implement it themselves.
pub trait GraphicsExt: Graphics {
    /// [`Graphics::draw_line`] taking the endpoints as points.
    #[inline]
    fn draw_line_between(&mut self, start: Vec2, end: Vec2, w: f32) {
        self.draw_line(start.x, start.y, end.x, end.y, w);
    }

    #[inline]
    fn fill_rect_in(&mut self, rect: Rect) {
        self.fill_rect(rect.x(), rect.y(), rect.width(), rect.height());
    }

    #[inline]
    fn draw_rect_in(&mut self, rect: Rect, w: f32) {
        self.draw_rect(rect.x(), rect.y(), rect.width(), rect.height(), w);
    }

    #[inline]
    fn fill_rounded_rect_in(&mut self, rect: Rect, radius: f32) {
        self.fill_rounded_rect(rect.x(), rect.y(), rect.width(), rect.height(), radius);
    }

    #[inline]
    fn fill_oval_in(&mut self, rect: Rect) {
        self.fill_oval(rect.x(), rect.y(), rect.width(), rect.height());
    }

    /// Draws `image` if there is one; `None` is a no-op.
    ///
    /// Pairs with [`Graphics::image_from_file`], which reports a missing file
    /// as `None`.
    #[inline]
    fn draw_image_opt(&mut self, image: Option<&Self::Image>, x: f32, y: f32, width: f32, height: f32) {
        if let Some(image) = image {
            self.draw_image(image, x, y, width, height);
        }
    }

    /// Runs `f` inside a `begin_lines` / `end_lines` bracket.
    fn lines<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.begin_lines();
        let out = f(self);
        self.end_lines();
        out
    }
}

impl<G: Graphics + ?Sized> GraphicsExt for G {}
