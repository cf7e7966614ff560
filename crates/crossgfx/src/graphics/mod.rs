//! The drawing-surface contract.
//!
//! [`Graphics`] is the set of primitives a back end implements; everything
//! drawing code needs beyond it lives in [`GraphicsExt`] as provided methods
//! layered on the same primitives.
//!
//! The contract is immediate-mode and stateful: [`Graphics::set_color`] and
//! [`Graphics::set_font`] replace the current state used by every following
//! call, the way most native 2D APIs expose it. A drawing session is
//! single-threaded and ordered; `&mut self` on every operation enforces that.

mod ext;

pub use ext::GraphicsExt;

use std::path::Path;
use std::sync::Arc;

use crate::coords::Polygon;
use crate::paint::Color;
use crate::tag::Tag;
use crate::text::{Font, FontMetrics};

/// Back-end agnostic 2D drawing surface.
///
/// # Degenerate input
///
/// Implementations must treat these as silent no-ops, never as errors:
/// - rectangles and ovals with `width <= 0` or `height <= 0` (see [`is_drawable_size`])
/// - polygons with fewer than three points
///
/// # Line batches
///
/// [`begin_lines`](Self::begin_lines) / [`end_lines`](Self::end_lines) bracket
/// a run of [`draw_line`](Self::draw_line) calls so a back end can set up line
/// state once. Brackets are paired and never nested. `draw_line` outside a
/// bracket must still work; it may draw each segment on its own.
pub trait Graphics {
    /// Decoded bitmap handle produced by [`image_from_file`](Self::image_from_file).
    type Image;

    /// Hints that the following calls draw the logical object `entity`.
    ///
    /// Back ends may use it to batch or cache per-entity resources, or ignore it.
    fn begin_entity(&mut self, entity: &Tag);

    fn set_font(&mut self, font: &Font);

    fn set_color(&mut self, color: &Color);

    fn fill_polygon(&mut self, polygon: &Polygon);

    fn draw_polygon(&mut self, polygon: &Polygon, w: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, w: f32);

    fn fill_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32);

    fn draw_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, w: f32);

    /// Ellipse inscribed in the given rectangle.
    fn fill_oval(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn draw_oval(&mut self, x: f32, y: f32, width: f32, height: f32, w: f32);

    fn begin_lines(&mut self);

    fn draw_line(&mut self, sx: f32, sy: f32, ex: f32, ey: f32, w: f32);

    fn end_lines(&mut self);

    /// Draws `image` scaled to fill the destination rectangle.
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32, width: f32, height: f32);

    /// Draws `text` with the current font and color; `(x, y)` is the top-left
    /// of the text bounds.
    fn draw_string(&mut self, text: &str, x: f32, y: f32);

    /// Metrics for the most recently set font.
    ///
    /// Back ends that cannot resolve the font should return zero metrics
    /// ([`NullMetrics`](crate::text::NullMetrics)) rather than fail.
    fn font_metrics(&mut self) -> Arc<dyn FontMetrics>;

    /// Loads and decodes an image file.
    ///
    /// A missing or undecodable file yields `None`. Callers draw only when an
    /// image is present; see [`GraphicsExt::draw_image_opt`].
    fn image_from_file(&mut self, path: &Path) -> Option<Self::Image>;
}

/// `true` when a `width` x `height` primitive produces visible output.
///
/// NaN sizes are not drawable.
#[inline]
pub fn is_drawable_size(width: f32, height: f32) -> bool {
    width > 0.0 && height > 0.0
}
