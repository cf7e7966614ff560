use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::coords::{Polygon, Rect, Vec2};
use crate::graphics::{Graphics, is_drawable_size};
use crate::paint::Color;
use crate::raster::RasterImage;
use crate::scene::{DrawCmd, DrawList, Style};
use crate::tag::Tag;
use crate::text::{Font, FontMetrics, FontSystem};

use super::{LinePolicy, SurfaceConfig};

/// Misuse of the line-batch protocol.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProtocolViolation {
    /// `begin_lines` while a batch was already open.
    NestedBeginLines,
    /// `end_lines` with no open batch.
    UnmatchedEndLines,
    /// The session finished with a batch still open.
    UnterminatedLines,
    /// A non-line primitive (named) was drawn inside a batch.
    ShapeInLineBatch(&'static str),
}

impl fmt::Display for ProtocolViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolViolation::NestedBeginLines => f.write_str("begin_lines called inside an open line batch"),
            ProtocolViolation::UnmatchedEndLines => f.write_str("end_lines called without begin_lines"),
            ProtocolViolation::UnterminatedLines => f.write_str("drawing finished with an open line batch"),
            ProtocolViolation::ShapeInLineBatch(kind) => write!(f, "{kind} drawn inside a line batch"),
        }
    }
}

/// [`Graphics`] implementation that records calls into a [`DrawList`].
///
/// # Session protocol
///
/// ```
/// use crossgfx::graphics::{Graphics, GraphicsExt};
/// use crossgfx::record::{RecordingSurface, SurfaceConfig};
///
/// let mut surface = RecordingSurface::new(SurfaceConfig::default());
/// surface.begin_drawing();
/// surface.lines(|g| g.draw_line(0.0, 0.0, 10.0, 10.0, 1.0));
/// surface.fill_oval(0.0, 0.0, 0.0, 8.0);
/// let list = surface.finish();
/// assert_eq!(list.len(), 3);
/// assert!(surface.violations().is_empty());
/// ```
///
/// `begin_drawing` resets the list and restores the configured default color
/// and font. `finish` closes a dangling line batch and hands the list over.
///
/// Degenerate geometry records nothing. Line-batch misuse is handled per
/// [`LinePolicy`]: logged and collected in [`violations`](Self::violations)
/// when lenient, a panic when strict.
pub struct RecordingSurface {
    config: SurfaceConfig,
    fonts: Arc<FontSystem>,
    list: DrawList,
    color: Color,
    font: Font,
    in_lines: bool,
    violations: Vec<ProtocolViolation>,
}

impl RecordingSurface {
    /// Surface with no fonts registered; every font measures as zero.
    pub fn new(config: SurfaceConfig) -> Self {
        Self::with_fonts(config, Arc::new(FontSystem::new()))
    }

    pub fn with_fonts(config: SurfaceConfig, fonts: Arc<FontSystem>) -> Self {
        let color = config.default_color.clone();
        let font = config.default_font.clone();
        Self {
            config,
            fonts,
            list: DrawList::new(),
            color,
            font,
            in_lines: false,
            violations: Vec::new(),
        }
    }

    /// Starts a new session.
    pub fn begin_drawing(&mut self) {
        self.list.clear();
        self.color = self.config.default_color.clone();
        self.font = self.config.default_font.clone();
        self.in_lines = false;
        self.violations.clear();
    }

    /// Ends the session and returns what was recorded.
    ///
    /// # Panics
    /// With [`LinePolicy::Strict`], if a line batch is still open.
    pub fn finish(&mut self) -> DrawList {
        if self.in_lines {
            self.violation(ProtocolViolation::UnterminatedLines);
            self.list.push(DrawCmd::EndLines);
            self.in_lines = false;
        }
        log::debug!("recorded {} draw commands", self.list.len());
        std::mem::take(&mut self.list)
    }

    /// Commands recorded so far in the current session.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    #[inline]
    pub fn violations(&self) -> &[ProtocolViolation] {
        &self.violations
    }

    #[inline]
    pub fn current_color(&self) -> &Color {
        &self.color
    }

    #[inline]
    pub fn current_font(&self) -> &Font {
        &self.font
    }

    #[inline]
    pub fn in_line_batch(&self) -> bool {
        self.in_lines
    }

    fn violation(&mut self, violation: ProtocolViolation) {
        match self.config.line_policy {
            LinePolicy::Strict => panic!("line batch protocol violated: {violation}"),
            LinePolicy::Lenient => {
                log::warn!("line batch protocol violated: {violation}");
                self.violations.push(violation);
            }
        }
    }

    /// Common gate for closed shapes: skips degenerate sizes and flags
    /// shapes drawn inside a line batch.
    fn accept_shape(&mut self, kind: &'static str, width: f32, height: f32) -> bool {
        if !is_drawable_size(width, height) {
            log::trace!("skipping {kind} with degenerate size {width}x{height}");
            return false;
        }
        self.check_outside_lines(kind);
        true
    }

    fn check_outside_lines(&mut self, kind: &'static str) {
        if self.in_lines {
            self.violation(ProtocolViolation::ShapeInLineBatch(kind));
        }
    }

    fn record_polygon(&mut self, polygon: &Polygon, style: Style) {
        if polygon.is_degenerate() {
            log::trace!("skipping polygon with {} points", polygon.len());
            return;
        }
        self.check_outside_lines("polygon");
        self.list.push_polygon(polygon, self.color.clone(), style);
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl Graphics for RecordingSurface {
    type Image = RasterImage;

    fn begin_entity(&mut self, entity: &Tag) {
        self.list.set_entity(Some(entity.clone()));
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
    }

    fn set_color(&mut self, color: &Color) {
        self.color = color.clone();
    }

    fn fill_polygon(&mut self, polygon: &Polygon) {
        self.record_polygon(polygon, Style::Fill);
    }

    fn draw_polygon(&mut self, polygon: &Polygon, w: f32) {
        self.record_polygon(polygon, Style::Stroke(w));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if self.accept_shape("rect", width, height) {
            self.list.push_rect(Rect::new(x, y, width, height), self.color.clone(), Style::Fill);
        }
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, w: f32) {
        if self.accept_shape("rect", width, height) {
            self.list.push_rect(Rect::new(x, y, width, height), self.color.clone(), Style::Stroke(w));
        }
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        if self.accept_shape("rounded-rect", width, height) {
            self.list.push_rounded_rect(
                Rect::new(x, y, width, height),
                radius,
                self.color.clone(),
                Style::Fill,
            );
        }
    }

    fn draw_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, w: f32) {
        if self.accept_shape("rounded-rect", width, height) {
            self.list.push_rounded_rect(
                Rect::new(x, y, width, height),
                radius,
                self.color.clone(),
                Style::Stroke(w),
            );
        }
    }

    fn fill_oval(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if self.accept_shape("oval", width, height) {
            self.list.push_oval(Rect::new(x, y, width, height), self.color.clone(), Style::Fill);
        }
    }

    fn draw_oval(&mut self, x: f32, y: f32, width: f32, height: f32, w: f32) {
        if self.accept_shape("oval", width, height) {
            self.list.push_oval(Rect::new(x, y, width, height), self.color.clone(), Style::Stroke(w));
        }
    }

    fn begin_lines(&mut self) {
        if self.in_lines {
            self.violation(ProtocolViolation::NestedBeginLines);
            return;
        }
        self.in_lines = true;
        self.list.push(DrawCmd::BeginLines);
    }

    fn draw_line(&mut self, sx: f32, sy: f32, ex: f32, ey: f32, w: f32) {
        self.list.push_line(
            Vec2::new(sx, sy),
            Vec2::new(ex, ey),
            w,
            self.color.clone(),
            self.in_lines,
        );
    }

    fn end_lines(&mut self) {
        if !self.in_lines {
            self.violation(ProtocolViolation::UnmatchedEndLines);
            return;
        }
        self.in_lines = false;
        self.list.push(DrawCmd::EndLines);
    }

    fn draw_image(&mut self, image: &RasterImage, x: f32, y: f32, width: f32, height: f32) {
        if self.accept_shape("image", width, height) {
            self.list.push_image(image.clone(), Rect::new(x, y, width, height));
        }
    }

    fn draw_string(&mut self, text: &str, x: f32, y: f32) {
        if text.is_empty() {
            return;
        }
        self.check_outside_lines("text");
        self.list.push_text(text, self.font.clone(), self.color.clone(), Vec2::new(x, y));
    }

    fn font_metrics(&mut self) -> Arc<dyn FontMetrics> {
        self.fonts.metrics(&self.font)
    }

    fn image_from_file(&mut self, path: &Path) -> Option<RasterImage> {
        match RasterImage::load(path) {
            Ok(image) => Some(image),
            Err(err) => {
                log::debug!("{err}");
                None
            }
        }
    }
}
