use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Style;

/// Rounded rectangle draw payload.
///
/// `radius` is recorded as given; clamping to half the short side is left to
/// whoever rasterizes the command.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub color: Color,
    pub style: Style,
}

impl DrawList {
    /// Records a filled or outlined rounded rectangle.
    #[inline]
    pub fn push_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, style: Style) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, color, style }));
    }
}
