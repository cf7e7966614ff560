use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Style;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub style: Style,
}

impl DrawList {
    /// Records a filled or outlined rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color, style: Style) {
        self.push(DrawCmd::Rect(RectCmd { rect, color, style }));
    }
}
