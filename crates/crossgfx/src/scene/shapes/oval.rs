use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Style;

/// Ellipse inscribed in `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct OvalCmd {
    pub bounds: Rect,
    pub color: Color,
    pub style: Style,
}

impl DrawList {
    #[inline]
    pub fn push_oval(&mut self, bounds: Rect, color: Color, style: Style) {
        self.push(DrawCmd::Oval(OvalCmd { bounds, color, style }));
    }
}
