use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: Color,
    /// `false` when drawn outside a `begin_lines` / `end_lines` bracket.
    pub batched: bool,
}

impl DrawList {
    #[inline]
    pub fn push_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color, batched: bool) {
        self.push(DrawCmd::Line(LineCmd { start, end, width, color, batched }));
    }
}
