use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::Font;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: Font,
    pub color: Color,
    /// Top-left of the text bounds in logical pixels.
    pub origin: Vec2,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: impl Into<String>, font: Font, color: Color, origin: Vec2) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            color,
            origin,
        }));
    }
}
