mod image;
mod line;
mod oval;
mod polygon;
mod rect;
mod rounded_rect;
mod text;

pub use self::image::ImageCmd;
pub use line::LineCmd;
pub use oval::OvalCmd;
pub use polygon::PolygonCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;

/// Whether a closed shape is filled or outlined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Style {
    Fill,
    /// Outline with the given stroke width.
    Stroke(f32),
}

impl Style {
    #[inline]
    pub fn stroke_width(self) -> Option<f32> {
        match self {
            Style::Fill => None,
            Style::Stroke(w) => Some(w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_width_only_for_outlines() {
        assert_eq!(Style::Fill.stroke_width(), None);
        assert_eq!(Style::Stroke(2.5).stroke_width(), Some(2.5));
    }
}
