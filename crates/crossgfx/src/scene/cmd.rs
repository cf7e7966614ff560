use super::shapes::{ImageCmd, LineCmd, OvalCmd, PolygonCmd, RectCmd, RoundedRectCmd, TextCmd};

/// One recorded drawing call.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a variant here
/// - implement the push helper inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Oval(OvalCmd),
    Polygon(PolygonCmd),
    Line(LineCmd),
    Image(ImageCmd),
    Text(TextCmd),
    /// Opens a line batch.
    BeginLines,
    /// Closes a line batch.
    EndLines,
}

impl DrawCmd {
    /// Short name used in logs and listings.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded-rect",
            DrawCmd::Oval(_) => "oval",
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Line(_) => "line",
            DrawCmd::Image(_) => "image",
            DrawCmd::Text(_) => "text",
            DrawCmd::BeginLines => "begin-lines",
            DrawCmd::EndLines => "end-lines",
        }
    }

    /// `true` for the batch markers, which paint nothing themselves.
    #[inline]
    pub fn is_marker(&self) -> bool {
        matches!(self, DrawCmd::BeginLines | DrawCmd::EndLines)
    }
}
