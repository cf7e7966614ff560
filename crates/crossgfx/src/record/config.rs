use crate::paint::Color;
use crate::text::Font;

/// What a surface does when `begin_lines` / `end_lines` are mis-paired.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LinePolicy {
    /// Log a warning, record the violation, and keep drawing.
    #[default]
    Lenient,
    /// Panic on the offending call.
    Strict,
}

/// Recording surface configuration.
///
/// `default_color` and `default_font` are the current state at the start of
/// every session.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub default_color: Color,
    pub default_font: Font,
    pub line_policy: LinePolicy,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            default_color: Color::BLACK,
            default_font: Font::regular("sans-serif", 12),
            line_policy: LinePolicy::Lenient,
        }
    }
}
