use std::sync::Arc;

/// Measurements for a resolved font.
///
/// All values are whole logical pixels. `descent` is a positive distance
/// below the baseline.
pub trait FontMetrics: Send + Sync {
    /// Advance width of `text` when drawn on a single line.
    fn string_width(&self, text: &str) -> i32;

    /// Distance between consecutive baselines.
    fn height(&self) -> i32;

    fn ascent(&self) -> i32;

    fn descent(&self) -> i32;
}

/// Metrics for a font no back end could resolve: everything measures zero.
///
/// Drawing code keeps working (text collapses to a point) instead of failing.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullMetrics;

impl FontMetrics for NullMetrics {
    fn string_width(&self, _text: &str) -> i32 {
        0
    }

    fn height(&self) -> i32 {
        0
    }

    fn ascent(&self) -> i32 {
        0
    }

    fn descent(&self) -> i32 {
        0
    }
}

/// Metrics computed from a fontdue face at a fixed pixel size.
pub struct FontdueMetrics {
    font: Arc<fontdue::Font>,
    px: f32,
    ascent: i32,
    descent: i32,
    height: i32,
}

impl FontdueMetrics {
    pub fn new(font: Arc<fontdue::Font>, px: f32) -> Self {
        let (ascent, descent, height) = match font.horizontal_line_metrics(px) {
            Some(m) => (m.ascent, -m.descent, m.new_line_size),
            // Faces without horizontal metrics: conventional 80/20 split.
            None => (px * 0.8, px * 0.2, px * 1.2),
        };
        Self {
            font,
            px,
            ascent: ascent.round() as i32,
            descent: descent.round() as i32,
            height: height.round() as i32,
        }
    }
}

impl FontMetrics for FontdueMetrics {
    fn string_width(&self, text: &str) -> i32 {
        let mut width = 0.0f32;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = prev {
                width += self.font.horizontal_kern(left, ch, self.px).unwrap_or(0.0);
            }
            width += self.font.metrics(ch, self.px).advance_width;
            prev = Some(ch);
        }
        width.round() as i32
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn ascent(&self) -> i32 {
        self.ascent
    }

    fn descent(&self) -> i32 {
        self.descent
    }
}
