use crate::coords::{Polygon, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Style;

/// Polygon draw payload.
///
/// Points are copied at record time; `version` is the source polygon's
/// version at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub version: u64,
    pub color: Color,
    pub style: Style,
}

impl DrawList {
    /// Records a snapshot of `polygon`.
    pub fn push_polygon(&mut self, polygon: &Polygon, color: Color, style: Style) {
        self.push(DrawCmd::Polygon(PolygonCmd {
            points: polygon.points().to_vec(),
            version: polygon.version(),
            color,
            style,
        }));
    }
}
