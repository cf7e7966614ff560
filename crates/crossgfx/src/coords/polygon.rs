use crate::tag::Tag;

use super::{Rect, Vec2};

/// Ordered list of points describing a fillable or strokeable shape.
///
/// `version` grows by exactly one on every mutation, so a back end can keep a
/// cached tessellation keyed on `(tag, version)` and rebuild it only when the
/// shape actually changed. Clearing does not reset the version.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    points: Vec<Vec2>,
    version: u64,
    tag: Option<Tag>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity), ..Self::default() }
    }

    /// Builds a polygon from the first `count` entries of parallel coordinate
    /// arrays.
    ///
    /// `count` is clamped to the shorter array. The result starts at version 0.
    pub fn from_xy(xs: &[f32], ys: &[f32], count: usize) -> Self {
        let count = count.min(xs.len()).min(ys.len());
        let points = xs[..count]
            .iter()
            .zip(&ys[..count])
            .map(|(&x, &y)| Vec2::new(x, y))
            .collect();
        Self { points, version: 0, tag: None }
    }

    #[inline]
    pub fn add_point(&mut self, x: f32, y: f32) {
        self.push(Vec2::new(x, y));
    }

    #[inline]
    pub fn push(&mut self, p: Vec2) {
        self.points.push(p);
        self.version += 1;
    }

    /// Removes every point. Counts as one mutation.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
        self.version += 1;
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Fewer than three points encloses no area and draws nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Bounding box of all points, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Rect::from_corners(min, max))
    }

    #[inline]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Attaching renderer data is not a shape mutation; the version is unchanged.
    #[inline]
    pub fn set_tag(&mut self, tag: Option<Tag>) {
        self.tag = tag;
    }
}

impl Extend<Vec2> for Polygon {
    fn extend<I: IntoIterator<Item = Vec2>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── version ───────────────────────────────────────────────────────────

    #[test]
    fn new_polygon_is_empty_at_version_zero() {
        let poly = Polygon::new();
        assert!(poly.is_empty());
        assert_eq!(poly.version(), 0);
    }

    #[test]
    fn add_then_clear_scenario() {
        let mut poly = Polygon::new();
        poly.add_point(0.0, 0.0);
        poly.add_point(10.0, 0.0);
        poly.add_point(10.0, 10.0);
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.version(), 3);

        poly.clear();
        assert_eq!(poly.len(), 0);
        assert_eq!(poly.version(), 4);
    }

    #[test]
    fn clearing_empty_polygon_still_bumps_version() {
        let mut poly = Polygon::new();
        poly.clear();
        poly.clear();
        assert_eq!(poly.version(), 2);
    }

    #[test]
    fn extend_counts_each_point() {
        let mut poly = Polygon::new();
        poly.extend([Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);
        assert_eq!(poly.version(), 2);
    }

    #[test]
    fn set_tag_keeps_version() {
        let mut poly = Polygon::new();
        poly.set_tag(Some(Tag::new(5u32)));
        assert_eq!(poly.version(), 0);
        assert!(poly.tag().is_some());
    }

    // ── from_xy ───────────────────────────────────────────────────────────

    #[test]
    fn from_xy_takes_first_count_points_in_order() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [10.0, 11.0, 12.0, 13.0];
        let poly = Polygon::from_xy(&xs, &ys, 3);
        assert_eq!(
            poly.points(),
            &[Vec2::new(0.0, 10.0), Vec2::new(1.0, 11.0), Vec2::new(2.0, 12.0)]
        );
        assert_eq!(poly.version(), 0);
    }

    #[test]
    fn from_xy_clamps_count_to_shorter_array() {
        let poly = Polygon::from_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0], 10);
        assert_eq!(poly.len(), 2);
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn degenerate_below_three_points() {
        let mut poly = Polygon::from_xy(&[0.0, 5.0], &[0.0, 5.0], 2);
        assert!(poly.is_degenerate());
        poly.add_point(0.0, 5.0);
        assert!(!poly.is_degenerate());
    }

    #[test]
    fn bounds_span_all_points() {
        let poly = Polygon::from_xy(&[3.0, -2.0, 8.0], &[1.0, 6.0, -4.0], 3);
        assert_eq!(poly.bounds(), Some(Rect::new(-2.0, -4.0, 10.0, 10.0)));
        assert_eq!(Polygon::new().bounds(), None);
    }
}
