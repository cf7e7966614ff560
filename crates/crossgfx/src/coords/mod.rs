//! Geometry types shared by the drawing contract and its back ends.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Back ends map this space onto whatever their native API expects.

mod polygon;
mod rect;
mod vec2;

pub use polygon::Polygon;
pub use rect::Rect;
pub use vec2::Vec2;
