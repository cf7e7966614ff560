//! Recording back end.
//!
//! [`RecordingSurface`] implements the full [`Graphics`](crate::graphics::Graphics)
//! contract by capturing every visible call into a [`DrawList`](crate::scene::DrawList)
//! instead of rasterizing. It is the reference back end for drawing code and
//! for tests, and the input format for back ends that replay a list.

mod config;
mod surface;

pub use config::{LinePolicy, SurfaceConfig};
pub use surface::{ProtocolViolation, RecordingSurface};
