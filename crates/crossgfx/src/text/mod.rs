//! Font requests, font metrics, and the fontdue-backed resolver.

mod font;
mod font_system;
mod metrics;

#[cfg(test)]
pub(crate) mod test_fonts;

pub use font::{Font, FontOptions};
pub use font_system::{FaceId, FontLoadError, FontSystem};
pub use metrics::{FontMetrics, FontdueMetrics, NullMetrics};
