//! crossgfx: a back-end agnostic immediate-mode 2D drawing contract.
//!
//! Drawing code is written once against [`graphics::Graphics`]; each back end
//! (a GPU renderer, a native canvas, the bundled [`record::RecordingSurface`])
//! implements the contract for its own target.
//!
//! ```
//! use crossgfx::prelude::*;
//! use crossgfx::record::RecordingSurface;
//!
//! fn draw_badge<G: Graphics>(g: &mut G) {
//!     g.set_color(&Color::DARK_GRAY);
//!     g.fill_rounded_rect(0.0, 0.0, 120.0, 40.0, 8.0);
//!     g.set_color(&Color::WHITE);
//!     g.set_font(&Font::bold("sans-serif", 14));
//!     g.draw_string("crossgfx", 12.0, 12.0);
//! }
//!
//! let mut surface = RecordingSurface::default();
//! surface.begin_drawing();
//! draw_badge(&mut surface);
//! let list = surface.finish();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.commands().next().map(|cmd| cmd.kind()), Some("rounded-rect"));
//! ```

pub mod coords;
pub mod graphics;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod record;
pub mod scene;
pub mod text;

mod tag;

pub use tag::Tag;

/// The contract, its value types, and the extension helpers.
pub mod prelude {
    pub use crate::Tag;
    pub use crate::coords::{Polygon, Rect, Vec2};
    pub use crate::graphics::{Graphics, GraphicsExt};
    pub use crate::paint::Color;
    pub use crate::text::{Font, FontMetrics, FontOptions};
}
