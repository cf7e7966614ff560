//! Recorded draw streams.
//!
//! Responsibilities:
//! - store back-end agnostic draw commands in call order
//! - remember which entity each command was drawn for
//! - keep shape-specific payloads isolated per file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::{
    ImageCmd, LineCmd, OvalCmd, PolygonCmd, RectCmd, RoundedRectCmd, Style, TextCmd,
};
