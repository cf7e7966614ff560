//! Paint model: the colors handed to [`Graphics::set_color`](crate::graphics::Graphics::set_color).
//!
//! Colors are straight-alpha 8-bit RGBA. Back ends that blend in
//! premultiplied space convert with [`Color::to_premul`].

mod color;

pub use color::Color;
