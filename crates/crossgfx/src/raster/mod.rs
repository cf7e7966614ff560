//! Decoded bitmaps produced by `image_from_file`.

mod bitmap;

pub use bitmap::{ImageLoadError, RasterImage};
