use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Why a bitmap could not be produced.
#[derive(Debug)]
pub enum ImageLoadError {
    /// The file could not be opened or decoded.
    Decode { path: PathBuf, source: ::image::ImageError },
    /// A pixel buffer does not match the stated dimensions.
    BufferSize { expected: usize, actual: usize },
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Decode { path, source } => {
                write!(f, "failed to load image {}: {source}", path.display())
            }
            ImageLoadError::BufferSize { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for ImageLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageLoadError::Decode { source, .. } => Some(source),
            ImageLoadError::BufferSize { .. } => None,
        }
    }
}

/// Straight-alpha RGBA8 bitmap, rows top to bottom.
///
/// Pixels are shared: clones are cheap and point at the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl RasterImage {
    /// Opens and decodes an image file, converting to RGBA8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ImageLoadError> {
        let path = path.as_ref();
        let decoded = ::image::open(path).map_err(|source| ImageLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self { width, height, pixels: rgba.into_raw().into() })
    }

    /// Wraps an existing RGBA8 buffer of exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageLoadError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ImageLoadError::BufferSize { expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels: pixels.into() })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crossgfx-{}-{name}", std::process::id()))
    }

    #[test]
    fn load_decodes_png_to_rgba() {
        let path = temp_path("dot.png");
        let mut buf = ::image::RgbaImage::new(2, 1);
        buf.put_pixel(1, 0, ::image::Rgba([255, 0, 0, 128]));
        buf.save(&path).unwrap();

        let img = RasterImage::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.pixel(1, 0), Some([255, 0, 0, 128]));
        assert_eq!(img.pixel(2, 0), None);
    }

    #[test]
    fn load_missing_file_is_decode_error() {
        let err = RasterImage::load(temp_path("missing.png")).unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode { .. }));
    }

    #[test]
    fn load_corrupt_file_is_decode_error() {
        let path = temp_path("corrupt.png");
        std::fs::write(&path, b"\x89PNG not really").unwrap();
        let result = RasterImage::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn from_rgba8_checks_length() {
        assert!(RasterImage::from_rgba8(2, 2, vec![0; 16]).is_ok());
        let err = RasterImage::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, ImageLoadError::BufferSize { expected: 16, actual: 15 }));
    }
}
