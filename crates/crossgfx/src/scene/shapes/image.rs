use crate::coords::Rect;
use crate::raster::RasterImage;
use crate::scene::{DrawCmd, DrawList};

/// Image blit payload. The image is scaled to fill `dest`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: RasterImage,
    pub dest: Rect,
}

impl DrawList {
    #[inline]
    pub fn push_image(&mut self, image: RasterImage, dest: Rect) {
        self.push(DrawCmd::Image(ImageCmd { image, dest }));
    }
}
