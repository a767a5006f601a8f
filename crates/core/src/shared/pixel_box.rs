use image::DynamicImage;

/// Half-open pixel rectangle `[x, x2) × [y, y2)` in image coordinates.
///
/// Corners may lie outside the image or be inverted; [`PixelBox::clamped`]
/// resolves both into a box that is safe to slice, possibly empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelBox {
    pub x: i32,
    pub y: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelBox {
    pub const fn new(x: i32, y: i32, x2: i32, y2: i32) -> Self {
        Self { x, y, x2, y2 }
    }

    pub fn width(&self) -> u32 {
        (self.x2 - self.x).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y2 - self.y).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Clips to a `frame_w × frame_h` image. Inverted extents collapse to
    /// zero width/height at the clipped start.
    pub fn clamped(&self, frame_w: u32, frame_h: u32) -> PixelBox {
        let w = frame_w as i32;
        let h = frame_h as i32;
        let x = self.x.clamp(0, w);
        let y = self.y.clamp(0, h);
        let x2 = self.x2.clamp(0, w).max(x);
        let y2 = self.y2.clamp(0, h).max(y);
        PixelBox { x, y, x2, y2 }
    }

    /// Copies the clipped box out of `image`. Empty boxes give a 0-sized
    /// image.
    pub fn crop(&self, image: &DynamicImage) -> DynamicImage {
        let b = self.clamped(image.width(), image.height());
        image.crop_imm(b.x as u32, b.y as u32, b.width(), b.height())
    }
}
