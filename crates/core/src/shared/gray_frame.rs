use image::{DynamicImage, GrayImage, Luma};
use ndarray::{s, ArrayView2};

use super::pixel_box::PixelBox;

/// Grayscale image used by the landmark heuristics.
///
/// Pixel statistics are taken over `ndarray` views in `(row, column)` order;
/// the underlying buffer stays an [`image::GrayImage`] so crops and I/O go
/// through the `image` crate.
#[derive(Clone, Debug)]
pub struct GrayFrame {
    image: GrayImage,
}

impl GrayFrame {
    pub fn new(image: GrayImage) -> Self {
        Self { image }
    }

    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::new(image.to_luma8())
    }

    pub fn uniform(width: u32, height: u32, intensity: u8) -> Self {
        Self::new(GrayImage::from_pixel(width, height, Luma([intensity])))
    }

    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> u8,
    {
        Self::new(GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)])))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Intensity at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return None;
        }
        Some(self.image.get_pixel(x as u32, y as u32)[0])
    }

    pub fn as_ndarray(&self) -> ArrayView2<'_, u8> {
        ArrayView2::from_shape(
            (self.height() as usize, self.width() as usize),
            self.image.as_raw(),
        )
        .expect("GrayImage buffer length must match dimensions")
    }

    /// View of the pixels inside `bbox`, clipped to the image. May be empty.
    pub fn region(&self, bbox: &PixelBox) -> ArrayView2<'_, u8> {
        let b = bbox.clamped(self.width(), self.height());
        self.as_ndarray().slice_move(s![
            b.y as usize..b.y2 as usize,
            b.x as usize..b.x2 as usize
        ])
    }
}
