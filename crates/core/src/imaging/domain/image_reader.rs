use std::path::Path;

use image::DynamicImage;

/// Loads a source image for landmark correction and region extraction.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error>>;
}
