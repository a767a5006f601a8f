use std::path::Path;

use image::DynamicImage;

use crate::imaging::domain::image_reader::ImageReader;

/// Decodes any format the `image` crate supports.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error>> {
        let image = image::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
        log::debug!("Read {} ({}x{})", path.display(), image.width(), image.height());
        Ok(image)
    }
}
