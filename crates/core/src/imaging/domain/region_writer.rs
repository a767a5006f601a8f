use std::collections::BTreeMap;
use std::path::PathBuf;

use image::DynamicImage;

use crate::extraction::domain::face_features::FaceFeatures;
use crate::extraction::domain::region_name::RegionName;

/// Persists the output of one extraction, keyed by the source image stem.
pub trait RegionWriter: Send {
    /// Returns the paths actually written.
    fn write_regions(
        &self,
        stem: &str,
        regions: &BTreeMap<RegionName, DynamicImage>,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>;

    fn write_features(
        &self,
        stem: &str,
        features: &FaceFeatures,
    ) -> Result<PathBuf, Box<dyn std::error::Error>>;

    /// Writes the padded whole-face crop.
    fn write_face(
        &self,
        stem: &str,
        face: &DynamicImage,
    ) -> Result<PathBuf, Box<dyn std::error::Error>>;
}
