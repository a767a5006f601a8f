use std::collections::BTreeMap;
use std::path::PathBuf;

use image::DynamicImage;

use crate::extraction::domain::face_features::FaceFeatures;
use crate::extraction::domain::region_name::RegionName;
use crate::imaging::domain::region_writer::RegionWriter;

/// Writes crops as `<dir>/<stem>_<region>.png` and features as
/// `<dir>/<stem>_features.json`.
pub struct RegionFileWriter {
    output_dir: PathBuf,
}

impl RegionFileWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn region_path(&self, stem: &str, region: RegionName) -> PathBuf {
        self.output_dir.join(format!("{stem}_{region}.png"))
    }
}

impl RegionWriter for RegionFileWriter {
    fn write_regions(
        &self,
        stem: &str,
        regions: &BTreeMap<RegionName, DynamicImage>,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(regions.len());
        for (&region, crop) in regions {
            // PNG cannot encode a zero-sized image
            if crop.width() == 0 || crop.height() == 0 {
                log::warn!("Skipping empty {region} crop for {stem}");
                continue;
            }
            let path = self.region_path(stem, region);
            crop.save(&path)?;
            written.push(path);
        }
        Ok(written)
    }

    fn write_features(
        &self,
        stem: &str,
        features: &FaceFeatures,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{stem}_features.json"));
        let json = serde_json::to_string_pretty(features)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    fn write_face(
        &self,
        stem: &str,
        face: &DynamicImage,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{stem}_face.png"));
        face.save(&path)?;
        Ok(path)
    }
}
