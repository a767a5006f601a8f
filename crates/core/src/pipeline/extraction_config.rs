use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::correction::domain::landmark_corrector::CorrectionMode;
use crate::extraction::domain::face_crop::CropPadding;
use crate::extraction::domain::region_name::{RegionSelection, ALL_REGIONS};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{axis} padding must be within [0, 1], got {value}")]
    PaddingOutOfRange { axis: &'static str, value: f64 },
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("failed to read config {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Settings for one extraction run. Missing JSON fields take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Region names to extract; `"all"` selects the full catalogue.
    pub regions: Vec<String>,
    pub mode: CorrectionMode,
    /// Also write the padded whole-face crop.
    pub crop_face: bool,
    pub padding: CropPadding,
    pub workers: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            regions: vec![ALL_REGIONS.to_string()],
            mode: CorrectionMode::default(),
            crop_face: false,
            padding: CropPadding::default(),
            workers: default_workers(),
        }
    }
}

impl ExtractionConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("x", self.padding.x), ("y", self.padding.y)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::PaddingOutOfRange { axis, value });
            }
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }

    pub fn selection(&self) -> RegionSelection {
        RegionSelection::parse(&self.regions)
    }

    /// Padding for the whole-face crop, or `None` when it is disabled.
    pub fn face_padding(&self) -> Option<CropPadding> {
        self.crop_face.then_some(self.padding)
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
