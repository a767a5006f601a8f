//! Replays face boxes and landmarks produced offline by a shape predictor.
//!
//! Document layout:
//!
//! ```json
//! { "faces": [ { "bbox": { "x": 0, "y": 0, "width": 0, "height": 0 },
//!                "landmarks_68": [[x, y], ...],
//!                "landmarks_81": [[x, y], ...] } ] }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detection::domain::bounding_box::BoundingBox;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::landmark_predictor::{LandmarkPredictor, PredictedLandmarks};
use crate::shared::gray_frame::GrayFrame;
use crate::shared::point::Point;

#[derive(Debug, Error)]
pub enum PrecomputedLandmarksError {
    #[error("failed to read landmarks file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse landmarks file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no precomputed landmarks for face {0:?}")]
    UnknownFace(BoundingBox),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputedFace {
    pub bbox: BoundingBox,
    pub landmarks_68: Vec<Point>,
    pub landmarks_81: Vec<Point>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputedLandmarks {
    #[serde(default)]
    pub faces: Vec<PrecomputedFace>,
}

impl PrecomputedLandmarks {
    pub fn new(faces: Vec<PrecomputedFace>) -> Self {
        Self { faces }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, PrecomputedLandmarksError> {
        let text = std::fs::read_to_string(path).map_err(|source| PrecomputedLandmarksError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| PrecomputedLandmarksError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Landmark file belonging to `image`: `landmarks` itself when it is a
    /// file, otherwise `<landmarks>/<image stem>.json`.
    pub fn path_for_image(landmarks: &Path, image: &Path) -> PathBuf {
        if landmarks.is_dir() {
            let stem = image.file_stem().unwrap_or_default().to_string_lossy();
            landmarks.join(format!("{stem}.json"))
        } else {
            landmarks.to_path_buf()
        }
    }

    pub fn boxes(&self) -> Vec<BoundingBox> {
        self.faces.iter().map(|f| f.bbox).collect()
    }

    pub fn find(&self, bbox: &BoundingBox) -> Option<&PrecomputedFace> {
        self.faces.iter().find(|f| f.bbox == *bbox)
    }

    /// Splits into a detector/predictor pair sharing the same document.
    pub fn into_adapters(self) -> (PrecomputedFaceDetector, PrecomputedLandmarkPredictor) {
        let shared = Arc::new(self);
        (
            PrecomputedFaceDetector::new(Arc::clone(&shared)),
            PrecomputedLandmarkPredictor::new(shared),
        )
    }
}

pub struct PrecomputedFaceDetector {
    landmarks: Arc<PrecomputedLandmarks>,
}

impl PrecomputedFaceDetector {
    pub fn new(landmarks: Arc<PrecomputedLandmarks>) -> Self {
        Self { landmarks }
    }
}

impl FaceDetector for PrecomputedFaceDetector {
    fn detect(
        &mut self,
        _frame: &GrayFrame,
    ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>> {
        Ok(self.landmarks.boxes())
    }
}

pub struct PrecomputedLandmarkPredictor {
    landmarks: Arc<PrecomputedLandmarks>,
}

impl PrecomputedLandmarkPredictor {
    pub fn new(landmarks: Arc<PrecomputedLandmarks>) -> Self {
        Self { landmarks }
    }
}

impl LandmarkPredictor for PrecomputedLandmarkPredictor {
    fn predict(
        &mut self,
        _frame: &GrayFrame,
        face: &BoundingBox,
    ) -> Result<PredictedLandmarks, Box<dyn std::error::Error>> {
        let found = self
            .landmarks
            .find(face)
            .ok_or(PrecomputedLandmarksError::UnknownFace(*face))?;
        Ok(PredictedLandmarks::new(
            found.landmarks_68.clone(),
            found.landmarks_81.clone(),
        ))
    }
}
