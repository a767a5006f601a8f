use crate::shared::gray_frame::GrayFrame;
use crate::shared::landmark_set::{LandmarkError, LandmarkSet};
use crate::shared::point::Point;

use super::bounding_box::BoundingBox;

/// Raw output of the 68-point and 81-point shape predictors for one face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictedLandmarks {
    pub base: Vec<Point>,
    pub extended: Vec<Point>,
}

impl PredictedLandmarks {
    pub fn new(base: Vec<Point>, extended: Vec<Point>) -> Self {
        Self { base, extended }
    }

    /// Face points from the 68-point prediction, forehead points from the
    /// 81-point one.
    pub fn merge(&self) -> Result<LandmarkSet, LandmarkError> {
        LandmarkSet::from_predictions(&self.base, &self.extended)
    }
}

/// Domain interface for landmark prediction inside a detected face box.
pub trait LandmarkPredictor: Send {
    fn predict(
        &mut self,
        frame: &GrayFrame,
        face: &BoundingBox,
    ) -> Result<PredictedLandmarks, Box<dyn std::error::Error>>;
}
