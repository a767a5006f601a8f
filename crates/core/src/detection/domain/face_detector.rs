use crate::shared::gray_frame::GrayFrame;

use super::bounding_box::BoundingBox;

/// Domain interface for face detection.
///
/// Callers only ever use the first box returned.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &GrayFrame) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>>;
}
