use ndarray::ArrayView2;

use crate::shared::constants::FOREHEAD_MARGIN;
use crate::shared::gray_frame::GrayFrame;
use crate::shared::landmark_set::{idx, LandmarkSet};
use crate::shared::pixel_box::PixelBox;

/// Window between the raw top forehead landmark and the right eyebrow peak,
/// spanning from the outer left to the inner right forehead point plus a
/// fixed margin.
///
/// Its height bounds how far the forehead walk may move a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForeheadRegion {
    bbox: PixelBox,
}

impl ForeheadRegion {
    /// Must be called on uncorrected landmarks: index 68 is still the
    /// predictor's forehead point here.
    pub fn locate(landmarks: &LandmarkSet, frame: &GrayFrame) -> Self {
        let left = landmarks.point(idx::FOREHEAD_LEFT);
        let top = landmarks.point(idx::CHIN_MIDPOINT);
        let right = landmarks.point(idx::FOREHEAD_RIGHT_INNER);
        let brow = landmarks.point(idx::RIGHT_EYEBROW_PEAK);
        let bbox = PixelBox::new(
            left.x - FOREHEAD_MARGIN,
            top.y,
            right.x + FOREHEAD_MARGIN,
            brow.y,
        );
        Self {
            bbox: bbox.clamped(frame.width(), frame.height()),
        }
    }

    pub fn bbox(&self) -> PixelBox {
        self.bbox
    }

    pub fn height(&self) -> u32 {
        self.bbox.height()
    }

    pub fn pixels<'a>(&self, frame: &'a GrayFrame) -> ArrayView2<'a, u8> {
        frame.region(&self.bbox)
    }
}
