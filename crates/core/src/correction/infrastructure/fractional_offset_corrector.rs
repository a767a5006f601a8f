use crate::correction::domain::forehead_region::ForeheadRegion;
use crate::correction::domain::landmark_corrector::{CorrectionReport, LandmarkCorrector};
use crate::shared::constants::{SIMPLE_LIFT_CENTER, SIMPLE_LIFT_OUTER};
use crate::shared::gray_frame::GrayFrame;
use crate::shared::landmark_set::{idx, LandmarkSet};

/// Lifts the inner-left, top and inner-right forehead points by fixed shares
/// of the forehead height. No pixels are sampled.
#[derive(Clone, Copy, Debug)]
pub struct FractionalOffsetCorrector {
    outer_lift: f64,
    center_lift: f64,
}

impl FractionalOffsetCorrector {
    pub fn new(outer_lift: f64, center_lift: f64) -> Self {
        Self {
            outer_lift,
            center_lift,
        }
    }

    pub fn lift(&self, landmarks: LandmarkSet, forehead_height: u32) -> LandmarkSet {
        let h = forehead_height as f64;
        let raise = |set: LandmarkSet, i: usize, ratio: f64| {
            let y = set.point(i).y as f64 - h * ratio;
            set.with_y(i, y as i32)
        };
        let set = raise(landmarks, idx::FOREHEAD_LEFT_INNER, self.outer_lift);
        let set = raise(set, idx::FOREHEAD_TOP, self.center_lift);
        raise(set, idx::FOREHEAD_RIGHT_INNER, self.outer_lift)
    }
}

impl Default for FractionalOffsetCorrector {
    fn default() -> Self {
        Self::new(SIMPLE_LIFT_OUTER, SIMPLE_LIFT_CENTER)
    }
}

impl LandmarkCorrector for FractionalOffsetCorrector {
    fn correct(&self, landmarks: LandmarkSet, frame: &GrayFrame) -> CorrectionReport {
        let forehead_height = ForeheadRegion::locate(&landmarks, frame).height();
        log::debug!("Simple forehead lift over height {forehead_height}");
        CorrectionReport {
            landmarks: self.lift(landmarks, forehead_height),
            forehead_height,
            forehead_clear: None,
            walks: Vec::new(),
        }
    }
}
