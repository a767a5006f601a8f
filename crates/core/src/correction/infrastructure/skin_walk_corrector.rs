use crate::correction::domain::forehead_point_enhancer::ForeheadPointEnhancer;
use crate::correction::domain::forehead_region::ForeheadRegion;
use crate::correction::domain::landmark_corrector::{CorrectionReport, LandmarkCorrector};
use crate::correction::domain::point_consistency_adjuster::PointConsistencyAdjuster;
use crate::correction::domain::skin_tone_profiler::{mean_intensity, SkinToneProfiler};
use crate::shared::constants::{FOREHEAD_EDGE_SHIFT_RATIO, NOSE_SAMPLE_HALF_WIDTH};
use crate::shared::gray_frame::GrayFrame;
use crate::shared::landmark_set::{idx, LandmarkSet};
use crate::shared::pixel_box::PixelBox;
use crate::shared::point::Point;

use super::fractional_offset_corrector::FractionalOffsetCorrector;

/// Walks the forehead points up to the hairline when the forehead is
/// uncovered, falling back to the fractional lift otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkinWalkCorrector {
    profiler: SkinToneProfiler,
    enhancer: ForeheadPointEnhancer,
    adjuster: PointConsistencyAdjuster,
    fallback: FractionalOffsetCorrector,
}

impl SkinWalkCorrector {
    pub fn new(
        profiler: SkinToneProfiler,
        enhancer: ForeheadPointEnhancer,
        adjuster: PointConsistencyAdjuster,
        fallback: FractionalOffsetCorrector,
    ) -> Self {
        Self {
            profiler,
            enhancer,
            adjuster,
            fallback,
        }
    }

    /// Narrow strip down the nose bridge used as the first skin sample.
    pub fn nose_sample_box(landmarks: &LandmarkSet) -> PixelBox {
        let upper = landmarks.point(idx::NOSE_BRIDGE_UPPER);
        let tip = landmarks.point(idx::NOSE_TIP);
        PixelBox::new(
            upper.x - NOSE_SAMPLE_HALF_WIDTH,
            upper.y,
            upper.x + NOSE_SAMPLE_HALF_WIDTH,
            tip.y,
        )
    }

    fn walk_forehead(
        &self,
        landmarks: LandmarkSet,
        frame: &GrayFrame,
        skin_intensity: f64,
        forehead_height: u32,
    ) -> CorrectionReport {
        let landmarks = {
            let chin_midpoint = landmarks.chin_midpoint();
            landmarks.with_point(idx::CHIN_MIDPOINT, chin_midpoint)
        };

        let originals = landmarks.select(idx::WALKED);
        let outcomes = self
            .enhancer
            .enhance(frame, originals, skin_intensity, forehead_height);
        let adjusted = self.adjuster.adjust(
            outcomes.map(|o| o.point),
            landmarks.point(idx::HAIRLINE_LEFT),
            landmarks.point(idx::HAIRLINE_RIGHT),
        );
        let landmarks = idx::WALKED
            .iter()
            .zip(adjusted)
            .fold(landmarks, |set, (&i, p)| set.with_point(i, p));

        let center = forehead_center(&landmarks);
        let edge = landmarks.point(idx::FOREHEAD_RIGHT_EDGE);
        let edge_x = edge.x as f64 - forehead_height as f64 * FOREHEAD_EDGE_SHIFT_RATIO;
        let landmarks = landmarks
            .with_point(idx::FOREHEAD_CENTER, center)
            .with_point(idx::FOREHEAD_RIGHT_EDGE, edge.with_x(edge_x as i32));

        CorrectionReport {
            landmarks,
            forehead_height,
            forehead_clear: Some(true),
            walks: outcomes.to_vec(),
        }
    }
}

/// Halfway between the inner eyebrow corners horizontally, halfway between
/// the left inner corner and the corrected forehead top vertically.
fn forehead_center(landmarks: &LandmarkSet) -> Point {
    let left = landmarks.point(idx::LEFT_EYEBROW_INNER);
    let right = landmarks.point(idx::RIGHT_EYEBROW_INNER);
    let top = landmarks.point(idx::FOREHEAD_TOP);
    let x = left.x as f64 + (right.x - left.x) as f64 / 2.0;
    let y = left.y as f64 - (left.y - top.y) as f64 / 2.0;
    Point::new(x as i32, y as i32)
}

impl LandmarkCorrector for SkinWalkCorrector {
    fn correct(&self, landmarks: LandmarkSet, frame: &GrayFrame) -> CorrectionReport {
        let forehead = ForeheadRegion::locate(&landmarks, frame);
        let forehead_height = forehead.height();
        let pixels = forehead.pixels(frame);

        let nose_tone = mean_intensity(frame.region(&Self::nose_sample_box(&landmarks)));
        let clear = nose_tone.is_some_and(|tone| self.profiler.is_region_clear(pixels, tone));
        let forehead_tone = if clear { mean_intensity(pixels) } else { None };

        match forehead_tone {
            Some(tone) => {
                log::debug!("Forehead clear (skin tone {tone:.1}), walking points");
                self.walk_forehead(landmarks, frame, tone, forehead_height)
            }
            None => {
                log::debug!("Forehead covered or unsampled, using fractional lift");
                CorrectionReport {
                    landmarks: self.fallback.lift(landmarks, forehead_height),
                    forehead_height,
                    forehead_clear: Some(false),
                    walks: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::domain::forehead_point_enhancer::WalkState;
    use crate::test_support::{synthetic_face, FACE_IMAGE_SIZE};

    fn hair_above(row: u32) -> GrayFrame {
        GrayFrame::from_fn(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE, |_, y| {
            if y < row {
                20
            } else {
                150
            }
        })
    }

    // ── sampling ──

    #[test]
    fn test_nose_sample_box() {
        let bbox = SkinWalkCorrector::nose_sample_box(&synthetic_face());
        assert_eq!(bbox, PixelBox::new(195, 175, 205, 205));
    }

    #[test]
    fn test_forehead_center_uses_corrected_top() {
        let set = synthetic_face().with_y(idx::FOREHEAD_TOP, 47);
        // (172 + 28, 148 - 50.5)
        assert_eq!(forehead_center(&set), Point::new(200, 97));
    }

    // ── clear forehead ──

    #[test]
    fn test_flat_image_walks_every_point_into_fallback() {
        let frame = GrayFrame::uniform(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE, 150);
        let report = SkinWalkCorrector::default().correct(synthetic_face(), &frame);

        assert_eq!(report.forehead_height, 70);
        assert_eq!(report.forehead_clear, Some(true));
        assert_eq!(report.walks.len(), 5);
        assert_eq!(report.fallback_count(), 5);
        assert!(report.walks.iter().all(|w| w.state == WalkState::Searching));

        let lm = &report.landmarks;
        assert_eq!(lm.point(68), Point::new(200, 315));
        assert_eq!(lm.point(69), Point::new(135, 58));
        assert_eq!(lm.point(70), Point::new(160, 50));
        assert_eq!(lm.point(71), Point::new(200, 47));
        assert_eq!(lm.point(73), Point::new(265, 58));
        assert_eq!(lm.point(80), Point::new(240, 50));
        assert_eq!(lm.point(72), Point::new(200, 97));
        assert_eq!(lm.point(74), Point::new(285, 120));
    }

    #[test]
    fn test_walk_stops_at_hairline() {
        let report = SkinWalkCorrector::default().correct(synthetic_face(), &hair_above(40));

        assert_eq!(report.fallback_count(), 0);
        assert!(report.walks.iter().all(|w| w.state == WalkState::Converged));

        let ys = report.landmarks.select(idx::WALKED).map(|p| p.y);
        assert_eq!(ys, [35, 35, 36, 35, 35]);
        assert_eq!(report.landmarks.point(72), Point::new(200, 92));
    }

    #[test]
    fn test_walk_never_moves_x() {
        let original = synthetic_face();
        let report = SkinWalkCorrector::default().correct(original.clone(), &hair_above(40));
        for i in idx::WALKED {
            assert_eq!(report.landmarks.point(i).x, original.point(i).x);
        }
    }

    // ── covered forehead ──

    #[test]
    fn test_covered_forehead_falls_back_to_lift() {
        // Hair down to the brows: the nose still samples as skin.
        let frame = hair_above(140);
        let original = synthetic_face();
        let report = SkinWalkCorrector::default().correct(original.clone(), &frame);

        assert_eq!(report.forehead_clear, Some(false));
        assert!(!report.walked());
        assert_eq!(report.landmarks.point(68), original.point(68));
        assert_eq!(report.landmarks.point(71), Point::new(200, 45));
    }

    #[test]
    fn test_empty_nose_sample_is_not_clear() {
        let frame = GrayFrame::uniform(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE, 150);
        let set = synthetic_face().with_y(idx::NOSE_TIP, 175);
        let report = SkinWalkCorrector::default().correct(set, &frame);

        assert_eq!(report.forehead_clear, Some(false));
        assert!(report.walks.is_empty());
    }
}
