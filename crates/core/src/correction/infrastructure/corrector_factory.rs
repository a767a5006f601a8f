use crate::correction::domain::landmark_corrector::{CorrectionMode, LandmarkCorrector};

use super::fractional_offset_corrector::FractionalOffsetCorrector;
use super::skin_walk_corrector::SkinWalkCorrector;

/// Creates the corrector for `mode` with the default thresholds.
pub fn create_corrector(mode: CorrectionMode) -> Box<dyn LandmarkCorrector> {
    log::info!("Using {mode} forehead correction");
    match mode {
        CorrectionMode::Enhanced => Box::new(SkinWalkCorrector::default()),
        CorrectionMode::Simple => Box::new(FractionalOffsetCorrector::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gray_frame::GrayFrame;
    use crate::test_support::{synthetic_face, FACE_IMAGE_SIZE};

    #[test]
    fn test_enhanced_samples_skin() {
        let frame = GrayFrame::uniform(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE, 150);
        let report = create_corrector(CorrectionMode::Enhanced).correct(synthetic_face(), &frame);
        assert_eq!(report.forehead_clear, Some(true));
    }

    #[test]
    fn test_simple_never_samples() {
        let frame = GrayFrame::uniform(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE, 150);
        let report = create_corrector(CorrectionMode::Simple).correct(synthetic_face(), &frame);
        assert_eq!(report.forehead_clear, None);
    }

    #[test]
    fn test_corrector_is_send() {
        fn assert_send<T: Send>(_: &T) {}
        assert_send(&create_corrector(CorrectionMode::Enhanced));
    }
}
