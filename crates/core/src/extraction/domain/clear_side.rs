use serde::Serialize;

use crate::shared::constants::CLEAR_SIDE_TOLERANCE;

use super::face_components::FaceComponents;

/// Image-side of the face judged less foreshortened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceSide {
    Left,
    Right,
}

impl FaceSide {
    /// Compares the nose tip against the inner eye corners. A face turned
    /// far enough that an inner corner crosses the nose picks the opposite
    /// side outright; otherwise the side whose corner is farther from the
    /// nose wins, with near-ties going right.
    pub fn clearer(components: &FaceComponents) -> FaceSide {
        let left_corner = components.left_eye[3];
        let right_corner = components.right_eye[0];
        let nose_tip = components.nose_line[3];

        if right_corner.x - nose_tip.x < 0 {
            return FaceSide::Left;
        }
        if nose_tip.x - left_corner.x < 0 {
            return FaceSide::Right;
        }
        let diff = (nose_tip.x - left_corner.x).abs() - (nose_tip.x - right_corner.x).abs();
        if diff <= CLEAR_SIDE_TOLERANCE {
            FaceSide::Right
        } else {
            FaceSide::Left
        }
    }
}
