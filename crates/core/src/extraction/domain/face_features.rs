use std::collections::BTreeMap;

use serde::Serialize;

use crate::geometry::eyebrow_shape::EyebrowShape;
use crate::geometry::shape::eye_center;
use crate::shared::point::Point;

use super::clear_side::FaceSide;
use super::face_components::FaceComponents;

/// Scalar shape features reported next to the region crops.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaceFeatures {
    pub clear_side: FaceSide,
    /// Polygon area per component name.
    pub areas: BTreeMap<&'static str, f64>,
    pub left_eyebrow: EyebrowShape,
    pub right_eyebrow: EyebrowShape,
    pub left_eye_center: (f64, f64),
    pub right_eye_center: (f64, f64),
}

impl FaceFeatures {
    pub fn measure(components: &FaceComponents, clear_side: FaceSide) -> Self {
        // upper and lower lid points, skipping the corners
        let lids = |eye: &[Point; 7]| [eye[1], eye[2], eye[4], eye[5]];
        Self {
            clear_side,
            areas: components.areas().into_iter().collect(),
            left_eyebrow: EyebrowShape::from_points(&components.left_eyebrow),
            right_eyebrow: EyebrowShape::from_points(&components.right_eyebrow),
            left_eye_center: eye_center(&lids(&components.left_eye)),
            right_eye_center: eye_center(&lids(&components.right_eye)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_face;
    use approx::assert_relative_eq;

    fn features() -> FaceFeatures {
        let components = FaceComponents::collect(&synthetic_face());
        FaceFeatures::measure(&components, FaceSide::clearer(&components))
    }

    #[test]
    fn test_eye_centers() {
        let f = features();
        assert_relative_eq!(f.left_eye_center.0, 148.0);
        assert_relative_eq!(f.left_eye_center.1, 169.0);
        assert_relative_eq!(f.right_eye_center.0, 252.0);
    }

    #[test]
    fn test_eyebrow_arch_angles() {
        let f = features();
        assert_relative_eq!(f.left_eyebrow.arch_angle, 157.0488, epsilon = 1e-3);
        assert_relative_eq!(f.right_eyebrow.arch_angle, 151.9275, epsilon = 1e-3);
    }

    #[test]
    fn test_areas_keyed_by_component() {
        let f = features();
        assert_eq!(f.areas.len(), 9);
        assert!(f.areas["left_eye"] > 0.0);
        assert_relative_eq!(f.areas["left_eye"], f.areas["right_eye"]);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(features()).unwrap();
        assert_eq!(json["clear_side"], "right");
        assert!(json["left_eyebrow"]["curvature"].is_number());
    }
}
