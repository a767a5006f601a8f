use crate::geometry::shape::polygon_area;
use crate::shared::landmark_set::{idx, LandmarkSet};
use crate::shared::point::Point;

const UPPER_LIP: [usize; 7] = [50, 51, 52, 63, 62, 61, 50];
const LOWER_LIP: [usize; 7] = [67, 66, 65, 56, 57, 58, 67];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceComponents {
    /// Jaw, then the forehead outline back to the first jaw point.
    pub face_shape: Vec<Point>,
    /// Eyelid contour closed on its first point.
    pub left_eye: [Point; 7],
    pub right_eye: [Point; 7],
    pub left_eyebrow: [Point; 5],
    pub right_eyebrow: [Point; 5],
    pub nose_line: [Point; 4],
    pub nose_arc: [Point; 5],
    pub upper_lip: [Point; 7],
    pub lower_lip: [Point; 7],
}

impl FaceComponents {
    pub const NAMES: [&'static str; 9] = [
        "face_shape",
        "left_eye",
        "right_eye",
        "left_i_brow",
        "right_i_brow",
        "nose_line",
        "nose_arc",
        "upper_lip",
        "lower_lip",
    ];

    pub fn collect(landmarks: &LandmarkSet) -> Self {
        let mut face_shape: Vec<Point> = landmarks.jaw().to_vec();
        face_shape.extend(idx::FOREHEAD_OUTLINE.iter().map(|&i| landmarks.point(i)));
        face_shape.push(landmarks.point(idx::JAW.start));

        Self {
            face_shape,
            left_eye: closed_loop(landmarks, idx::LEFT_EYE.start),
            right_eye: closed_loop(landmarks, idx::RIGHT_EYE.start),
            left_eyebrow: array_from(landmarks, idx::LEFT_EYEBROW.start),
            right_eyebrow: array_from(landmarks, idx::RIGHT_EYEBROW.start),
            nose_line: array_from(landmarks, idx::NOSE_BRIDGE.start),
            nose_arc: array_from(landmarks, idx::NOSE_BASE.start),
            upper_lip: landmarks.select(UPPER_LIP),
            lower_lip: landmarks.select(LOWER_LIP),
        }
    }

    /// Components in [`FaceComponents::NAMES`] order.
    pub fn named(&self) -> [(&'static str, &[Point]); 9] {
        let polys: [&[Point]; 9] = [
            &self.face_shape,
            &self.left_eye,
            &self.right_eye,
            &self.left_eyebrow,
            &self.right_eyebrow,
            &self.nose_line,
            &self.nose_arc,
            &self.upper_lip,
            &self.lower_lip,
        ];
        let mut i = 0;
        polys.map(|p| {
            let entry = (Self::NAMES[i], p);
            i += 1;
            entry
        })
    }

    /// Shoelace area of every component. Loops that repeat their first
    /// point are not closed a second time.
    pub fn areas(&self) -> Vec<(&'static str, f64)> {
        self.named()
            .iter()
            .map(|&(name, points)| {
                let closed = points.len() > 1 && points.first() == points.last();
                (name, polygon_area(points, closed))
            })
            .collect()
    }
}

fn array_from<const N: usize>(landmarks: &LandmarkSet, start: usize) -> [Point; N] {
    std::array::from_fn(|i| landmarks.point(start + i))
}

/// Six eyelid points starting at `start`, then `start` again.
fn closed_loop(landmarks: &LandmarkSet, start: usize) -> [Point; 7] {
    std::array::from_fn(|i| landmarks.point(start + i % 6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_face;
    use rstest::rstest;

    #[rstest]
    #[case::face_shape("face_shape", 29)]
    #[case::left_eye("left_eye", 7)]
    #[case::right_eye("right_eye", 7)]
    #[case::left_brow("left_i_brow", 5)]
    #[case::right_brow("right_i_brow", 5)]
    #[case::nose_line("nose_line", 4)]
    #[case::nose_arc("nose_arc", 5)]
    #[case::upper_lip("upper_lip", 7)]
    #[case::lower_lip("lower_lip", 7)]
    fn test_component_sizes(#[case] name: &str, #[case] expected: usize) {
        let components = FaceComponents::collect(&synthetic_face());
        let (_, points) = components
            .named()
            .into_iter()
            .find(|(n, _)| *n == name)
            .unwrap();
        assert_eq!(points.len(), expected);
    }

    #[test]
    fn test_nine_components() {
        let components = FaceComponents::collect(&synthetic_face());
        assert_eq!(components.named().len(), 9);
    }

    #[test]
    fn test_eyes_close_on_first_point() {
        let face = synthetic_face();
        let components = FaceComponents::collect(&face);
        assert_eq!(components.left_eye[6], face.point(36));
        assert_eq!(components.right_eye[5], face.point(47));
        assert_eq!(components.right_eye[6], face.point(42));
    }

    #[test]
    fn test_face_shape_traversal() {
        let face = synthetic_face();
        let shape = FaceComponents::collect(&face).face_shape;
        assert_eq!(shape[16], face.point(16));
        assert_eq!(shape[17], face.point(78));
        assert_eq!(shape[21], face.point(80));
        assert_eq!(shape[27], face.point(77));
        assert_eq!(shape[28], face.point(0));
    }

    #[test]
    fn test_lips_follow_index_lists() {
        let face = synthetic_face();
        let c = FaceComponents::collect(&face);
        assert_eq!(c.upper_lip[3], face.point(63));
        assert_eq!(c.lower_lip[4], face.point(57));
    }

    #[test]
    fn test_areas_cover_every_component() {
        let areas = FaceComponents::collect(&synthetic_face()).areas();
        assert_eq!(areas.len(), 9);
        // nose line is a straight vertical segment
        let nose_line = areas.iter().find(|(n, _)| *n == "nose_line").unwrap();
        assert_eq!(nose_line.1, 0.0);
        let face = areas.iter().find(|(n, _)| *n == "face_shape").unwrap();
        assert!(face.1 > 10_000.0);
    }
}
