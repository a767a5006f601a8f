use std::collections::BTreeMap;

use image::DynamicImage;

use crate::shared::landmark_set::LandmarkSet;
use crate::shared::pixel_box::PixelBox;
use crate::shared::point::Point;

use super::clear_side::FaceSide;
use super::face_components::FaceComponents;
use super::region_name::{RegionName, RegionSelection};

/// Cuts region crops out of an image from face components. Single-sided
/// "clear" regions follow [`FaceSide`].
pub struct RegionExtractor {
    components: FaceComponents,
    side: FaceSide,
    chin_midpoint: Point,
}

impl RegionExtractor {
    pub fn new(landmarks: &LandmarkSet) -> Self {
        let components = FaceComponents::collect(landmarks);
        let side = FaceSide::clearer(&components);
        Self {
            components,
            side,
            chin_midpoint: landmarks.chin_midpoint(),
        }
    }

    pub fn components(&self) -> &FaceComponents {
        &self.components
    }

    pub fn clear_side(&self) -> FaceSide {
        self.side
    }

    /// Unclipped box for `region`. May be inverted on unusual faces.
    pub fn region_box(&self, region: RegionName) -> PixelBox {
        let c = &self.components;
        let left_brows = min_y(&c.left_eyebrow);
        let right_brows = min_y(&c.right_eyebrow);
        let top_of_brows = left_brows.min(right_brows);
        let clear_brow = self.clear_eyebrow();
        let eye_bottom = c.nose_line[1].y;

        match region {
            RegionName::Forehead => {
                let min_x = c.face_shape.iter().map(|p| p.x).min().unwrap_or(0);
                let max_x = c.face_shape.iter().map(|p| p.x).max().unwrap_or(0);
                PixelBox::new(min_x, min_y(&c.face_shape), max_x, min_y(clear_brow))
            }
            RegionName::LeftEyebrow => PixelBox::new(
                self.left_brow_edge(),
                left_brows,
                self.nose_top_x(),
                max_y(&c.left_eyebrow),
            ),
            RegionName::RightEyebrow => PixelBox::new(
                self.nose_top_x(),
                right_brows,
                self.right_brow_edge(),
                max_y(&c.right_eyebrow),
            ),
            RegionName::BothEyebrow => PixelBox::new(
                self.left_brow_edge(),
                top_of_brows,
                self.right_brow_edge(),
                max_y(&c.left_eyebrow).max(max_y(&c.right_eyebrow)),
            ),
            RegionName::ClearEyebrow => {
                let (x, x2) = self.clear_brow_span();
                PixelBox::new(x, min_y(clear_brow), x2, max_y(clear_brow))
            }
            RegionName::LeftEye => PixelBox::new(
                self.left_eye_edge(),
                (left_brows + min_y(&c.left_eye)) / 2,
                self.nose_top_x(),
                eye_bottom,
            ),
            RegionName::RightEye => PixelBox::new(
                self.nose_top_x(),
                (right_brows + min_y(&c.right_eye)) / 2,
                self.right_eye_edge(),
                eye_bottom,
            ),
            RegionName::BothEye => PixelBox::new(
                self.left_eye_edge(),
                self.clear_eye_top(),
                self.right_eye_edge(),
                eye_bottom,
            ),
            RegionName::ClearEye => {
                let (x, x2) = match self.side {
                    FaceSide::Left => (self.left_eye_edge(), self.nose_top_x()),
                    FaceSide::Right => (self.nose_top_x(), self.right_eye_edge()),
                };
                PixelBox::new(x, self.clear_eye_top(), x2, eye_bottom)
            }
            RegionName::LeftEyeEyebrow => {
                PixelBox::new(self.left_brow_edge(), left_brows, self.nose_top_x(), eye_bottom)
            }
            RegionName::RightEyeEyebrow => {
                PixelBox::new(self.nose_top_x(), right_brows, self.right_brow_edge(), eye_bottom)
            }
            RegionName::BothEyeEyebrow => PixelBox::new(
                self.left_brow_edge(),
                top_of_brows,
                self.right_brow_edge(),
                eye_bottom,
            ),
            RegionName::ClearEyeEyebrow => {
                let (x, x2) = self.clear_brow_span();
                PixelBox::new(x, min_y(clear_brow), x2, eye_bottom)
            }
            RegionName::Nose => PixelBox::new(
                c.left_eye[3].x.min(c.nose_arc[0].x),
                mean_y(clear_brow),
                c.right_eye[0].x.max(c.nose_arc[4].x),
                c.upper_lip[2].y,
            ),
            RegionName::Mouth => PixelBox::new(
                c.face_shape[5].x,
                c.nose_arc[2].y,
                c.face_shape[11].x,
                self.chin_midpoint.y,
            ),
            RegionName::EyeNoseMouthEyebrow => PixelBox::new(
                self.left_brow_edge(),
                top_of_brows,
                self.right_brow_edge(),
                self.chin_midpoint.y,
            ),
        }
    }

    /// Boxes for every selected region, in catalogue order.
    pub fn locate(&self, selection: &RegionSelection) -> BTreeMap<RegionName, PixelBox> {
        selection.iter().map(|r| (r, self.region_box(r))).collect()
    }

    /// Crops every selected region out of `image`. Boxes are clipped first;
    /// degenerate ones yield empty images rather than errors.
    pub fn extract(
        &self,
        image: &DynamicImage,
        selection: &RegionSelection,
    ) -> BTreeMap<RegionName, DynamicImage> {
        self.locate(selection)
            .into_iter()
            .map(|(region, bbox)| {
                let crop = bbox.crop(image);
                if crop.width() == 0 || crop.height() == 0 {
                    log::debug!("Region {region} is empty for box {bbox:?}");
                }
                (region, crop)
            })
            .collect()
    }

    fn clear_eyebrow(&self) -> &[Point] {
        match self.side {
            FaceSide::Left => &self.components.left_eyebrow,
            FaceSide::Right => &self.components.right_eyebrow,
        }
    }

    fn clear_eye(&self) -> &[Point] {
        match self.side {
            FaceSide::Left => &self.components.left_eye,
            FaceSide::Right => &self.components.right_eye,
        }
    }

    fn clear_brow_span(&self) -> (i32, i32) {
        match self.side {
            FaceSide::Left => (self.left_brow_edge(), self.nose_top_x()),
            FaceSide::Right => (self.nose_top_x(), self.right_brow_edge()),
        }
    }

    fn clear_eye_top(&self) -> i32 {
        (min_y(self.clear_eyebrow()) + min_y(self.clear_eye())) / 2
    }

    fn nose_top_x(&self) -> i32 {
        self.components.nose_line[0].x
    }

    fn left_brow_edge(&self) -> i32 {
        (self.components.left_eyebrow[0].x + self.components.face_shape[0].x) / 2
    }

    fn right_brow_edge(&self) -> i32 {
        (self.components.right_eyebrow[4].x + self.components.face_shape[16].x) / 2
    }

    fn left_eye_edge(&self) -> i32 {
        (self.components.left_eye[0].x + self.components.face_shape[0].x) / 2
    }

    fn right_eye_edge(&self) -> i32 {
        (self.components.right_eye[4].x + self.components.face_shape[16].x) / 2
    }
}

fn min_y(points: &[Point]) -> i32 {
    points.iter().map(|p| p.y).min().unwrap_or(0)
}

fn max_y(points: &[Point]) -> i32 {
    points.iter().map(|p| p.y).max().unwrap_or(0)
}

fn mean_y(points: &[Point]) -> i32 {
    if points.is_empty() {
        return 0;
    }
    let sum: i64 = points.iter().map(|p| p.y as i64).sum();
    (sum as f64 / points.len() as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::landmark_set::idx;
    use crate::test_support::{synthetic_face, FACE_IMAGE_SIZE};
    use rstest::rstest;

    fn extractor() -> RegionExtractor {
        RegionExtractor::new(&synthetic_face())
    }

    // ── boxes on a frontal face ──

    #[rstest]
    #[case::forehead(RegionName::Forehead, PixelBox::new(100, 66, 300, 140))]
    #[case::left_eyebrow(RegionName::LeftEyebrow, PixelBox::new(110, 140, 200, 150))]
    #[case::right_eyebrow(RegionName::RightEyebrow, PixelBox::new(200, 140, 290, 150))]
    #[case::both_eyebrow(RegionName::BothEyebrow, PixelBox::new(110, 140, 290, 150))]
    #[case::clear_eyebrow(RegionName::ClearEyebrow, PixelBox::new(200, 140, 290, 150))]
    #[case::left_eye(RegionName::LeftEye, PixelBox::new(116, 152, 200, 175))]
    #[case::right_eye(RegionName::RightEye, PixelBox::new(200, 152, 279, 175))]
    #[case::both_eye(RegionName::BothEye, PixelBox::new(116, 152, 279, 175))]
    #[case::clear_eye(RegionName::ClearEye, PixelBox::new(200, 152, 279, 175))]
    #[case::left_eye_eyebrow(RegionName::LeftEyeEyebrow, PixelBox::new(110, 140, 200, 175))]
    #[case::right_eye_eyebrow(RegionName::RightEyeEyebrow, PixelBox::new(200, 140, 290, 175))]
    #[case::both_eye_eyebrow(RegionName::BothEyeEyebrow, PixelBox::new(110, 140, 290, 175))]
    #[case::clear_eye_eyebrow(RegionName::ClearEyeEyebrow, PixelBox::new(200, 140, 290, 175))]
    #[case::nose(RegionName::Nose, PixelBox::new(164, 144, 236, 258))]
    #[case::mouth(RegionName::Mouth, PixelBox::new(132, 223, 268, 315))]
    #[case::everything(RegionName::EyeNoseMouthEyebrow, PixelBox::new(110, 140, 290, 315))]
    fn test_region_box(#[case] region: RegionName, #[case] expected: PixelBox) {
        assert_eq!(extractor().region_box(region), expected);
    }

    #[test]
    fn test_clear_regions_follow_left_side() {
        // Nose swung right of the right inner eye corner
        let face = synthetic_face().with_point(idx::NOSE_TIP, Point::new(240, 205));
        let e = RegionExtractor::new(&face);
        assert_eq!(e.clear_side(), FaceSide::Left);
        assert_eq!(e.region_box(RegionName::ClearEyebrow), PixelBox::new(110, 140, 200, 150));
        assert_eq!(e.region_box(RegionName::ClearEye), PixelBox::new(116, 152, 200, 175));
    }

    #[test]
    fn test_mouth_uses_chin_midpoint_not_index_68() {
        // Raw index 68 is a forehead point; the box must still end below the lips.
        let face = synthetic_face().with_point(idx::CHIN_MIDPOINT, Point::new(170, 72));
        let b = RegionExtractor::new(&face).region_box(RegionName::Mouth);
        assert_eq!(b.y2, 315);
    }

    // ── extraction ──

    #[test]
    fn test_extract_only_known_requested_regions() {
        let image = DynamicImage::new_rgb8(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE);
        let selection = RegionSelection::parse(["forehead", "unknown_region"]);

        let crops = extractor().extract(&image, &selection);

        assert_eq!(crops.keys().copied().collect::<Vec<_>>(), vec![RegionName::Forehead]);
        let forehead = &crops[&RegionName::Forehead];
        assert_eq!((forehead.width(), forehead.height()), (200, 74));
    }

    #[test]
    fn test_extract_all() {
        let image = DynamicImage::new_rgb8(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE);
        let crops = extractor().extract(&image, &RegionSelection::all());
        assert_eq!(crops.len(), 16);
        assert!(crops.values().all(|c| c.width() > 0 && c.height() > 0));
    }

    #[test]
    fn test_degenerate_box_gives_empty_crop() {
        // Brows below the nose bridge invert the eye-eyebrow boxes
        let mut face = synthetic_face();
        for i in idx::LEFT_EYEBROW {
            let p = face.point(i);
            face = face.with_y(i, p.y + 100);
        }
        let image = DynamicImage::new_rgb8(FACE_IMAGE_SIZE, FACE_IMAGE_SIZE);
        let selection = RegionSelection::parse(["left_eye_eyebrow"]);

        let crops = RegionExtractor::new(&face).extract(&image, &selection);

        assert_eq!(crops[&RegionName::LeftEyeEyebrow].height(), 0);
    }

    #[test]
    fn test_face_near_edge_is_clipped() {
        let image = DynamicImage::new_rgb8(250, 250);
        let crops = extractor().extract(&image, &RegionSelection::parse(["both_eyebrow"]));
        let crop = &crops[&RegionName::BothEyebrow];
        assert_eq!((crop.width(), crop.height()), (140, 10));
    }
}
