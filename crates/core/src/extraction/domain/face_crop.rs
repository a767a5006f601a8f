use serde::{Deserialize, Serialize};

use crate::shared::constants::DEFAULT_CROP_PADDING;
use crate::shared::landmark_set::LandmarkSet;
use crate::shared::pixel_box::PixelBox;

/// Extra margin around the landmark box as shares of the image size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropPadding {
    pub x: f64,
    pub y: f64,
}

impl Default for CropPadding {
    fn default() -> Self {
        Self {
            x: DEFAULT_CROP_PADDING,
            y: DEFAULT_CROP_PADDING,
        }
    }
}

/// Whole-face box around all landmarks.
pub struct FaceCrop;

impl FaceCrop {
    /// Landmark bounds without padding. Not clipped.
    pub fn tight(landmarks: &LandmarkSet) -> PixelBox {
        let (x, y, x2, y2) = landmarks.bounds();
        PixelBox::new(x, y, x2, y2)
    }

    /// Landmark bounds grown by the padding shares of `width`/`height`,
    /// clipped to the image.
    pub fn locate(
        landmarks: &LandmarkSet,
        width: u32,
        height: u32,
        padding: CropPadding,
    ) -> PixelBox {
        let x_pad = (padding.x * width as f64) as i32;
        let y_pad = (padding.y * height as f64) as i32;
        let tight = Self::tight(landmarks);
        PixelBox::new(
            tight.x - x_pad,
            tight.y - y_pad,
            tight.x2 + x_pad,
            tight.y2 + y_pad,
        )
        .clamped(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_face;

    #[test]
    fn test_tight_box_spans_landmarks() {
        assert_eq!(FaceCrop::tight(&synthetic_face()), PixelBox::new(100, 60, 300, 340));
    }

    #[test]
    fn test_default_padding() {
        // 0.025 * 400 = 10
        let b = FaceCrop::locate(&synthetic_face(), 400, 400, CropPadding::default());
        assert_eq!(b, PixelBox::new(90, 50, 310, 350));
    }

    #[test]
    fn test_padding_uses_own_axis() {
        let padding = CropPadding { x: 0.1, y: 0.0 };
        let b = FaceCrop::locate(&synthetic_face(), 400, 1000, padding);
        assert_eq!(b, PixelBox::new(60, 60, 340, 340));
    }

    #[test]
    fn test_padding_clipped_to_image() {
        let padding = CropPadding { x: 0.5, y: 0.5 };
        let b = FaceCrop::locate(&synthetic_face(), 400, 400, padding);
        assert_eq!(b, PixelBox::new(0, 0, 400, 400));
    }

    #[test]
    fn test_padding_deserializes_with_defaults() {
        let p: CropPadding = serde_json::from_str(r#"{"x": 0.1}"#).unwrap();
        assert_eq!(p, CropPadding { x: 0.1, y: 0.025 });
    }
}
