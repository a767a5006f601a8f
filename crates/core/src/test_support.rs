use crate::shared::landmark_set::LandmarkSet;
use crate::shared::point::Point;

pub const FACE_IMAGE_SIZE: u32 = 400;

/// A frontal, symmetric face on a 400x400 canvas in the 81-point layout.
pub fn synthetic_points() -> Vec<Point> {
    let coords: [(i32, i32); 81] = [
        // jaw 0-16
        (100, 180),
        (102, 205),
        (106, 230),
        (112, 255),
        (120, 278),
        (132, 300),
        (148, 318),
        (168, 332),
        (200, 340),
        (232, 332),
        (252, 318),
        (268, 300),
        (280, 278),
        (288, 255),
        (294, 230),
        (298, 205),
        (300, 180),
        // left eyebrow 17-21
        (120, 150),
        (132, 142),
        (146, 140),
        (160, 142),
        (172, 148),
        // right eyebrow 22-26
        (228, 148),
        (240, 142),
        (254, 140),
        (268, 142),
        (280, 150),
        // nose bridge 27-30
        (200, 160),
        (200, 175),
        (200, 190),
        (200, 205),
        // nose base 31-35
        (184, 218),
        (192, 221),
        (200, 223),
        (208, 221),
        (216, 218),
        // left eye 36-41
        (132, 170),
        (142, 164),
        (154, 164),
        (164, 170),
        (154, 174),
        (142, 174),
        // right eye 42-47
        (236, 170),
        (246, 164),
        (258, 164),
        (268, 170),
        (258, 174),
        (246, 174),
        // outer lip 48-59
        (170, 270),
        (180, 262),
        (192, 258),
        (200, 260),
        (208, 258),
        (220, 262),
        (230, 270),
        (220, 282),
        (208, 288),
        (200, 290),
        (192, 288),
        (180, 282),
        // inner lip 60-67
        (176, 270),
        (192, 266),
        (200, 267),
        (208, 266),
        (224, 270),
        (208, 276),
        (200, 277),
        (192, 276),
        // forehead 68-80
        (170, 72),
        (135, 80),
        (160, 70),
        (200, 66),
        (200, 60),
        (265, 80),
        (292, 120),
        (108, 120),
        (118, 95),
        (104, 150),
        (296, 150),
        (282, 95),
        (240, 70),
    ];
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub fn synthetic_face() -> LandmarkSet {
    LandmarkSet::new(synthetic_points()).expect("fixture has 81 points")
}
