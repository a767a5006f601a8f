/// Number of points in the combined jaw/brow/eye/nose/mouth + forehead layout.
pub const LANDMARK_COUNT: usize = 81;

/// Number of points supplied by the 68-point predictor.
pub const BASE_LANDMARK_COUNT: usize = 68;

/// Vertical pixels per step of the forehead walk.
pub const WALK_STRIDE: i32 = 5;

/// Fallback lift as a fraction of the point's original y.
pub const WALK_FALLBACK_RATIO: f64 = 0.275;

/// Largest accepted walk excursion as a fraction of the forehead height.
pub const WALK_MAX_EXCURSION_RATIO: f64 = 0.75;

/// Fraction of forehead pixels that must fall inside the skin band.
pub const CLARITY_THRESHOLD: f64 = 0.85;

/// Forehead contours whose side slopes differ by more than this are corrupt.
pub const SLOPE_DIFFERENCE_THRESHOLD: f64 = 0.4;

/// Forehead contours whose side slopes sum to more than this are corrupt.
pub const SLOPE_SUM_THRESHOLD: f64 = 1.0;

/// Simple correction lifts, as fractions of the forehead height.
pub const SIMPLE_LIFT_OUTER: f64 = 0.2;
pub const SIMPLE_LIFT_CENTER: f64 = 0.3;

/// Horizontal margin added on both sides of the forehead window.
pub const FOREHEAD_MARGIN: i32 = 10;

/// Half-width of the nose-bridge strip sampled for the first skin estimate.
pub const NOSE_SAMPLE_HALF_WIDTH: i32 = 5;

/// Leftward shift of landmark 74 as a fraction of the forehead height.
pub const FOREHEAD_EDGE_SHIFT_RATIO: f64 = 0.1;

/// Clear-side decisions within this many pixels default to the right side.
pub const CLEAR_SIDE_TOLERANCE: i32 = 1;

/// Default padding proportions for the whole-face crop.
pub const DEFAULT_CROP_PADDING: f64 = 0.025;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
