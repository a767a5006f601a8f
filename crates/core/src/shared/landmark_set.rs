//! Typed view over the 81-point facial landmark layout.
//!
//! Points 0-67 come from the 68-point predictor (jaw, brows, nose, eyes,
//! mouth); 68-80 come from the 81-point predictor (forehead and hairline).
//! All components address points positionally through [`idx`].

use std::ops::Range;

use thiserror::Error;

use super::constants::{BASE_LANDMARK_COUNT, LANDMARK_COUNT};
use super::point::Point;

/// Fixed semantic indices into the 81-point layout.
pub mod idx {
    use std::ops::Range;

    pub const JAW: Range<usize> = 0..17;
    pub const LEFT_EYEBROW: Range<usize> = 17..22;
    pub const RIGHT_EYEBROW: Range<usize> = 22..27;
    pub const NOSE_BRIDGE: Range<usize> = 27..31;
    pub const NOSE_BASE: Range<usize> = 31..36;
    pub const LEFT_EYE: Range<usize> = 36..42;
    pub const RIGHT_EYE: Range<usize> = 42..48;
    pub const MOUTH: Range<usize> = 48..68;
    pub const FOREHEAD: Range<usize> = 68..81;

    pub const CHIN: usize = 8;
    pub const LEFT_EYEBROW_INNER: usize = 21;
    pub const RIGHT_EYEBROW_INNER: usize = 22;
    pub const RIGHT_EYEBROW_PEAK: usize = 23;
    pub const NOSE_BRIDGE_UPPER: usize = 28;
    pub const NOSE_TIP: usize = 30;
    pub const LOWER_LIP_BOTTOM: usize = 57;

    /// Synthetic chin midpoint (between lower lip and chin) after correction;
    /// the raw predictor's top forehead point before it.
    pub const CHIN_MIDPOINT: usize = 68;
    pub const FOREHEAD_LEFT: usize = 69;
    pub const FOREHEAD_LEFT_INNER: usize = 70;
    pub const FOREHEAD_TOP: usize = 71;
    /// Synthetic forehead centre, computed after the walk.
    pub const FOREHEAD_CENTER: usize = 72;
    pub const FOREHEAD_RIGHT: usize = 73;
    pub const FOREHEAD_RIGHT_EDGE: usize = 74;
    pub const HAIRLINE_LEFT: usize = 76;
    pub const HAIRLINE_RIGHT: usize = 79;
    pub const FOREHEAD_RIGHT_INNER: usize = 80;

    /// Outline order of the forehead points, right temple to left temple.
    pub const FOREHEAD_OUTLINE: [usize; 11] = [78, 74, 79, 73, 80, 71, 70, 69, 76, 75, 77];

    /// The five points moved by the forehead walk: outer left, inner left,
    /// top, outer right, inner right.
    pub const WALKED: [usize; 5] = [
        FOREHEAD_LEFT,
        FOREHEAD_LEFT_INNER,
        FOREHEAD_TOP,
        FOREHEAD_RIGHT,
        FOREHEAD_RIGHT_INNER,
    ];
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("expected {expected} landmarks, got {actual}")]
    WrongPointCount { expected: usize, actual: usize },
    #[error("{predictor}-point prediction has only {actual} points")]
    PredictionTooShort { predictor: usize, actual: usize },
}

/// Exactly 81 landmarks in the fixed semantic order.
///
/// Snapshots are immutable; corrections produce a new set through
/// [`LandmarkSet::with_point`] and friends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongPointCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Combines the jaw/brow/eye/nose/mouth points of the 68-point
    /// predictor with the forehead points of the 81-point predictor.
    pub fn from_predictions(base: &[Point], extended: &[Point]) -> Result<Self, LandmarkError> {
        if base.len() < BASE_LANDMARK_COUNT {
            return Err(LandmarkError::PredictionTooShort {
                predictor: BASE_LANDMARK_COUNT,
                actual: base.len(),
            });
        }
        if extended.len() < LANDMARK_COUNT {
            return Err(LandmarkError::PredictionTooShort {
                predictor: LANDMARK_COUNT,
                actual: extended.len(),
            });
        }
        let mut points = Vec::with_capacity(LANDMARK_COUNT);
        points.extend_from_slice(&base[..BASE_LANDMARK_COUNT]);
        points.extend_from_slice(&extended[BASE_LANDMARK_COUNT..LANDMARK_COUNT]);
        Self::new(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn with_point(mut self, index: usize, point: Point) -> Self {
        self.points[index] = point;
        self
    }

    pub fn with_y(self, index: usize, y: i32) -> Self {
        let p = self.points[index].with_y(y);
        self.with_point(index, p)
    }

    pub fn select<const N: usize>(&self, indices: [usize; N]) -> [Point; N] {
        indices.map(|i| self.points[i])
    }

    pub fn jaw(&self) -> &[Point] {
        self.range(idx::JAW)
    }

    pub fn left_eyebrow(&self) -> &[Point] {
        self.range(idx::LEFT_EYEBROW)
    }

    pub fn right_eyebrow(&self) -> &[Point] {
        self.range(idx::RIGHT_EYEBROW)
    }

    pub fn nose_bridge(&self) -> &[Point] {
        self.range(idx::NOSE_BRIDGE)
    }

    pub fn nose_base(&self) -> &[Point] {
        self.range(idx::NOSE_BASE)
    }

    pub fn left_eye(&self) -> &[Point] {
        self.range(idx::LEFT_EYE)
    }

    pub fn right_eye(&self) -> &[Point] {
        self.range(idx::RIGHT_EYE)
    }

    pub fn mouth(&self) -> &[Point] {
        self.range(idx::MOUTH)
    }

    pub fn forehead(&self) -> &[Point] {
        self.range(idx::FOREHEAD)
    }

    /// Point halfway between the lower-lip bottom and the chin, on the
    /// chin's column. Jaw landmarks give a cleaner lower crop bound than
    /// the lip contour.
    pub fn chin_midpoint(&self) -> Point {
        let chin = self.points[idx::CHIN];
        let lip = self.points[idx::LOWER_LIP_BOTTOM];
        let half = (chin.y - lip.y) / 2;
        Point::new(chin.x, chin.y - half)
    }

    /// `(min_x, min_y, max_x, max_y)` over all landmarks.
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        self.points.iter().fold(
            (i32::MAX, i32::MAX, i32::MIN, i32::MIN),
            |(x1, y1, x2, y2), p| (x1.min(p.x), y1.min(p.y), x2.max(p.x), y2.max(p.y)),
        )
    }

    fn range(&self, r: Range<usize>) -> &[Point] {
        &self.points[r]
    }
}
