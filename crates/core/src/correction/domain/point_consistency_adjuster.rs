use crate::geometry::slope::abs_slope;
use crate::shared::constants::{SLOPE_DIFFERENCE_THRESHOLD, SLOPE_SUM_THRESHOLD};
use crate::shared::point::Point;

const LEFT: usize = 0;
const LEFT_CRITICAL: usize = 1;
const CENTER: usize = 2;
const RIGHT: usize = 3;
const RIGHT_CRITICAL: usize = 4;

/// Rewrites the y of implausible walked points in
/// `[left, left_inner, top, right, right_inner]` order.
#[derive(Clone, Copy, Debug)]
pub struct PointConsistencyAdjuster {
    slope_difference_threshold: f64,
    slope_sum_threshold: f64,
}

impl PointConsistencyAdjuster {
    pub fn new(slope_difference_threshold: f64, slope_sum_threshold: f64) -> Self {
        Self {
            slope_difference_threshold,
            slope_sum_threshold,
        }
    }

    pub fn adjust(&self, points: [Point; 5], left_side: Point, right_side: Point) -> [Point; 5] {
        let mut y = points.map(|p| p.y);

        // Outer points may not sit above their inner neighbours.
        if y[LEFT] < y[LEFT_CRITICAL] {
            y[LEFT] = mean(y[LEFT_CRITICAL], left_side.y);
            log::debug!("Forehead left point above its neighbour, moved to {}", y[LEFT]);
        }
        if y[RIGHT] < y[RIGHT_CRITICAL] {
            y[RIGHT] = mean(y[RIGHT_CRITICAL], right_side.y);
            log::debug!("Forehead right point above its neighbour, moved to {}", y[RIGHT]);
        }

        let at = |y: &[i32; 5], i: usize| points[i].with_y(y[i]);
        let slopes = [
            abs_slope(at(&y, LEFT_CRITICAL), at(&y, CENTER)).or_zero(),
            abs_slope(at(&y, CENTER), at(&y, RIGHT_CRITICAL)).or_zero(),
        ];

        if (slopes[1] - slopes[0]).abs() > self.slope_difference_threshold {
            // Ties resolve to the first slope.
            if slopes[0] >= slopes[1] {
                y[LEFT_CRITICAL] = y[RIGHT_CRITICAL].max(y[CENTER]);
            } else {
                y[RIGHT_CRITICAL] = y[LEFT_CRITICAL].max(y[CENTER]);
            }
            log::debug!("Forehead slopes {slopes:?} differ too much, flattened steeper side");
        }

        if slopes[0] + slopes[1] > self.slope_sum_threshold {
            y[LEFT_CRITICAL] = mean(y[RIGHT_CRITICAL], y[CENTER]);
            y[RIGHT_CRITICAL] = mean(y[LEFT_CRITICAL], y[CENTER]);
            y[CENTER] = mean(y[RIGHT_CRITICAL], y[LEFT_CRITICAL]);
            log::debug!("Forehead slopes {slopes:?} too steep, symmetrised centre");
        }

        let mut out = points;
        for (p, y) in out.iter_mut().zip(y) {
            p.y = y;
        }
        out
    }
}

impl Default for PointConsistencyAdjuster {
    fn default() -> Self {
        Self::new(SLOPE_DIFFERENCE_THRESHOLD, SLOPE_SUM_THRESHOLD)
    }
}

fn mean(a: i32, b: i32) -> i32 {
    (a + b) / 2
}
