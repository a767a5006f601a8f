use serde::Serialize;

use crate::shared::point::Point;

use super::shape::{angle_of_three_points, sum_y_differences};
use super::slope::{abs_slope, slope, sum_slopes};

/// Scalar descriptors of a five-point eyebrow contour, in the predictor's
/// native point order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EyebrowShape {
    /// Angle (degrees) at the middle of points 2-3, between points 1 and 4.
    pub arch_angle: f64,
    /// Signed slope of the tail segment 3→4; 1 when flat or vertical.
    pub tail_slope: f64,
    /// |slope 1→2| + |slope 3→4|; 1 when both are flat.
    pub slope_sum: f64,
    /// Weighted ratio of tail steepness to arch irregularity.
    pub curvature: f64,
    /// Net vertical rise from the first to the last point.
    pub rise: f64,
    /// Sum of absolute consecutive slopes.
    pub total_slope: f64,
}

impl EyebrowShape {
    pub fn from_points(points: &[Point; 5]) -> Self {
        Self {
            arch_angle: arch_angle(points),
            tail_slope: slope(points[3], points[4]).or_one(),
            slope_sum: slope_sum(points),
            curvature: curvature(points),
            rise: sum_y_differences(points),
            total_slope: sum_slopes(points, true),
        }
    }
}

fn arch_angle(points: &[Point; 5]) -> f64 {
    let mid = (
        (points[2].x + points[3].x) as f64 / 2.0,
        (points[2].y + points[3].y) as f64 / 2.0,
    );
    angle_of_three_points(mid, points[1], points[4])
}

fn slope_sum(points: &[Point; 5]) -> f64 {
    let sum = abs_slope(points[1], points[2]).or_zero() + abs_slope(points[3], points[4]).or_zero();
    if sum == 0.0 {
        1.0
    } else {
        sum
    }
}

fn curvature(points: &[Point; 5]) -> f64 {
    let steps: Vec<i32> = points[..4].windows(2).map(|w| w[1].y - w[0].y).collect();
    let irregularity = ((steps[1] - steps[0]).abs() + (steps[2] - steps[1]).abs()) as f64;
    let irregularity = if irregularity == 0.0 { 1.0 } else { irregularity };

    let head = abs_slope(points[0], points[1]).or_one();
    let body = slope(points[2], points[3]).or_one();
    let tail = abs_slope(points[3], points[4]).or_zero();

    let result = tail * (0.5 * body / head) * (5.0 / irregularity);
    if result == 0.0 {
        1.0
    } else {
        result
    }
}
