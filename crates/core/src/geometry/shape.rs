use crate::shared::point::Point;

use super::slope::round3;

/// Shoelace area of a polygon.
///
/// `closed` means the first point is already repeated at the end; otherwise
/// the closing edge is added here.
pub fn polygon_area(points: &[Point], closed: bool) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let cross = |a: Point, b: Point| a.x as f64 * b.y as f64 - a.y as f64 * b.x as f64;

    let mut twice: f64 = points.windows(2).map(|w| cross(w[0], w[1])).sum();
    if !closed {
        twice += cross(points[points.len() - 1], points[0]);
    }
    (twice / 2.0).abs()
}

/// Unsigned angle in degrees at `vertex` between the rays to `a` and `b`.
pub fn angle_of_three_points(vertex: (f64, f64), a: Point, b: Point) -> f64 {
    let to_b = (b.y as f64 - vertex.1).atan2(b.x as f64 - vertex.0);
    let to_a = (a.y as f64 - vertex.1).atan2(a.x as f64 - vertex.0);
    (to_b - to_a).abs().to_degrees()
}

/// `p1.y - p2.y`: positive when `p1` lies lower in the image.
pub fn y_difference(p1: Point, p2: Point) -> f64 {
    round3((p1.y - p2.y) as f64)
}

/// Sum of consecutive y-differences along `points`.
pub fn sum_y_differences(points: &[Point]) -> f64 {
    let total: f64 = points.windows(2).map(|w| y_difference(w[0], w[1])).sum();
    round3(total)
}

/// Mean of four eyelid points.
pub fn eye_center(points: &[Point; 4]) -> (f64, f64) {
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
    (sx / 4.0, sy / 4.0)
}
