use crate::shared::point::Point;

/// Slope between two landmarks, with a sentinel for vertical segments.
///
/// Finite values are rounded to three decimals so that heuristics comparing
/// slopes against fixed thresholds are stable under sub-pixel noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    Infinite,
}

impl Slope {
    pub fn abs(self) -> Slope {
        match self {
            Slope::Finite(v) => Slope::Finite(v.abs()),
            Slope::Infinite => Slope::Infinite,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Slope::Infinite)
    }

    pub fn finite(self) -> Option<f64> {
        match self {
            Slope::Finite(v) => Some(v),
            Slope::Infinite => None,
        }
    }

    /// Value for additive use: an infinite slope contributes nothing.
    pub fn or_zero(self) -> f64 {
        self.finite().unwrap_or(0.0)
    }

    /// Value for multiplicative use: infinite and zero slopes become 1.
    pub fn or_one(self) -> f64 {
        match self {
            Slope::Finite(v) if v != 0.0 => v,
            _ => 1.0,
        }
    }
}

pub fn slope(p1: Point, p2: Point) -> Slope {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == 0 {
        return Slope::Infinite;
    }
    Slope::Finite(round3(dy as f64 / dx as f64))
}

pub fn abs_slope(p1: Point, p2: Point) -> Slope {
    slope(p1, p2).abs()
}

/// Sum of consecutive slopes along `points`, skipping vertical segments.
pub fn sum_slopes(points: &[Point], absolute: bool) -> f64 {
    let total: f64 = points
        .windows(2)
        .map(|w| {
            let s = slope(w[0], w[1]);
            if absolute {
                s.abs().or_zero()
            } else {
                s.or_zero()
            }
        })
        .sum();
    round3(total)
}

pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
