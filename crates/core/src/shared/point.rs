use serde::{Deserialize, Serialize};

/// Integer pixel coordinate as delivered by the landmark predictor.
///
/// Serialized as a two-element `[x, y]` array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn with_y(self, y: i32) -> Self {
        Self { x: self.x, y }
    }

    pub const fn with_x(self, x: i32) -> Self {
        Self { x, y: self.y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_y_keeps_x() {
        let p = Point::new(12, 40).with_y(7);
        assert_eq!(p, Point::new(12, 7));
    }

    #[test]
    fn test_with_x_keeps_y() {
        let p = Point::new(12, 40).with_x(3);
        assert_eq!(p, Point::new(3, 40));
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(5, -2)).unwrap();
        assert_eq!(json, "[5,-2]");
        let back: Point = serde_json::from_str("[7,9]").unwrap();
        assert_eq!(back, Point::new(7, 9));
    }
}
