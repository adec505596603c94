use crate::coordinates::{FovSpec, Position};
use serde::{Deserialize, Serialize};

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`. Coordinates are signed
/// because a FOV window near the border extends past the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i64 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(&self) -> i64 {
        (self.y1 - self.y0).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Intersection with the map area `[0, width) x [0, height)`.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Rect> {
        let clipped = Rect {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(i64::from(width)),
            y1: self.y1.min(i64::from(height)),
        };
        (!clipped.is_empty()).then_some(clipped)
    }

    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x0 >= 0 && self.y0 >= 0 && self.x1 <= i64::from(width) && self.y1 <= i64::from(height)
    }

    pub fn as_tuple(&self) -> (i64, i64, i64, i64) {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

/// The FOV window centred on `center`.
///
/// The lower bound is `center - size / 2` (floor) and the upper bound is
/// `lower + size`, so an even-sized window puts its extra pixel on the
/// right/bottom side of the center. The extractor and every overlay renderer
/// go through this function so the drawn box and the crop never disagree.
pub fn fov_rect(center: Position, fov: FovSpec) -> Rect {
    let x0 = i64::from(center.x) - i64::from(fov.width / 2);
    let y0 = i64::from(center.y) - i64::from(fov.height / 2);
    Rect {
        x0,
        y0,
        x1: x0 + i64::from(fov.width),
        y1: y0 + i64::from(fov.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_window_puts_extra_pixel_after_center() {
        let rect = fov_rect(Position::new(50, 50), FovSpec::square(10));
        assert_eq!(rect.as_tuple(), (45, 45, 55, 55));
        assert_eq!(rect.width(), 10);
    }

    #[test]
    fn odd_window_is_symmetric() {
        let rect = fov_rect(Position::new(5, 8), FovSpec::new(3, 5));
        assert_eq!(rect.as_tuple(), (4, 6, 7, 11));
    }

    #[test]
    fn clip_keeps_interior_part() {
        let rect = fov_rect(Position::new(2, 2), FovSpec::square(10));
        assert_eq!(rect.as_tuple(), (-3, -3, 7, 7));
        assert_eq!(rect.clip_to(100, 100), Some(Rect::new(0, 0, 7, 7)));
        assert!(!rect.is_within(100, 100));
    }

    #[test]
    fn clip_outside_map_is_none() {
        let rect = Rect::new(-10, -10, 0, 5);
        assert_eq!(rect.clip_to(4, 4), None);
    }
}
