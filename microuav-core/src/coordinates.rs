use serde::{Deserialize, Serialize};

/// Pixel location of the drone on the map. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Clamps signed coordinates into `[0, width) x [0, height)`.
    /// Both dimensions must be non-zero.
    pub fn clamped(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x: x.clamp(0, i64::from(width) - 1) as u32,
            y: y.clamp(0, i64::from(height) - 1) as u32,
        }
    }
}

/// Width and height of the observation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FovSpec {
    pub width: u32,
    pub height: u32,
}

impl FovSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_saturates_each_axis_independently() {
        assert_eq!(Position::clamped(-4, 7, 10, 5), Position::new(0, 4));
        assert_eq!(Position::clamped(i64::MAX, i64::MIN, 10, 5), Position::new(9, 0));
        assert_eq!(Position::clamped(3, 2, 10, 5), Position::new(3, 2));
    }
}
