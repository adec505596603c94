use crate::action::Action;
use crate::coordinates::Position;

/// Owns the drone position and keeps it inside the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionModel {
    position: Position,
    start: Position,
    step_size: u32,
    width: u32,
    height: u32,
}

impl PositionModel {
    /// `width` and `height` are the map dimensions and must be non-zero.
    /// The start is clamped into the map.
    pub fn new(start: (i64, i64), step_size: u32, width: u32, height: u32) -> Self {
        let start = Position::clamped(start.0, start.1, width, height);
        Self {
            position: start,
            start,
            step_size,
            width,
            height,
        }
    }

    pub fn current(&self) -> Position {
        self.position
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn step_size(&self) -> u32 {
        self.step_size
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Moves by `step_size` and saturates at the map border.
    pub fn step(&mut self, action: Action) -> Position {
        let (dx, dy) = action.delta();
        let step = i64::from(self.step_size);
        self.position = Position::clamped(
            i64::from(self.position.x) + dx * step,
            i64::from(self.position.y) + dy * step,
            self.width,
            self.height,
        );
        self.position
    }

    pub fn reset(&mut self) -> Position {
        self.position = self.start;
        self.position
    }

    /// Jumps to an explicit location without touching the configured start.
    pub fn reset_to(&mut self, x: i64, y: i64) -> Position {
        self.position = Position::clamped(x, y, self.width, self.height);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(start: (i64, i64), step: u32) -> PositionModel {
        PositionModel::new(start, step, 100, 100)
    }

    #[test]
    fn moves_in_image_coordinates() {
        let mut m = model((50, 50), 5);
        assert_eq!(m.step(Action::Up), Position::new(50, 45));
        assert_eq!(m.step(Action::Right), Position::new(55, 45));
        assert_eq!(m.step(Action::Down), Position::new(55, 50));
        assert_eq!(m.step(Action::Left), Position::new(50, 50));
    }

    #[test]
    fn right_four_times_from_center() {
        let mut m = model((50, 50), 5);
        for _ in 0..4 {
            m.step(Action::Right);
        }
        assert_eq!(m.current(), Position::new(70, 50));
    }

    #[test]
    fn clamps_at_left_border() {
        let mut m = model((2, 2), 5);
        assert_eq!(m.step(Action::Left), Position::new(0, 2));
    }

    #[test]
    fn huge_step_size_stays_in_bounds() {
        let mut m = PositionModel::new((3, 3), u32::MAX, 7, 5);
        assert_eq!(m.step(Action::Right), Position::new(6, 3));
        assert_eq!(m.step(Action::Down), Position::new(6, 4));
        assert_eq!(m.step(Action::Left), Position::new(0, 4));
        assert_eq!(m.step(Action::Up), Position::new(0, 0));
    }

    #[test]
    fn start_outside_map_is_clamped() {
        let m = PositionModel::new((-20, 500), 1, 10, 10);
        assert_eq!(m.start(), Position::new(0, 9));
    }

    #[test]
    fn reset_is_idempotent_and_restores_start() {
        let mut m = model((10, 20), 3);
        m.step(Action::Down);
        m.reset_to(90, 90);
        assert_eq!(m.reset(), Position::new(10, 20));
        assert_eq!(m.reset(), Position::new(10, 20));
        assert_eq!(m.start(), Position::new(10, 20));
    }

    #[test]
    fn repeated_action_reaches_fixed_point() {
        let mut m = model((37, 61), 5);
        for _ in 0..1000 {
            m.step(Action::Down);
        }
        let pinned = m.current();
        assert_eq!(pinned, Position::new(37, 99));
        assert_eq!(m.step(Action::Down), pinned);
    }
}
