use crate::action::Action;
use crate::bgr::BgrImage;
use crate::config::SimulatorConfig;
use crate::coordinates::{FovSpec, Position};
use crate::error::{ActionError, ConfigError};
use crate::geometry::{Rect, fov_rect};
use crate::observation::{BorderMode, extract};
use crate::overlay::draw_drone_overlay;
use crate::position::PositionModel;
use log::{debug, trace};
use std::sync::Arc;

/// One drone over one immutable map.
///
/// The map sits behind an `Arc`, so several simulators can fly over the same
/// image while each keeps its own position.
#[derive(Debug, Clone)]
pub struct Simulator {
    map: Arc<BgrImage>,
    position: PositionModel,
    fov: FovSpec,
    border_mode: BorderMode,
}

impl Simulator {
    /// Validates `config` and places the drone at the configured start, or
    /// the map centre. Resizing is the loader's job; the map is used as is.
    pub fn configure(
        map: impl Into<Arc<BgrImage>>,
        config: &SimulatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let map = map.into();
        let (width, height) = (map.width(), map.height());
        let start = config
            .start
            .unwrap_or((i64::from(width / 2), i64::from(height / 2)));
        let position = PositionModel::new(start, config.step_size, width, height);
        if config.start.is_some() && (position.start().x as i64, position.start().y as i64) != start {
            debug!(
                "start {:?} lies outside the {}x{} map, clamped to {:?}",
                start,
                width,
                height,
                position.start()
            );
        }
        debug!(
            "simulator ready: map {}x{}, fov {}x{}, step {}, border {}, start {:?}",
            width,
            height,
            config.fov_width,
            config.fov_height,
            config.step_size,
            config.border_mode,
            position.start()
        );

        Ok(Self {
            map,
            position,
            fov: config.fov(),
            border_mode: config.border_mode,
        })
    }

    pub fn step(&mut self, action: Action) -> Position {
        let position = self.position.step(action);
        trace!("{action} -> ({}, {})", position.x, position.y);
        position
    }

    /// Integer-convention entry point (`0=up 1=right 2=down 3=left`). An
    /// unknown index leaves the position untouched.
    pub fn step_index(&mut self, index: i64) -> Result<Position, ActionError> {
        let action = Action::try_from(index)?;
        Ok(self.step(action))
    }

    /// Applies `actions` in order and returns the position after each one.
    pub fn run(&mut self, actions: &[Action]) -> Vec<Position> {
        actions.iter().map(|&action| self.step(action)).collect()
    }

    pub fn reset(&mut self) -> Position {
        self.position.reset()
    }

    pub fn reset_to(&mut self, x: i64, y: i64) -> Position {
        self.position.reset_to(x, y)
    }

    pub fn current_position(&self) -> Position {
        self.position.current()
    }

    pub fn observation(&self) -> BgrImage {
        extract(
            &self.map,
            self.position.current(),
            self.fov,
            self.border_mode,
        )
    }

    /// The unclipped FOV window, identical to the region `observation` reads.
    pub fn overlay_rectangle(&self) -> Rect {
        fov_rect(self.position.current(), self.fov)
    }

    /// Copy of the map with the drone marker and FOV box drawn on it.
    pub fn overlay_frame(&self) -> BgrImage {
        draw_drone_overlay(&self.map, self.position.current(), self.fov)
    }

    pub fn map(&self) -> &Arc<BgrImage> {
        &self.map
    }

    pub fn fov(&self) -> FovSpec {
        self.fov
    }

    pub fn border_mode(&self) -> BorderMode {
        self.border_mode
    }

    pub fn step_size(&self) -> u32 {
        self.position.step_size()
    }
}
