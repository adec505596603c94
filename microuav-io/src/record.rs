use crate::error::LoadError;
use crate::map_source::save_bgr;
use log::{debug, info};
use microuav_core::{Action, BorderMode, FovSpec, Position, Rect, Simulator, side_by_side, upscale_nearest};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const TRAJECTORY_FILE: &str = "trajectory.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    pub frame: usize,
    pub action: Option<Action>,
    pub position: Position,
    pub overlay: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub fov: FovSpec,
    pub border_mode: BorderMode,
    pub step_size: u32,
    pub steps: Vec<TrajectoryStep>,
}

/// Replays `actions` and writes, for the initial state and after every
/// action, `obs_NNNN.png` (the raw observation) and `frame_NNNN.png` (map
/// with overlay beside the observation upscaled by `scale`). The trajectory
/// is written to `trajectory.json` and returned.
pub fn record_session(
    simulator: &mut Simulator,
    actions: &[Action],
    out_dir: &Path,
    scale: u32,
) -> Result<Trajectory, LoadError> {
    fs::create_dir_all(out_dir)?;

    let mut steps = Vec::with_capacity(actions.len() + 1);
    steps.push(write_frame(simulator, out_dir, 0, None, scale)?);
    for (index, &action) in actions.iter().enumerate() {
        simulator.step(action);
        steps.push(write_frame(simulator, out_dir, index + 1, Some(action), scale)?);
    }

    let trajectory = Trajectory {
        fov: simulator.fov(),
        border_mode: simulator.border_mode(),
        step_size: simulator.step_size(),
        steps,
    };
    fs::write(
        out_dir.join(TRAJECTORY_FILE),
        serde_json::to_string_pretty(&trajectory)?,
    )?;
    info!(
        "recorded {} frames to {}",
        trajectory.steps.len(),
        out_dir.display()
    );
    Ok(trajectory)
}

fn write_frame(
    simulator: &Simulator,
    out_dir: &Path,
    frame: usize,
    action: Option<Action>,
    scale: u32,
) -> Result<TrajectoryStep, LoadError> {
    let observation = simulator.observation();
    let view = side_by_side(
        &simulator.overlay_frame(),
        &upscale_nearest(&observation, scale),
    );
    save_bgr(&observation, &out_dir.join(format!("obs_{frame:04}.png")))?;
    save_bgr(&view, &out_dir.join(format!("frame_{frame:04}.png")))?;

    let position = simulator.current_position();
    debug!("frame {frame}: ({}, {})", position.x, position.y);
    Ok(TrajectoryStep {
        frame,
        action,
        position,
        overlay: simulator.overlay_rectangle(),
    })
}
