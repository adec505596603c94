pub mod action;
pub mod bgr;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod geometry;
pub mod observation;
pub mod overlay;
pub mod position;
pub mod simulator;

pub use action::{Action, parse_actions};
pub use bgr::{Bgr, BgrImage, CHANNELS};
pub use config::{DEFAULT_FOV, DEFAULT_STEP_SIZE, SimulatorConfig};
pub use coordinates::{FovSpec, Position};
pub use error::{ActionError, ConfigError, MapError};
pub use geometry::{Rect, fov_rect};
pub use observation::{BorderMode, extract};
pub use overlay::{MAX_UPSCALE, draw_drone_overlay, side_by_side, upscale_nearest};
pub use position::PositionModel;
pub use simulator::Simulator;
