pub mod args;
pub mod config_file;
pub mod error;
#[cfg(feature = "loader")]
pub mod map_source;
#[cfg(feature = "loader")]
pub mod record;
#[cfg(feature = "loader")]
pub mod session;

pub use args::MapArgs;
pub use config_file::{load_config, save_config};
pub use error::LoadError;
#[cfg(feature = "loader")]
pub use map_source::{from_dynamic, load_map, save_bgr};
#[cfg(feature = "loader")]
pub use record::{Trajectory, TrajectoryStep, record_session};
#[cfg(feature = "loader")]
pub use session::open_simulator;
