use crate::config_file::load_config;
use crate::error::LoadError;
use clap::Args;
use microuav_core::{BorderMode, SimulatorConfig};
use std::path::PathBuf;

/// Map and simulator flags shared by the recorder and the viewer.
///
/// A `--config` file is the base; every flag given on the command line
/// overrides the matching field.
#[derive(Args, Debug, Clone)]
pub struct MapArgs {
    /// Path to the overhead map image (png/jpg)
    #[arg(long)]
    pub map: PathBuf,

    /// JSON simulator config used as the base for the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Square FOV size (default 128)
    #[arg(long)]
    pub fov: Option<u32>,

    /// Rectangular FOV width, overrides --fov
    #[arg(long)]
    pub fov_w: Option<u32>,

    /// Rectangular FOV height, overrides --fov
    #[arg(long)]
    pub fov_h: Option<u32>,

    /// Step size in pixels (default 8)
    #[arg(long)]
    pub step: Option<u32>,

    /// Border handling for the crop
    #[arg(long, value_name = "pad|clamp")]
    pub border: Option<BorderMode>,

    /// Resize the map to this height; needs --resize-w
    #[arg(long)]
    pub resize_h: Option<u32>,

    /// Resize the map to this width; needs --resize-h
    #[arg(long)]
    pub resize_w: Option<u32>,

    /// Start column (map centre when absent)
    #[arg(long, requires = "start_y", allow_negative_numbers = true)]
    pub start_x: Option<i64>,

    /// Start row (map centre when absent)
    #[arg(long, requires = "start_x", allow_negative_numbers = true)]
    pub start_y: Option<i64>,
}

impl MapArgs {
    pub fn resolve_config(&self) -> Result<SimulatorConfig, LoadError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimulatorConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut SimulatorConfig) {
        if let Some(size) = self.fov {
            config.fov_width = size;
            config.fov_height = size;
        }
        if let Some(width) = self.fov_w {
            config.fov_width = width;
        }
        if let Some(height) = self.fov_h {
            config.fov_height = height;
        }
        if let Some(step) = self.step {
            config.step_size = step;
        }
        if let Some(border) = self.border {
            config.border_mode = border;
        }
        if self.resize_h.is_some() || self.resize_w.is_some() {
            config.resize_height = self.resize_h;
            config.resize_width = self.resize_w;
        }
        if let (Some(x), Some(y)) = (self.start_x, self.start_y) {
            config.start = Some((x, y));
        }
    }
}
