use microuav_core::{ActionError, ConfigError, MapError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("map image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[cfg(feature = "loader")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid map: {0}")]
    Map(#[from] MapError),

    #[error("invalid action: {0}")]
    Action(#[from] ActionError),
}
