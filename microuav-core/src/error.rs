use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("fov width and height must be positive, got {width}x{height}")]
    InvalidFov { width: u32, height: u32 },

    #[error("step size must be positive")]
    InvalidStepSize,

    #[error("unsupported border mode `{0}`, expected `pad` or `clamp`")]
    UnknownBorderMode(String),

    #[error("provide both resize height and resize width, or neither")]
    PartialResize,

    #[error("resize dimensions must be positive, got {height}x{width}")]
    InvalidResize { height: u32, width: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    EmptyMap { width: u32, height: u32 },

    #[error("map buffer holds {actual} bytes, expected {expected} for a 3-channel image")]
    BufferSize { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unknown action index {0}, expected 0=up 1=right 2=down 3=left")]
    Unknown(i64),

    #[error("unknown action key `{0}`")]
    UnknownKey(char),
}
