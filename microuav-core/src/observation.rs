//! Field-of-view extraction.
//!
//! An observation is the window returned by [`fov_rect`] cut out of the map.
//! Where the window leaves the map, [`BorderMode`] decides between a
//! fixed-shape zero-padded crop and a crop that shrinks to the visible part.

use crate::bgr::{BgrImage, CHANNELS};
use crate::coordinates::{FovSpec, Position};
use crate::error::ConfigError;
use crate::geometry::fov_rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Always `fov_h x fov_w`; off-map pixels are black.
    #[default]
    Pad,
    /// Only the on-map part of the window; shrinks near the border.
    Clamp,
}

impl BorderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderMode::Pad => "pad",
            BorderMode::Clamp => "clamp",
        }
    }
}

impl fmt::Display for BorderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pad" => Ok(BorderMode::Pad),
            "clamp" => Ok(BorderMode::Clamp),
            _ => Err(ConfigError::UnknownBorderMode(s.to_string())),
        }
    }
}

/// Cuts the observation centred on `position` out of `map`.
///
/// Total for every position inside the map: the centre pixel is always part
/// of the window, so the visible region is never empty. Channel order is
/// whatever the map uses.
pub fn extract(map: &BgrImage, position: Position, fov: FovSpec, mode: BorderMode) -> BgrImage {
    let rect = fov_rect(position, fov);
    let Some(visible) = rect.clip_to(map.width(), map.height()) else {
        return match mode {
            BorderMode::Pad => BgrImage::zeroed(fov.width, fov.height),
            BorderMode::Clamp => BgrImage::zeroed(0, 0),
        };
    };

    let crop = map.sub_image(
        visible.x0 as u32,
        visible.y0 as u32,
        visible.x1 as u32,
        visible.y1 as u32,
    );
    if mode == BorderMode::Clamp || visible == rect {
        return crop;
    }

    let mut out = BgrImage::zeroed(fov.width, fov.height);
    let dst_x = (visible.x0 - rect.x0) as usize * CHANNELS;
    let dst_y = (visible.y0 - rect.y0) as u32;
    let row_len = crop.width() as usize * CHANNELS;
    for row in 0..crop.height() {
        out.row_mut(dst_y + row)[dst_x..dst_x + row_len].copy_from_slice(crop.row(row));
    }
    out
}
