use crate::error::LoadError;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use log::{debug, info};
use microuav_core::{BgrImage, MapError};
use std::path::Path;

/// Loads an overhead map as a 3-channel BGR buffer.
///
/// Grayscale images are expanded to three channels and alpha is dropped.
/// `resize` is `(height, width)`; when given, the map is resampled to exactly
/// that size before use.
pub fn load_map(path: &Path, resize: Option<(u32, u32)>) -> Result<BgrImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let decoded = image::open(path)?;
    debug!(
        "decoded {} as {:?} {}x{}",
        path.display(),
        decoded.color(),
        decoded.width(),
        decoded.height()
    );
    let map = from_dynamic(decoded, resize)?;
    info!(
        "loaded map {} ({}x{})",
        path.display(),
        map.width(),
        map.height()
    );
    Ok(map)
}

pub fn from_dynamic(image: DynamicImage, resize: Option<(u32, u32)>) -> Result<BgrImage, LoadError> {
    let mut rgb = image.to_rgb8();
    if let Some((height, width)) = resize {
        if (width, height) != rgb.dimensions() {
            rgb = imageops::resize(&rgb, width, height, FilterType::Triangle);
        }
    }
    let (width, height) = rgb.dimensions();
    let mut data = rgb.into_raw();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    Ok(BgrImage::from_raw(width, height, data)?)
}

/// Writes a BGR buffer as an RGB PNG (or whatever the extension selects).
pub fn save_bgr(image: &BgrImage, path: &Path) -> Result<(), LoadError> {
    let rgb = RgbImage::from_raw(image.width(), image.height(), image.swap_red_blue())
        .ok_or(MapError::BufferSize {
            expected: image.width() as usize * image.height() as usize * 3,
            actual: image.as_bytes().len(),
        })?;
    rgb.save(path)?;
    Ok(())
}
