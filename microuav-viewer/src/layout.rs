use microuav_core::{BgrImage, Rect};

pub const HUD_LINE_HEIGHT: f32 = 26.0;
pub const HUD_FONT_SIZE: f32 = 24.0;

/// Screen placement of the map panel and the observation panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Screen pixels per map pixel.
    pub scale: f32,
    pub map_size: (f32, f32),
    pub obs_origin: (f32, f32),
    pub obs_size: (f32, f32),
}

impl PanelLayout {
    /// Fits `[map | observation]` into the screen. The observation panel has
    /// the map's height, like the recorder's side-by-side frames.
    pub fn fit(screen: (f32, f32), map: (u32, u32), obs: (u32, u32)) -> Self {
        let (map_w, map_h) = (map.0 as f32, map.1 as f32);
        let obs_w = if obs.1 == 0 {
            0.0
        } else {
            map_h * obs.0 as f32 / obs.1 as f32
        };
        let scale = (screen.0 / (map_w + obs_w)).min(screen.1 / map_h);
        Self {
            scale,
            map_size: (map_w * scale, map_h * scale),
            obs_origin: (map_w * scale, 0.0),
            obs_size: (obs_w * scale, map_h * scale),
        }
    }

    /// Screen rectangle `(x, y, w, h)` covering the map pixels of `rect`.
    pub fn map_rect(&self, rect: Rect) -> (f32, f32, f32, f32) {
        (
            rect.x0 as f32 * self.scale,
            rect.y0 as f32 * self.scale,
            rect.width() as f32 * self.scale,
            rect.height() as f32 * self.scale,
        )
    }

    /// Screen centre of map pixel `(x, y)`.
    pub fn map_point(&self, x: u32, y: u32) -> (f32, f32) {
        ((x as f32 + 0.5) * self.scale, (y as f32 + 0.5) * self.scale)
    }
}

/// BGR to the RGBA layout textures expect.
pub fn bgr_to_rgba(image: &BgrImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.as_bytes().len() / 3 * 4);
    for px in image.as_bytes().chunks_exact(3) {
        out.extend_from_slice(&[px[2], px[1], px[0], 255]);
    }
    out
}
