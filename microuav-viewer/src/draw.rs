use crate::layout::{HUD_FONT_SIZE, HUD_LINE_HEIGHT, PanelLayout, bgr_to_rgba};
use macroquad::prelude::*;
use microuav_core::{BgrImage, Simulator};

#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub radius_px: f32, // screen pixels, independent of zoom
    pub stroke_px: f32,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub fov_color: Color,
    pub fov_thickness_px: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius_px: 6.0,
            stroke_px: 2.0,
            stroke_color: BLACK,
            fill_color: WHITE,
            fov_color: RED,
            fov_thickness_px: 2.0,
        }
    }
}

/// `None` when the image does not fit a texture (dimensions above `u16::MAX`).
pub fn texture_from_bgr(image: &BgrImage) -> Option<Texture2D> {
    let width = u16::try_from(image.width()).ok()?;
    let height = u16::try_from(image.height()).ok()?;
    let texture = Texture2D::from_rgba8(width, height, &bgr_to_rgba(image));
    texture.set_filter(FilterMode::Nearest);
    Some(texture)
}

pub fn draw_map_panel(
    map_texture: &Texture2D,
    simulator: &Simulator,
    layout: &PanelLayout,
    style: &MarkerStyle,
) {
    draw_texture_ex(
        map_texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(layout.map_size.0, layout.map_size.1)),
            ..Default::default()
        },
    );

    // Same rectangle the observation was cut from.
    let (x, y, w, h) = layout.map_rect(simulator.overlay_rectangle());
    draw_rectangle_lines(x, y, w, h, style.fov_thickness_px, style.fov_color);

    let position = simulator.current_position();
    let (cx, cy) = layout.map_point(position.x, position.y);
    draw_circle(cx, cy, style.radius_px + style.stroke_px * 0.5, style.stroke_color);
    draw_circle(
        cx,
        cy,
        (style.radius_px - style.stroke_px * 0.5).max(0.0),
        style.fill_color,
    );
}

pub fn draw_observation_panel(observation: &Texture2D, layout: &PanelLayout, title: &str) {
    draw_rectangle(
        layout.obs_origin.0,
        layout.obs_origin.1,
        layout.obs_size.0,
        layout.obs_size.1,
        BLACK,
    );
    draw_texture_ex(
        observation,
        layout.obs_origin.0,
        layout.obs_origin.1,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(layout.obs_size.0, layout.obs_size.1)),
            ..Default::default()
        },
    );
    draw_outlined_text(title, layout.obs_origin.0 + 12.0, 28.0);
}

pub fn draw_hud(lines: &[String]) {
    let mut y = 24.0;
    for line in lines {
        draw_outlined_text(line, 12.0, y);
        y += HUD_LINE_HEIGHT;
    }
}

fn draw_outlined_text(text: &str, x: f32, y: f32) {
    for (dx, dy) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
        draw_text(text, x + dx, y + dy, HUD_FONT_SIZE, WHITE);
    }
    draw_text(text, x, y, HUD_FONT_SIZE, BLACK);
}

pub fn hud_lines(simulator: &Simulator, paused: bool) -> Vec<String> {
    let position = simulator.current_position();
    let fov = simulator.fov();
    let mut lines = vec![
        format!("x={}  y={}", position.x, position.y),
        format!(
            "step={}  fov={}x{}  border={}",
            simulator.step_size(),
            fov.width,
            fov.height,
            simulator.border_mode()
        ),
        "WASD: move   R: reset   SPACE: pause   Q: quit".to_string(),
    ];
    if paused {
        lines.push("PAUSED".to_string());
    }
    lines
}
