//! Pixel-level frame rendering for headless recording.
//!
//! The FOV box comes from [`fov_rect`], the same window the extractor cuts,
//! and is drawn on the pixels just inside its half-open bounds.

use crate::bgr::{Bgr, BgrImage, CHANNELS};
use crate::coordinates::{FovSpec, Position};
use crate::geometry::fov_rect;

pub const FOV_BOX_COLOR: Bgr = [0, 0, 255];
pub const FOV_BOX_THICKNESS: i64 = 2;
pub const MARKER_RADIUS: i64 = 6;
pub const MARKER_RING: i64 = 2;
pub const MARKER_FILL: Bgr = [255, 255, 255];
pub const MARKER_EDGE: Bgr = [0, 0, 0];

pub fn draw_drone_overlay(map: &BgrImage, position: Position, fov: FovSpec) -> BgrImage {
    let mut frame = map.clone();
    draw_fov_box(&mut frame, position, fov);
    draw_marker(&mut frame, position);
    frame
}

fn draw_fov_box(frame: &mut BgrImage, position: Position, fov: FovSpec) {
    let rect = fov_rect(position, fov);
    let Some(visible) = rect.clip_to(frame.width(), frame.height()) else {
        return;
    };
    for y in visible.y0..visible.y1 {
        for x in visible.x0..visible.x1 {
            let on_edge = x < rect.x0 + FOV_BOX_THICKNESS
                || x >= rect.x1 - FOV_BOX_THICKNESS
                || y < rect.y0 + FOV_BOX_THICKNESS
                || y >= rect.y1 - FOV_BOX_THICKNESS;
            if on_edge {
                frame.put_pixel(x as u32, y as u32, FOV_BOX_COLOR);
            }
        }
    }
}

fn draw_marker(frame: &mut BgrImage, position: Position) {
    let outer = MARKER_RADIUS + MARKER_RING / 2;
    let inner = MARKER_RADIUS - MARKER_RING / 2;
    let (cx, cy) = (i64::from(position.x), i64::from(position.y));
    for dy in -outer..=outer {
        for dx in -outer..=outer {
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || y < 0 {
                continue;
            }
            let dist_sq = dx * dx + dy * dy;
            if dist_sq > outer * outer {
                continue;
            }
            let color = if dist_sq > inner * inner {
                MARKER_EDGE
            } else {
                MARKER_FILL
            };
            frame.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Largest factor `upscale_nearest` applies; bigger requests are capped.
pub const MAX_UPSCALE: u32 = 64;

/// Blows every pixel up to a `factor x factor` block.
pub fn upscale_nearest(image: &BgrImage, factor: u32) -> BgrImage {
    let factor = factor.clamp(1, MAX_UPSCALE);
    resize_nearest(
        image,
        image.width().saturating_mul(factor),
        image.height().saturating_mul(factor),
    )
}

pub fn resize_nearest(image: &BgrImage, width: u32, height: u32) -> BgrImage {
    let mut out = BgrImage::zeroed(width, height);
    if image.width() == 0 || image.height() == 0 {
        return out;
    }
    for y in 0..height {
        let src_y = (u64::from(y) * u64::from(image.height()) / u64::from(height)) as u32;
        let src_row = image.row(src_y);
        let dst_row = out.row_mut(y);
        for x in 0..width {
            let src_x = (u64::from(x) * u64::from(image.width()) / u64::from(width)) as usize;
            let dst = x as usize * CHANNELS;
            let src = src_x * CHANNELS;
            dst_row[dst..dst + CHANNELS].copy_from_slice(&src_row[src..src + CHANNELS]);
        }
    }
    out
}

/// `[left | right]`, with `right` rescaled to the height of `left`.
pub fn side_by_side(left: &BgrImage, right: &BgrImage) -> BgrImage {
    if right.width() == 0 || right.height() == 0 {
        return left.clone();
    }
    let height = left.height();
    let scaled = u64::from(right.width()) * u64::from(height) / u64::from(right.height());
    let right_width = u32::try_from(scaled)
        .unwrap_or(u32::MAX)
        .clamp(1, u32::MAX - left.width());
    let right = resize_nearest(right, right_width, height);

    let mut out = BgrImage::zeroed(left.width() + right_width, height);
    let split = left.width() as usize * CHANNELS;
    for y in 0..height {
        let row = out.row_mut(y);
        row[..split].copy_from_slice(left.row(y));
        row[split..].copy_from_slice(right.row(y));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn grey(width: u32, height: u32) -> BgrImage {
        BgrImage::from_raw(width, height, vec![90; (width * height * 3) as usize]).unwrap()
    }

    #[test]
    fn fov_box_traces_the_extraction_window() {
        let map = grey(100, 100);
        let position = Position::new(70, 50);
        let fov = FovSpec::new(40, 30);
        let frame = draw_drone_overlay(&map, position, fov);
        let rect = fov_rect(position, fov);
        assert_eq!(rect, Rect::new(50, 35, 90, 65));

        for (x, y) in [(50, 35), (51, 50), (89, 64), (88, 36), (70, 35), (70, 64)] {
            assert_eq!(frame.pixel(x, y), Some(FOV_BOX_COLOR), "({x}, {y})");
        }
        for (x, y) in [(49, 50), (90, 50), (70, 34), (70, 65), (52, 37)] {
            assert_eq!(frame.pixel(x, y), Some([90, 90, 90]), "({x}, {y})");
        }
    }

    #[test]
    fn marker_is_white_with_black_ring() {
        let map = grey(40, 40);
        let frame = draw_drone_overlay(&map, Position::new(20, 20), FovSpec::square(30));
        assert_eq!(frame.pixel(20, 20), Some(MARKER_FILL));
        assert_eq!(frame.pixel(26, 20), Some(MARKER_EDGE));
        assert_eq!(frame.pixel(28, 20), Some([90, 90, 90]));
    }

    #[test]
    fn drawing_near_corner_stays_in_bounds() {
        let map = grey(8, 8);
        let frame = draw_drone_overlay(&map, Position::new(0, 0), FovSpec::square(10));
        assert_eq!(frame.shape(), map.shape());
        assert_eq!(frame.pixel(0, 0), Some(MARKER_FILL));
    }

    #[test]
    fn upscale_repeats_pixels() {
        let image = BgrImage::from_raw(2, 1, vec![1, 1, 1, 2, 2, 2]).unwrap();
        let big = upscale_nearest(&image, 3);
        assert_eq!(big.shape(), (3, 6, 3));
        assert_eq!(big.pixel(2, 2), Some([1, 1, 1]));
        assert_eq!(big.pixel(3, 0), Some([2, 2, 2]));
    }

    #[test]
    fn upscale_factor_is_capped() {
        let image = BgrImage::from_raw(128, 1, vec![3; 384]).unwrap();
        let big = upscale_nearest(&image, 40_000_000);
        assert_eq!(big.shape(), (MAX_UPSCALE as usize, 128 * MAX_UPSCALE as usize, 3));
        assert_eq!(big.pixel(128 * MAX_UPSCALE - 1, MAX_UPSCALE - 1), Some([3, 3, 3]));
    }

    #[test]
    fn upscale_factor_zero_keeps_size() {
        let image = BgrImage::from_raw(2, 3, vec![1; 18]).unwrap();
        assert_eq!(upscale_nearest(&image, 0), image);
    }

    #[test]
    fn side_by_side_matches_left_height() {
        let left = grey(30, 20);
        let right = BgrImage::from_raw(5, 10, vec![7; 150]).unwrap();
        let frame = side_by_side(&left, &right);
        assert_eq!(frame.shape(), (20, 40, 3));
        assert_eq!(frame.pixel(29, 19), Some([90, 90, 90]));
        assert_eq!(frame.pixel(30, 0), Some([7, 7, 7]));
    }
}
