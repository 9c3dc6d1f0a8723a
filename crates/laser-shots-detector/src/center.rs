//! Coarse center estimate of a shot's near-white core.
//!
//! The raster scan finds the top-left-most bright pixel of a dot, and dot
//! cores are rarely larger than 8×8 pixels. Walking diagonally down-right
//! while the pixel stays near white bounds the core; its midpoint is the
//! estimate. The result is biased toward the discovery pixel and is not a
//! centroid.

use laser_shots_core::RgbImageView;
use nalgebra::Point2;

/// Every channel of a core pixel is at least this bright.
pub const CORE_MIN_CHANNEL: u8 = 0xD2;

/// Longest diagonal walk, in pixels.
pub const MAX_CORE_STEPS: usize = 8;

/// Number of consecutive near-white pixels on the diagonal starting at `(x, y)`.
fn core_extent(frame: &RgbImageView<'_>, x: usize, y: usize) -> usize {
    (0..MAX_CORE_STEPS)
        .take_while(|&d| {
            let (px, py) = (x + d, y + d);
            frame.contains(px, py)
                && frame
                    .rgb(px, py)
                    .iter()
                    .all(|&c| c >= CORE_MIN_CHANNEL)
        })
        .count()
}

/// Midpoint of the box `[x, x + n] × [y, y + n]`, where `n` is the length of
/// the near-white diagonal run. Returns `(x, y)` itself when the candidate is
/// not near white.
///
/// The frame border ends the walk the same way a dim pixel does, so a
/// near-white candidate in the last column or row is centered half a pixel
/// past it: `(9, 9)` in a 10×10 frame yields `(9.5, 9.5)`.
pub fn approximate_center(frame: &RgbImageView<'_>, x: usize, y: usize) -> Point2<f32> {
    let half = core_extent(frame, x, y) as f32 / 2.0;
    Point2::new(x as f32 + half, y as f32 + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame_with_block(
        width: usize,
        height: usize,
        x0: usize,
        y0: usize,
        size: usize,
        rgb: [u8; 3],
    ) -> Vec<u8> {
        let mut data = vec![0u8; width * height * 3];
        for y in y0..(y0 + size).min(height) {
            for x in x0..(x0 + size).min(width) {
                let i = (y * width + x) * 3;
                data[i..i + 3].copy_from_slice(&rgb);
            }
        }
        data
    }

    #[test]
    fn eight_by_eight_white_block_yields_its_center() {
        let data = frame_with_block(32, 32, 10, 12, 8, [255, 255, 255]);
        let frame = RgbImageView::from_slice(32, 32, &data).expect("valid view");
        let c = approximate_center(&frame, 10, 12);
        assert_relative_eq!(c.x, 14.0);
        assert_relative_eq!(c.y, 16.0);
    }

    #[test]
    fn walk_stops_after_eight_steps() {
        let data = frame_with_block(40, 40, 0, 0, 20, [230, 230, 230]);
        let frame = RgbImageView::from_slice(40, 40, &data).expect("valid view");
        let c = approximate_center(&frame, 2, 3);
        assert_relative_eq!(c.x, 6.0);
        assert_relative_eq!(c.y, 7.0);
    }

    #[test]
    fn dim_candidate_returns_itself() {
        let data = frame_with_block(16, 16, 4, 4, 4, [255, 209, 255]);
        let frame = RgbImageView::from_slice(16, 16, &data).expect("valid view");
        let c = approximate_center(&frame, 4, 4);
        assert_relative_eq!(c.x, 4.0);
        assert_relative_eq!(c.y, 4.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let data = frame_with_block(16, 16, 4, 4, 2, [210, 210, 210]);
        let frame = RgbImageView::from_slice(16, 16, &data).expect("valid view");
        let c = approximate_center(&frame, 4, 4);
        assert_relative_eq!(c.x, 5.0);
        assert_relative_eq!(c.y, 5.0);
    }

    #[test]
    fn walk_is_clipped_at_frame_border() {
        let data = frame_with_block(10, 10, 7, 7, 3, [255, 255, 255]);
        let frame = RgbImageView::from_slice(10, 10, &data).expect("valid view");
        let c = approximate_center(&frame, 7, 7);
        assert_relative_eq!(c.x, 8.5);
        assert_relative_eq!(c.y, 8.5);
    }

    #[test]
    fn corner_pixel_is_centered_half_a_pixel_past_it() {
        let data = frame_with_block(10, 10, 9, 9, 1, [255, 255, 255]);
        let frame = RgbImageView::from_slice(10, 10, &data).expect("valid view");
        let c = approximate_center(&frame, 9, 9);
        assert_relative_eq!(c.x, 9.5);
        assert_relative_eq!(c.y, 9.5);
    }
}
