//! Luminance conversion and per-pixel frame filters.
//!
//! These helpers belong to frame preparation: they produce the grayscale
//! frame that shot detection thresholds. The detector itself never calls
//! them, callers do.

use serde::{Deserialize, Serialize};

use crate::image::{GrayImage, RgbImageView};

const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Rec.709 luminance of an 8-bit RGB triple, truncated toward zero.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = r as f64 * LUMA_R + g as f64 * LUMA_G + b as f64 * LUMA_B;
    y.clamp(0.0, 255.0) as u8
}

/// Convert a color frame into its luminance frame.
pub fn grayscale_from_rgb(frame: &RgbImageView<'_>) -> GrayImage {
    let data = frame
        .data
        .chunks_exact(3)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect();
    GrayImage {
        width: frame.width,
        height: frame.height,
        data,
    }
}

/// Ambient lighting reported by the capture side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingCondition {
    #[default]
    Bright,
    Dark,
}

/// Per-pixel filter applied while preparing a grayscale frame.
///
/// `update` lets the filter adapt its state from the pixel it is about to
/// judge; `apply` then decides whether the pixel survives.
pub trait PixelFilter {
    fn update(&mut self, frame: &RgbImageView<'_>, x: usize, y: usize);

    fn apply(
        &self,
        frame: &RgbImageView<'_>,
        x: usize,
        y: usize,
        lighting: LightingCondition,
    ) -> bool;
}

/// Grayscale conversion that blanks every pixel the filter rejects.
///
/// Pixels are visited row by row; `update` always runs before `apply` for the
/// same pixel.
pub fn grayscale_filtered<F: PixelFilter + ?Sized>(
    frame: &RgbImageView<'_>,
    filter: &mut F,
    lighting: LightingCondition,
) -> GrayImage {
    let mut out = GrayImage::new(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            filter.update(frame, x, y);
            if filter.apply(frame, x, y, lighting) {
                let [r, g, b] = frame.rgb(x, y);
                out.set(x, y, luminance(r, g, b));
            }
        }
    }
    out
}
