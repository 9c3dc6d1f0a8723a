//! Laser color classification from a small cross-shaped neighborhood.
//!
//! A laser dot has one channel measurably stronger than the other two, while
//! sensor noise tends to have near-equal channels. A color is reported only
//! when its channel mean beats both others by more than `DOMINANCE_RATIO`.
//! This is a heuristic: washed-out or saturated dots can fail it.

use laser_shots_core::{RgbImageView, ShotColor};

/// Pixels sampled in each of the four directions from the candidate.
pub const COLOR_SAMPLE_RADIUS: usize = 5;

/// Minimum ratio of the dominant channel mean over each other channel mean.
pub const DOMINANCE_RATIO: f64 = 1.05;

/// Mean `[r, g, b]` over the candidate and up to `COLOR_SAMPLE_RADIUS` pixels
/// left, right, up and down of it, clipped at the frame border.
pub fn neighborhood_mean(frame: &RgbImageView<'_>, x: usize, y: usize) -> [f64; 3] {
    let mut sum = [0u32; 3];
    let mut count = 0u32;
    let mut add = |px: usize, py: usize| {
        let rgb = frame.rgb(px, py);
        for (acc, c) in sum.iter_mut().zip(rgb) {
            *acc += u32::from(c);
        }
        count += 1;
    };

    add(x, y);
    for d in 1..=COLOR_SAMPLE_RADIUS {
        if let Some(px) = x.checked_sub(d) {
            add(px, y);
        }
        if x + d < frame.width {
            add(x + d, y);
        }
        if let Some(py) = y.checked_sub(d) {
            add(x, py);
        }
        if y + d < frame.height {
            add(x, y + d);
        }
    }

    let n = f64::from(count);
    sum.map(|s| f64::from(s) / n)
}

/// Classify averaged channel values as red, green or neither.
///
/// Zero denominators skip the corresponding ratio test instead of dividing.
pub fn classify_mean(mean: [f64; 3]) -> Option<ShotColor> {
    let [r, g, b] = mean;

    if g != 0.0 && b != 0.0 && r / g > DOMINANCE_RATIO && r / b > DOMINANCE_RATIO {
        return Some(ShotColor::Red);
    }

    if r == 0.0 || b == 0.0 {
        return None;
    }

    if g / r > DOMINANCE_RATIO && g / b > DOMINANCE_RATIO {
        return Some(ShotColor::Green);
    }

    None
}

/// Classify the laser color around a candidate pixel. Panics if `(x, y)` is
/// outside the frame.
pub fn classify_color(frame: &RgbImageView<'_>, x: usize, y: usize) -> Option<ShotColor> {
    classify_mean(neighborhood_mean(frame, x, y))
}
