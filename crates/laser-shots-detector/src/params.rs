use laser_shots_core::ShotColor;
use serde::{Deserialize, Serialize};

fn default_laser_intensity_threshold() -> i32 {
    230
}

/// Configuration for the shot detector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotDetectorParams {
    /// Grayscale intensity a pixel must strictly exceed to be a candidate.
    ///
    /// Meaningful values are `0..=255`; anything below makes every pixel a
    /// candidate and anything from 255 up disables detection.
    #[serde(default = "default_laser_intensity_threshold")]
    pub laser_intensity_threshold: i32,
    /// Enables `ignore_color`.
    #[serde(default)]
    pub ignore_color_enabled: bool,
    /// Laser color to drop, e.g. a second trainer sharing the target.
    #[serde(default)]
    pub ignore_color: Option<ShotColor>,
}

impl Default for ShotDetectorParams {
    fn default() -> Self {
        Self {
            laser_intensity_threshold: default_laser_intensity_threshold(),
            ignore_color_enabled: false,
            ignore_color: None,
        }
    }
}

impl ShotDetectorParams {
    #[inline]
    pub fn laser_intensity_threshold(&self) -> i32 {
        self.laser_intensity_threshold
    }

    #[inline]
    pub fn ignore_laser_color(&self) -> bool {
        self.ignore_color_enabled
    }

    /// The color to suppress, if filtering is enabled and a color is set.
    pub fn ignored_color(&self) -> Option<ShotColor> {
        self.ignore_color.filter(|_| self.ignore_color_enabled)
    }

    /// Enable filtering of `color`.
    pub fn with_ignored_color(mut self, color: ShotColor) -> Self {
        self.ignore_color_enabled = true;
        self.ignore_color = Some(color);
        self
    }
}
