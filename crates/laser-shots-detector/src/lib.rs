//! Laser shot detector built on top of `laser-shots-core`.
//!
//! ## Quickstart
//!
//! ```
//! use laser_shots_core::{grayscale_from_rgb, RgbImageView};
//! use laser_shots_detector::{ShotDetector, ShotDetectorParams};
//!
//! let data = vec![0u8; 64 * 48 * 3];
//! let frame = RgbImageView::from_slice(64, 48, &data).unwrap();
//! let gray = grayscale_from_rgb(&frame);
//!
//! let detector = ShotDetector::new(ShotDetectorParams::default());
//! let shots = detector.detect(&frame, &gray.view()).unwrap();
//! assert!(shots.is_empty());
//! ```
//!
//! Algorithm, per frame:
//! 1. Threshold the grayscale frame into a bright/dark mask.
//! 2. Split the frame into a 3×3 grid of regions (last column/row absorb the
//!    integer-division remainder).
//! 3. In each region, visit bright pixels column by column, top to bottom.
//! 4. Classify the laser color from a cross of up to 21 pixels around the
//!    candidate; skip the candidate if no color wins or the color is ignored.
//! 5. Estimate the dot center by walking the near-white diagonal and stop
//!    searching that region.
//!
//! Regions share no state; with the `rayon` feature they are searched in
//! parallel. Output order is region order either way.

mod center;
mod color;
mod detector;
mod error;
mod params;
mod region;
mod sink;
mod threshold;

pub use center::{approximate_center, CORE_MIN_CHANNEL, MAX_CORE_STEPS};
pub use color::{
    classify_color, classify_mean, neighborhood_mean, COLOR_SAMPLE_RADIUS, DOMINANCE_RATIO,
};
pub use detector::{scan_region, ShotDetector};
pub use error::ShotDetectError;
pub use params::ShotDetectorParams;
pub use region::{Region, RegionGrid, GRID_DIVISIONS};
pub use sink::{FnSink, ShotSink};
pub use threshold::{threshold, ThresholdMask};
