//! High-level facade crate for the `laser-shots-*` workspace.
//!
//! This crate provides:
//! - re-exports of the core types and the shot detector
//! - JSON configuration and report files for detection runs
//! - (feature-gated) helpers that run detection on `image` crate buffers
//!
//! ## Quickstart
//!
//! ```no_run
//! use laser_shots::detect;
//! use laser_shots::ShotDetectorParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = ImageReader::open("frame.png")?.decode()?.to_rgb8();
//! let shots = detect::detect_shots_rgb(&frame, ShotDetectorParams::default())?;
//! for shot in &shots {
//!     println!("{} shot at ({:.1}, {:.1})", shot.color, shot.x(), shot.y());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `laser_shots::core`: pixel views, luminance, `Shot` and `ShotColor`.
//! - `laser_shots::detector`: thresholding, region grid, color and center
//!   heuristics, `ShotDetector`.
//! - `laser_shots::io`: `ShotsConfig` and `ShotsReport` JSON files.
//! - `laser_shots::detect` (feature `image`): end-to-end helpers from
//!   `image::RgbImage`.

pub use laser_shots_core as core;
pub use laser_shots_detector as detector;

pub use laser_shots_core::{Shot, ShotColor};
pub use laser_shots_detector::{ShotDetectError, ShotDetector, ShotDetectorParams, ShotSink};

pub mod io;

#[cfg(feature = "image")]
pub mod detect;
