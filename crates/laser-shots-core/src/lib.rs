//! Core types and utilities for laser shot detection.
//!
//! This crate is intentionally small: borrowed pixel views, the luminance
//! conversion used to prepare grayscale frames, and the `Shot` type that
//! detectors emit. It does not depend on any concrete image library.

mod image;
mod logger;
mod luminance;
mod shot;

pub use image::{GrayImage, GrayImageView, ImageBufferError, RgbImageView};
pub use luminance::{
    grayscale_filtered, grayscale_from_rgb, luminance, LightingCondition, PixelFilter,
};
pub use shot::{ParseShotColorError, Shot, ShotColor};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_env, LOG_ENV_VAR};
