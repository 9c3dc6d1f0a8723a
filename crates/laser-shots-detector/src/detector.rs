use laser_shots_core::{GrayImageView, RgbImageView, Shot, ShotColor};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::center::approximate_center;
use crate::color::classify_color;
use crate::region::{Region, RegionGrid};
use crate::sink::ShotSink;
use crate::threshold::{threshold, ThresholdMask};
use crate::{ShotDetectError, ShotDetectorParams};

/// Single-frame laser shot detector.
///
/// Each pass thresholds the grayscale frame, splits it into a 3×3 grid and
/// reports at most one shot per region: the first bright pixel, in
/// column-major order, whose neighborhood classifies as a non-ignored laser
/// color.
#[derive(Clone, Debug, Default)]
pub struct ShotDetector {
    params: ShotDetectorParams,
}

impl ShotDetector {
    pub fn new(params: ShotDetectorParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &ShotDetectorParams {
        &self.params
    }

    /// Detect shots in one frame. Shots are ordered by region.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self, frame, gray),
            fields(width = frame.width, height = frame.height)
        )
    )]
    pub fn detect(
        &self,
        frame: &RgbImageView<'_>,
        gray: &GrayImageView<'_>,
    ) -> Result<Vec<Shot>, ShotDetectError> {
        check_dimensions(frame, gray)?;

        let mask = threshold(gray, self.params.laser_intensity_threshold());
        let grid = RegionGrid::new(frame.width, frame.height);
        let ignored = self.params.ignored_color();

        let shots = search_regions(frame, &mask, grid.regions(), ignored);
        log::debug!(
            "{}x{} frame: {} bright pixels, {} shots",
            frame.width,
            frame.height,
            mask.bright_count(),
            shots.len()
        );
        Ok(shots)
    }

    /// Detect shots and hand each one to `sink`. Returns how many were reported.
    pub fn detect_into<S: ShotSink + ?Sized>(
        &self,
        frame: &RgbImageView<'_>,
        gray: &GrayImageView<'_>,
        sink: &mut S,
    ) -> Result<usize, ShotDetectError> {
        let shots = self.detect(frame, gray)?;
        let n = shots.len();
        for shot in shots {
            sink.report_shot(shot);
        }
        Ok(n)
    }
}

fn check_dimensions(
    frame: &RgbImageView<'_>,
    gray: &GrayImageView<'_>,
) -> Result<(), ShotDetectError> {
    if frame.dimensions() != gray.dimensions() {
        return Err(ShotDetectError::DimensionMismatch {
            frame_width: frame.width,
            frame_height: frame.height,
            gray_width: gray.width,
            gray_height: gray.height,
        });
    }
    Ok(())
}

fn search_regions(
    frame: &RgbImageView<'_>,
    mask: &ThresholdMask,
    regions: &[Region],
    ignored: Option<ShotColor>,
) -> Vec<Shot> {
    #[cfg(feature = "rayon")]
    let shots: Vec<Shot> = regions
        .par_iter()
        .filter_map(|region| scan_region(frame, mask, region, ignored))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let shots: Vec<Shot> = regions
        .iter()
        .filter_map(|region| scan_region(frame, mask, region, ignored))
        .collect();

    shots
}

/// First accepted shot in `region`, if any.
///
/// Candidates with no laser color or with the ignored color are skipped and
/// the scan continues with the next pixel.
pub fn scan_region(
    frame: &RgbImageView<'_>,
    mask: &ThresholdMask,
    region: &Region,
    ignored: Option<ShotColor>,
) -> Option<Shot> {
    region
        .pixels()
        .filter(|&(x, y)| mask.is_bright(x, y))
        .find_map(|(x, y)| {
            let color = classify_color(frame, x, y)?;
            if Some(color) == ignored {
                log::trace!("ignoring {color} candidate at ({x}, {y})");
                return None;
            }
            let center = approximate_center(frame, x, y);
            Some(Shot {
                color,
                position: center,
            })
        })
}
