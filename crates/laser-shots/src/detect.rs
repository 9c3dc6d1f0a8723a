use crate::core::{self, ImageBufferError, Shot};
use crate::detector::{ShotDetectError, ShotDetector, ShotDetectorParams};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error(transparent)]
    Buffer(#[from] ImageBufferError),

    #[error(transparent)]
    Detect(#[from] ShotDetectError),
}

/// Borrow an `image::RgbImage` as the lightweight core view type.
pub fn rgb_view(img: &::image::RgbImage) -> core::RgbImageView<'_> {
    core::RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Borrow an `image::GrayImage` as the lightweight core view type.
pub fn gray_view(img: &::image::GrayImage) -> core::GrayImageView<'_> {
    core::GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Run shot detection on a color frame and its caller-supplied grayscale frame.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(frame, gray, params),
        fields(width = frame.width(), height = frame.height())
    )
)]
pub fn detect_shots(
    frame: &::image::RgbImage,
    gray: &::image::GrayImage,
    params: ShotDetectorParams,
) -> Result<Vec<Shot>, DetectError> {
    let detector = ShotDetector::new(params);
    Ok(detector.detect(&rgb_view(frame), &gray_view(gray))?)
}

/// Run shot detection on a color frame, deriving grayscale from luminance.
pub fn detect_shots_rgb(
    frame: &::image::RgbImage,
    params: ShotDetectorParams,
) -> Result<Vec<Shot>, DetectError> {
    let view = rgb_view(frame);
    let gray = core::grayscale_from_rgb(&view);
    let detector = ShotDetector::new(params);
    Ok(detector.detect(&view, &gray.view())?)
}

/// Build an `image::RgbImage` from an interleaved RGB buffer.
pub fn rgb_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<::image::RgbImage, DetectError> {
    let view = core::RgbImageView::from_slice(width as usize, height as usize, pixels)?;
    ::image::RgbImage::from_raw(width, height, view.data.to_vec()).ok_or(
        DetectError::Buffer(ImageBufferError::InvalidDimensions {
            width: width as usize,
            height: height as usize,
        }),
    )
}

/// Detect shots in a raw interleaved RGB buffer.
pub fn detect_shots_from_rgb_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    params: ShotDetectorParams,
) -> Result<Vec<Shot>, DetectError> {
    let view = core::RgbImageView::from_slice(width as usize, height as usize, pixels)?;
    let gray = core::grayscale_from_rgb(&view);
    Ok(ShotDetector::new(params).detect(&view, &gray.view())?)
}
