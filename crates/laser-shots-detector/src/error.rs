/// Errors returned by the shot detector.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShotDetectError {
    #[error(
        "frame is {frame_width}x{frame_height} but grayscale frame is {gray_width}x{gray_height}"
    )]
    DimensionMismatch {
        frame_width: usize,
        frame_height: usize,
        gray_width: usize,
        gray_height: usize,
    },
}
