//! Binary bright/dark mask from a grayscale frame.

use laser_shots_core::GrayImageView;

/// Pass-scoped bright/dark mask with the same size as its source frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdMask {
    pub width: usize,
    pub height: usize,
    data: Vec<bool>, // row-major, true = bright
}

impl ThresholdMask {
    #[inline]
    pub fn is_bright(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x]
    }

    pub fn bright_count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

/// Mark every pixel whose intensity is strictly above `cutoff` as bright.
///
/// Cutoffs below 0 make the whole mask bright, cutoffs of 255 or more make it
/// all dark.
pub fn threshold(gray: &GrayImageView<'_>, cutoff: i32) -> ThresholdMask {
    let data = gray.data.iter().map(|&v| i32::from(v) > cutoff).collect();
    ThresholdMask {
        width: gray.width,
        height: gray.height,
        data,
    }
}
