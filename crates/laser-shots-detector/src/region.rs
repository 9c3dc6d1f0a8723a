//! Fixed 3×3 partition of a frame into search regions.

use serde::{Deserialize, Serialize};

/// Number of region columns and rows.
pub const GRID_DIVISIONS: usize = 3;

/// Half-open pixel rectangle `[x_start, x_end) × [y_start, y_end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x_start: usize,
    pub x_end: usize,
    pub y_start: usize,
    pub y_end: usize,
}

impl Region {
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x_start..self.x_end).contains(&x) && (self.y_start..self.y_end).contains(&y)
    }

    pub fn area(&self) -> usize {
        (self.x_end - self.x_start) * (self.y_end - self.y_start)
    }

    /// Pixels in scan order: columns left to right, each column top to bottom.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.x_start..self.x_end).flat_map(move |x| (self.y_start..self.y_end).map(move |y| (x, y)))
    }
}

/// The nine regions of a `width × height` frame.
///
/// Tiles are `width / 3` by `height / 3`; the last column and row extend to
/// the frame border so the grid covers every pixel exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionGrid {
    regions: [Region; GRID_DIVISIONS * GRID_DIVISIONS],
}

impl RegionGrid {
    pub fn new(width: usize, height: usize) -> Self {
        let xs = split_axis(width);
        let ys = split_axis(height);
        let regions = std::array::from_fn(|k| {
            let (col, row) = (k / GRID_DIVISIONS, k % GRID_DIVISIONS);
            Region {
                x_start: xs[col].0,
                x_end: xs[col].1,
                y_start: ys[row].0,
                y_end: ys[row].1,
            }
        });
        Self { regions }
    }

    /// Regions in scan order: column-major, column outer and row inner.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

fn split_axis(len: usize) -> [(usize, usize); GRID_DIVISIONS] {
    let step = len / GRID_DIVISIONS;
    std::array::from_fn(|i| {
        let start = i * step;
        let end = if i + 1 == GRID_DIVISIONS {
            len
        } else {
            start + step
        };
        (start, end)
    })
}
