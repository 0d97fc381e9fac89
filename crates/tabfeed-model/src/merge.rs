//! Spreadsheet merge regions.

use serde::{Deserialize, Serialize};

/// A rectangular merged-cell range over a spreadsheet grid.
///
/// All coordinates are 0-based and inclusive on both axes. Regions are not
/// validated against the grid: a region may reference rows or columns past
/// the current grid bounds (the normalizer extends the grid), and regions
/// may overlap (the later-processed region wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRegion {
    /// First row of the region (inclusive)
    pub start_row: usize,
    /// First column of the region (inclusive)
    pub start_col: usize,
    /// Last row of the region (inclusive)
    pub end_row: usize,
    /// Last column of the region (inclusive)
    pub end_col: usize,
}

impl MergeRegion {
    /// Create a new merge region
    pub fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// The anchor cell position, i.e. the top-left corner
    pub fn anchor(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    /// Number of cells covered by the region
    pub fn cell_count(&self) -> usize {
        let rows = self.end_row.saturating_sub(self.start_row) + 1;
        let cols = self.end_col.saturating_sub(self.start_col) + 1;
        rows * cols
    }
}
