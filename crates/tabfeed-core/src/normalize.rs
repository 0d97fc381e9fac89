//! Merge normalization.
//!
//! Rewrites a spreadsheet grid so every cell inside a merge region holds
//! the region's anchor value, producing a flat grid equivalent to the
//! delimited-text model.

use tracing::debug;

use tabfeed_model::{Grid, MergeRegion};

/// Propagate each region's anchor value across its full rectangle.
///
/// Regions are applied in input order; a later region overwrites cells an
/// earlier one already filled. An out-of-range anchor reads as the empty
/// string, and writes past the current grid bounds extend it: missing rows
/// are appended and short rows padded with empty cells. Nothing here can
/// fail.
pub fn apply_merges(grid: &mut Grid, merges: &[MergeRegion]) {
    if merges.is_empty() {
        return;
    }
    debug!(count = merges.len(), "normalizing merge regions");

    for region in merges {
        let value = grid
            .get(region.start_row)
            .and_then(|row| row.get(region.start_col))
            .cloned()
            .unwrap_or_default();

        for row_idx in region.start_row..=region.end_row {
            if grid.len() <= row_idx {
                grid.resize(row_idx + 1, Vec::new());
            }
            let row = &mut grid[row_idx];
            if row.len() <= region.end_col {
                row.resize(region.end_col + 1, String::new());
            }
            for cell in &mut row[region.start_col..=region.end_col] {
                *cell = value.clone();
            }
        }
    }
}
