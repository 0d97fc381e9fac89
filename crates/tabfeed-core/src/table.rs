//! Row filtering and the header/body split.
//!
//! Both input formats pass through here after any merge normalization, so
//! they share one filtering rule.

use tabfeed_model::{is_blank_row, Grid, Row};

/// Remove rows whose every cell is blank.
///
/// This runs on the full grid, including what will become the header row,
/// so a file whose first real row is preceded by blank rows still gets the
/// right header.
pub fn drop_blank_rows(grid: Grid) -> Grid {
    grid.into_iter()
        .filter(|row| !is_blank_row(row))
        .collect()
}

/// Split a filtered grid into its header row and body rows.
///
/// Returns `None` for an empty grid; the caller reports that as an
/// empty-result failure.
pub fn split_header(grid: Grid) -> Option<(Row, Grid)> {
    let mut rows = grid.into_iter();
    let header = rows.next()?;
    Some((header, rows.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_drop_blank_rows_including_leading() {
        let filtered = drop_blank_rows(grid(&[
            &["", ""],
            &["a", "b"],
            &[" ", "\t"],
            &["1", ""],
        ]));

        assert_eq!(filtered, grid(&[&["a", "b"], &["1", ""]]));
    }

    #[test]
    fn test_split_header() {
        let (header, body) = split_header(grid(&[&["a", "b"], &["1", "2"], &["3", "4"]])).unwrap();

        assert_eq!(header, vec!["a", "b"]);
        assert_eq!(body, grid(&[&["1", "2"], &["3", "4"]]));
    }

    #[test]
    fn test_split_header_single_row() {
        let (header, body) = split_header(grid(&[&["a"]])).unwrap();
        assert_eq!(header, vec!["a"]);
        assert!(body.is_empty());
    }

    #[test]
    fn test_split_header_empty_grid() {
        assert!(split_header(Grid::new()).is_none());
    }
}
