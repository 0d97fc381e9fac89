//! The rectangular cell grid shared by both input formats.
//!
//! A grid is an ordered sequence of rows, each an ordered sequence of string
//! cells. Rows may be ragged; consumers treat missing trailing cells as
//! empty. The empty string doubles as the absent-cell marker, so neither
//! parsing backend ever produces a null-like cell.

/// A single row of cell values
pub type Row = Vec<String>;

/// A parsed table as an ordered sequence of rows
pub type Grid = Vec<Row>;

/// Check whether a row is blank, i.e. every cell trims to the empty string.
///
/// Blank rows are dropped once per request, after merge normalization and
/// before the header/body split, so a file of only whitespace ends up with
/// zero usable rows on both the delimited and the spreadsheet path.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_empty_row_is_blank() {
        assert!(is_blank_row(&row(&[])));
        assert!(is_blank_row(&row(&["", ""])));
    }

    #[test]
    fn test_whitespace_only_row_is_blank() {
        assert!(is_blank_row(&row(&["  ", "\t", " "])));
    }

    #[test]
    fn test_row_with_content_is_not_blank() {
        assert!(!is_blank_row(&row(&["", "x", ""])));
        assert!(!is_blank_row(&row(&["0"])));
    }
}
