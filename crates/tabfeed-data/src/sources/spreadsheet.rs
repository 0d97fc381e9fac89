//! Spreadsheet (xlsx) data source using calamine.
//!
//! The first sheet by declaration order is the dataset. The used range is
//! read row-major from absolute (0,0) so cell coordinates line up with the
//! sheet's merge-region coordinates even when the used range does not
//! start at A1. Absent cells render as the empty string.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use tracing::debug;

use tabfeed_model::{Grid, MergeRegion};

use crate::error::{DataError, Result};
use crate::sources::{ParsedTable, TableSource};

/// Render format for date and datetime cells
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Spreadsheet workbook data source
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetSource;

impl SpreadsheetSource {
    /// Create a new spreadsheet source
    pub fn new() -> Self {
        Self
    }
}

impl TableSource for SpreadsheetSource {
    fn parse(&self, bytes: &[u8]) -> Result<ParsedTable> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut workbook: Xlsx<_> =
            Xlsx::new(cursor).map_err(|e| DataError::WorkbookOpen(e.to_string()))?;
        workbook.load_merged_regions()?;

        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(DataError::NoSheets)?;
        let range = workbook.worksheet_range(&sheet)?;
        let grid = read_grid(&range);

        let merges: Vec<MergeRegion> = workbook
            .merged_regions()
            .iter()
            .filter(|(name, _, _)| name == &sheet)
            .map(|(_, _, dimensions)| {
                MergeRegion::new(
                    dimensions.start.0 as usize,
                    dimensions.start.1 as usize,
                    dimensions.end.0 as usize,
                    dimensions.end.1 as usize,
                )
            })
            .collect();

        debug!(
            sheet = %sheet,
            rows = grid.len(),
            merges = merges.len(),
            "read first worksheet"
        );

        Ok(ParsedTable {
            grid,
            merges,
            diagnostics: Vec::new(),
        })
    }
}

/// Read the used range into a grid, addressing cells by absolute position.
fn read_grid(range: &Range<Data>) -> Grid {
    let Some((end_row, end_col)) = range.end() else {
        return Grid::new();
    };

    let mut grid = Vec::with_capacity(end_row as usize + 1);
    for row in 0..=end_row {
        let mut cells = Vec::with_capacity(end_col as usize + 1);
        for col in 0..=end_col {
            let value = range
                .get_value((row, col))
                .map(cell_to_string)
                .unwrap_or_default();
            cells.push(value);
        }
        grid.push(cells);
    }
    grid
}

/// Render a calamine cell to display text.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Format floats nicely (remove unnecessary decimals)
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERROR: {:?}", e),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(format_date)
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Render a date cell the way every date in a response is rendered.
fn format_date(naive: chrono::NaiveDateTime) -> String {
    naive.format(DATE_FORMAT).to_string()
}
