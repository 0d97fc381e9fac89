//! Integration tests for the spreadsheet source against a real xlsx archive.
//!
//! The workbook is synthesized in-memory with the zip crate so the tests
//! need no binary fixtures checked in.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use tabfeed_data::{SpreadsheetSource, TableSource};
use tabfeed_model::MergeRegion;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Report" sheetId="1" r:id="rId1"/>
  </sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

fn build_xlsx(sheet_xml: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", sheet_xml),
    ];
    for (name, content) in parts {
        writer.start_file(name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }

    writer.finish().unwrap().into_inner()
}

#[test]
fn test_parse_grid_and_merges() {
    let sheet = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1">
      <c r="A1" t="inlineStr"><is><t>Region</t></is></c>
      <c r="B1" t="inlineStr"><is><t>Total</t></is></c>
    </row>
    <row r="2">
      <c r="A2" t="inlineStr"><is><t>North</t></is></c>
      <c r="B2"><v>10</v></c>
    </row>
    <row r="3"><c r="B3"><v>20</v></c></row>
    <row r="4"><c r="B4"><v>30.5</v></c></row>
  </sheetData>
  <mergeCells count="1"><mergeCell ref="A2:A4"/></mergeCells>
</worksheet>"#;

    let bytes = build_xlsx(sheet);
    let table = SpreadsheetSource::new().parse(&bytes).unwrap();

    assert_eq!(table.grid.len(), 4);
    assert_eq!(table.grid[0], vec!["Region", "Total"]);
    assert_eq!(table.grid[1], vec!["North", "10"]);
    // Cells covered by the merge are still raw here; normalization is the
    // pipeline's job
    assert_eq!(table.grid[2], vec!["", "20"]);
    assert_eq!(table.grid[3], vec!["", "30.5"]);

    assert_eq!(table.merges, vec![MergeRegion::new(1, 0, 3, 0)]);
    assert!(table.diagnostics.is_empty());
}

#[test]
fn test_parse_sheet_without_merges() {
    let sheet = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1"><c r="A1" t="inlineStr"><is><t>only</t></is></c></row>
  </sheetData>
</worksheet>"#;

    let table = SpreadsheetSource::new().parse(&build_xlsx(sheet)).unwrap();
    assert_eq!(table.grid, vec![vec!["only".to_string()]]);
    assert!(table.merges.is_empty());
}

#[test]
fn test_parse_empty_sheet() {
    let sheet = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData/>
</worksheet>"#;

    let table = SpreadsheetSource::new().parse(&build_xlsx(sheet)).unwrap();
    assert!(table.grid.is_empty());
}
