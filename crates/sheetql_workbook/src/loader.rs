//! Workbook file loading.

use crate::infer_column_type;
use calamine::{Data, Reader, Xlsx, open_workbook};
use sheetql_core::{Column, Table};
use sheetql_error::{SheetqlResult, WorkbookError, WorkbookErrorKind};
use std::path::Path;

/// Number of data rows included in the preview.
pub const PREVIEW_ROWS: usize = 5;

/// Load the first sheet of an `.xlsx` workbook into a [`Table`].
///
/// The first row is taken as the header; duplicate or empty header cells
/// are disambiguated so column names stay unique. One primitive type is
/// inferred per column from the data cells below the header.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or decoded, when the
/// workbook has no sheets, or when the sheet has no header row. Callers
/// reset their table state on error so no stale data survives a failed
/// load.
#[tracing::instrument]
pub fn load_workbook(path: &Path) -> SheetqlResult<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: calamine::XlsxError| {
            WorkbookError::new(WorkbookErrorKind::Open(e.to_string()))
        })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| WorkbookError::new(WorkbookErrorKind::NoSheets))?;

    let range = workbook.worksheet_range(&sheet).map_err(|e| {
        WorkbookError::new(WorkbookErrorKind::Read {
            sheet: sheet.clone(),
            message: e.to_string(),
        })
    })?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| WorkbookError::new(WorkbookErrorKind::MissingHeader(sheet.clone())))?;
    let names = header_names(header);

    let data_rows: Vec<&[Data]> = rows.collect();

    let columns = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells = data_rows.iter().filter_map(|row| row.get(idx));
            Column::new(name, infer_column_type(cells))
        })
        .collect();

    let preview = data_rows
        .iter()
        .take(PREVIEW_ROWS)
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let table = Table::new(columns, preview, data_rows.len());
    tracing::info!(
        sheet = %sheet,
        columns = table.columns.len(),
        rows = table.row_count,
        "loaded workbook"
    );
    Ok(table)
}

/// Turn the header row into unique, non-empty column names.
///
/// Empty cells become `column_<n>`; repeated names get `_2`, `_3`, …
/// suffixes so the schema description stays unambiguous.
fn header_names(header: &[Data]) -> Vec<String> {
    let mut names = Vec::with_capacity(header.len());
    for (idx, cell) in header.iter().enumerate() {
        let raw = cell.to_string().trim().to_string();
        let base = if raw.is_empty() {
            format!("column_{}", idx + 1)
        } else {
            raw
        };
        let mut name = base.clone();
        let mut suffix = 2;
        while names.contains(&name) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        names.push(name);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_pass_through_unique_names() {
        let header = [
            Data::String("region".into()),
            Data::String("sales".into()),
        ];
        assert_eq!(header_names(&header), vec!["region", "sales"]);
    }

    #[test]
    fn duplicate_header_names_get_suffixes() {
        let header = [
            Data::String("amount".into()),
            Data::String("amount".into()),
            Data::String("amount".into()),
        ];
        assert_eq!(header_names(&header), vec!["amount", "amount_2", "amount_3"]);
    }

    #[test]
    fn empty_header_cells_get_positional_names() {
        let header = [Data::Empty, Data::String("total".into()), Data::Empty];
        assert_eq!(header_names(&header), vec!["column_1", "total", "column_3"]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let result = load_workbook(Path::new("/no/such/file.xlsx"));
        let err = result.expect_err("nonexistent file must fail to open");
        assert!(format!("{err}").contains("Workbook Error"));
    }
}
