use authorship::Table;
use calamine::{open_workbook, DataType, Reader, Xlsx};
use log::debug;
use snafu::prelude::*;

use crate::authorlist::io_common::table_from_rows;
use crate::authorlist::*;

fn get_range(path: &str, worksheet_name_o: Option<&str>) -> AuthorlistResult<calamine::Range<DataType>> {
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        path, worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    match worksheet_name_o {
        // A worksheet name was provided, use it.
        Some(worksheet_name) => workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                name: worksheet_name,
                path,
            })?
            .context(OpeningExcelSnafu { path }),
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(OpeningExcelSnafu { path }),
    }
}

/// The content of a cell as it would be exported to a CSV file.
fn cell_to_string(cell: &DataType, lineno: usize) -> AuthorlistResult<String> {
    match cell {
        DataType::Empty => Ok(String::new()),
        DataType::String(s) => Ok(s.clone()),
        DataType::Int(x) => Ok(x.to_string()),
        // Integral floats are written without decimals: 2.0 -> "2"
        DataType::Float(x) => Ok(x.to_string()),
        DataType::Bool(b) => Ok(if *b { "TRUE" } else { "FALSE" }.to_string()),
        DataType::Error(_) => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
        other => Ok(other.to_string()),
    }
}

/// The rows of a range as they would be exported to a CSV file.
///
/// A range starts at its first used cell. The leading empty rows and columns
/// are put back so that the positions match the sheet from A1.
fn range_to_rows(wrange: &calamine::Range<DataType>) -> AuthorlistResult<Vec<Vec<String>>> {
    let (start_row, start_col) = wrange.start().unwrap_or((0, 0));
    debug!(
        "range_to_rows: start row: {} start column: {}",
        start_row, start_col
    );
    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for (idx, row) in wrange.rows().enumerate() {
        let lineno = start_row as usize + idx + 1;
        let mut cells: Vec<String> = vec![String::new(); start_col as usize];
        for cell in row.iter() {
            cells.push(cell_to_string(cell, lineno)?);
        }
        rows.push(cells);
    }
    Ok(rows)
}

pub fn read_excel_file(
    path: &str,
    worksheet_name_o: Option<&str>,
    skip_rows: usize,
) -> AuthorlistResult<Table> {
    let wrange = get_range(path, worksheet_name_o)?;
    let rows = range_to_rows(&wrange)?;
    debug!("read_excel_file: {} rows", rows.len());
    table_from_rows(rows, skip_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, Range};

    #[test]
    fn cells() {
        assert_eq!(cell_to_string(&DataType::Empty, 1).unwrap(), "");
        assert_eq!(cell_to_string(&DataType::Float(2.0), 1).unwrap(), "2");
        assert_eq!(cell_to_string(&DataType::Float(2.5), 1).unwrap(), "2.5");
        assert_eq!(cell_to_string(&DataType::Int(7), 1).unwrap(), "7");
        assert_eq!(
            cell_to_string(&DataType::String("Acme".to_string()), 1).unwrap(),
            "Acme"
        );
        assert!(matches!(
            cell_to_string(&DataType::Error(CellErrorType::Ref), 3),
            Err(AuthorlistError::ExcelWrongCellType { lineno: 3, .. })
        ));
    }

    #[test]
    fn range_is_padded_to_a1() {
        // Used cells from B2 to C3: the first row and column A are blank.
        let mut wrange: Range<DataType> = Range::new((1, 1), (2, 2));
        wrange.set_value((1, 1), DataType::String("First".to_string()));
        wrange.set_value((1, 2), DataType::String("Last".to_string()));
        wrange.set_value((2, 1), DataType::String("Ann".to_string()));
        wrange.set_value((2, 2), DataType::String("Lee".to_string()));
        let rows = range_to_rows(&wrange).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["", "First", "Last"]);
        assert_eq!(rows[2], vec!["", "Ann", "Lee"]);

        let t = table_from_rows(rows, 1).unwrap();
        assert_eq!(t.header()[1], "First");
        let row = t.rows().next().unwrap();
        assert_eq!(row.lineno(), 1);
        assert_eq!(row.at(2), "Lee");
    }

    #[test]
    fn missing_file() {
        let res = read_excel_file("/nonexistent/authors.xlsx", None, 0);
        assert!(matches!(res, Err(AuthorlistError::OpeningExcel { .. })));
    }
}
