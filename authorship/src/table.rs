// ********* Generic table of string cells ***********

use std::collections::HashMap;

use snafu::OptionExt;

use crate::error::*;

/// A table of string cells, as returned by a spreadsheet.
///
/// The first row of the source is the header: it gives the names of the columns.
/// The data rows follow. Rows may be shorter than the header, missing cells are
/// read as blank.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    columns: HashMap<String, usize>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        let columns = column_index(&header);
        Table {
            header,
            rows,
            columns,
        }
    }

    /// Builds a table from string slices. Mostly useful for tests and examples.
    pub fn from_strs(header: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            header.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(idx, cells)| Row {
            lineno: idx + 1,
            cells,
            columns: &self.columns,
        })
    }

    /// The position of a named column.
    pub fn column(&self, name: &str) -> AuthorshipResult<usize> {
        self.columns
            .get(name)
            .cloned()
            .context(MissingColumnSnafu { column: name })
    }
}

fn column_index(header: &[String]) -> HashMap<String, usize> {
    let mut res: HashMap<String, usize> = HashMap::new();
    for (idx, name) in header.iter().enumerate() {
        // The first column wins for duplicated names.
        res.entry(name.trim().to_string()).or_insert(idx);
    }
    res
}

/// One data row of a [`Table`].
#[derive(Debug, Clone)]
pub struct Row<'a> {
    lineno: usize,
    cells: &'a [String],
    columns: &'a HashMap<String, usize>,
}

impl<'a> Row<'a> {
    /// The position of this row among the data rows, starting at 1.
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    /// The trimmed content of the cell at the given position. Missing cells are blank.
    pub fn at(&self, idx: usize) -> &'a str {
        self.cells.get(idx).map(|s| s.trim()).unwrap_or("")
    }

    /// The non-blank content of the cell at the given position.
    pub fn at_opt(&self, idx: usize) -> Option<&'a str> {
        Some(self.at(idx)).filter(|s| !s.is_empty())
    }

    /// The trimmed content of the named cell.
    pub fn get(&self, column: &str) -> AuthorshipResult<&'a str> {
        let idx = self
            .columns
            .get(column)
            .context(MissingColumnSnafu { column })?;
        Ok(self.at(*idx))
    }

    /// The non-blank content of the named cell.
    pub fn get_opt(&self, column: &str) -> AuthorshipResult<Option<&'a str>> {
        Ok(Some(self.get(column)?).filter(|s| !s.is_empty()))
    }

    /// The non-blank content of a named cell, for columns that may be absent.
    pub fn lookup(&self, column: &str) -> Option<&'a str> {
        self.get(column).ok().filter(|s| !s.is_empty())
    }

    /// True when all the cells are blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}
