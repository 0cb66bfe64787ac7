use std::io::Read;

use authorship::Table;
use log::debug;
use snafu::prelude::*;

use crate::authorlist::io_common::table_from_rows;
use crate::authorlist::*;

fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).delimiter(delimiter);
    builder
}

pub fn read_delimited_file(path: &str, delimiter: u8, skip_rows: usize) -> AuthorlistResult<Table> {
    debug!(
        "read_delimited_file: path: {:?} delimiter: {:?}",
        path, delimiter as char
    );
    let rdr = reader_builder(delimiter)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    collect_rows(rdr, skip_rows)
}

/// Reads all the records of a delimited input. The rows may have different
/// lengths: spreadsheets drop the trailing empty cells.
pub fn read_delimited<R: Read>(rdr: R, delimiter: u8, skip_rows: usize) -> AuthorlistResult<Table> {
    collect_rows(reader_builder(delimiter).from_reader(rdr), skip_rows)
}

fn collect_rows<R: Read>(rdr: csv::Reader<R>, skip_rows: usize) -> AuthorlistResult<Table> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, record_r) in rdr.into_records().enumerate() {
        // Rows are numbered from 1, like in a spreadsheet.
        let record = record_r.context(CsvLineParseSnafu { lineno: idx + 1 })?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    debug!("collect_rows: {} rows", rows.len());
    table_from_rows(rows, skip_rows)
}
