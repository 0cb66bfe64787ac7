use std::path::Path;

use authorship::Table;
use log::debug;
use snafu::prelude::*;

use crate::authorlist::*;

/// The kinds of inputs that can be read.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Provider {
    Csv,
    Tsv,
    Excel,
    GoogleSheets,
}

impl Provider {
    pub fn from_name(name: &str) -> AuthorlistResult<Provider> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "csv" => Ok(Provider::Csv),
            "tsv" => Ok(Provider::Tsv),
            "excel" | "xlsx" => Ok(Provider::Excel),
            "googlesheets" | "google_sheets" | "gsheets" => Ok(Provider::GoogleSheets),
            _ => UnknownProviderSnafu { name }.fail(),
        }
    }

    /// Guesses the provider from the extension of a file. Files with an
    /// unknown extension are read as CSV.
    pub fn guess(path: &str) -> Provider {
        let ext = Path::new(path)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            Some("tsv") | Some("tab") => Provider::Tsv,
            Some("xlsx") | Some("xlsm") => Provider::Excel,
            _ => Provider::Csv,
        }
    }

    pub fn delimiter(&self) -> u8 {
        match self {
            Provider::Tsv | Provider::GoogleSheets => b'\t',
            _ => b',',
        }
    }
}

/// Builds a table from raw rows: the first `skip_rows` rows are dropped and
/// the next one is the header.
pub fn table_from_rows(rows: Vec<Vec<String>>, skip_rows: usize) -> AuthorlistResult<Table> {
    let mut iter = rows.into_iter().skip(skip_rows);
    let header = iter.next().context(MissingHeaderSnafu {})?;
    debug!("table_from_rows: header: {:?}", header);
    let rows: Vec<Vec<String>> = iter.collect();
    Ok(Table::new(header, rows))
}
