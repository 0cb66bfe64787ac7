use authorship::Table;
use log::info;
use snafu::prelude::*;

use crate::authorlist::io_csv::read_delimited;
use crate::authorlist::*;

/// The URL of the tab-separated export of one tab of a Google Sheet.
pub fn export_url(sheet_id: &str, gid: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=tsv&gid={}",
        sheet_id, gid
    )
}

/// Downloads a public Google Sheet and reads it as a tab-separated table.
pub fn read_google_sheet(sheet_id: &str, gid: &str, skip_rows: usize) -> AuthorlistResult<Table> {
    let url = export_url(sheet_id, gid);
    info!("Downloading {}", url);
    let body = reqwest::blocking::get(&url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .context(DownloadingSnafu { url: url.as_str() })?;
    read_delimited(body.as_bytes(), b'\t', skip_rows)
}
