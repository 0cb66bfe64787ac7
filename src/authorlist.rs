use log::{debug, info, warn};

use authorship::*;
use snafu::{prelude::*, Snafu};

use std::fs::{self, File};
use std::io::{self, BufWriter};

use text_diff::print_diff;

use crate::args::Args;
use crate::authorlist::config_reader::*;

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;
pub mod io_gsheets;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AuthorlistError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Cannot find the worksheet {name} in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("The file {path} has no worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("row {lineno}: could not understand the cell {content}"))]
    ExcelWrongCellType { lineno: usize, content: String },

    #[snafu(display("Error opening file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("row {lineno}: could not parse the line"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("The input has no header row"))]
    MissingHeader {},

    #[snafu(display("Error reading the configuration {path}"))]
    OpeningJson { source: io::Error, path: String },
    #[snafu(display("Error parsing the configuration"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Expected a non-negative number for {key}"))]
    ParsingJsonNumber { key: String },

    #[snafu(display("Error downloading {url}"))]
    Downloading { source: reqwest::Error, url: String },

    #[snafu(display("No input: pass --input, --sheet or a configuration file"))]
    MissingInput {},
    #[snafu(display("The Google Sheets provider needs a sheet identifier"))]
    MissingSheetId {},
    #[snafu(display("Unknown input type {name}"))]
    UnknownProvider { name: String },

    #[snafu(display("Error writing {path}"))]
    WritingFile { source: io::Error, path: String },
    #[snafu(display("Error reading the reference {path}"))]
    OpeningReference { source: io::Error, path: String },
    #[snafu(display("Difference detected between the author list and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(context(false), display("Could not build the author list"))]
    Processing { source: AuthorshipError },
}

pub type AuthorlistResult<T> = Result<T, AuthorlistError>;

/// Reads the table of authors from the configured source.
fn read_table(settings: &Settings) -> AuthorlistResult<Table> {
    match &settings.source {
        InputSource::Delimited { path, delimiter } => {
            io_csv::read_delimited_file(path, *delimiter, settings.skip_rows)
        }
        InputSource::Excel { path, worksheet } => {
            io_excel::read_excel_file(path, worksheet.as_deref(), settings.skip_rows)
        }
        InputSource::GoogleSheets { sheet_id, gid } => {
            io_gsheets::read_google_sheet(sheet_id, gid, settings.skip_rows)
        }
    }
}

fn write_output(
    writer: &dyn Writer,
    authorship: &Authorship,
    output: Option<&str>,
) -> AuthorlistResult<()> {
    match output {
        Some(path) if !path.is_empty() && path != "stdout" => {
            info!("Writing the author list to {}", path);
            let file = File::create(path).context(WritingFileSnafu { path })?;
            let mut out = BufWriter::new(file);
            writer.write_to(authorship, &mut out)?;
        }
        _ => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writer.write_to(authorship, &mut out)?;
        }
    }
    Ok(())
}

/// Compares the rendering with a reference file. The trailing newlines are
/// not significant.
fn check_reference(rendered: &str, reference_path: &str) -> AuthorlistResult<()> {
    let reference = fs::read_to_string(reference_path).context(OpeningReferenceSnafu {
        path: reference_path,
    })?;
    let reference = reference.trim_end_matches('\n');
    if reference != rendered {
        warn!("Found differences with the reference {}", reference_path);
        print_diff(reference, rendered, "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("The author list matches the reference {}", reference_path);
    Ok(())
}

pub fn run_authorlist(args: &Args) -> AuthorlistResult<()> {
    let settings = read_settings(args)?;
    info!("settings: {:?}", settings);

    let table = read_table(&settings)?;
    debug!(
        "run_authorlist: {} rows, {} columns",
        table.num_rows(),
        table.num_columns()
    );

    let reader = settings
        .layout
        .reader(table, settings.sort_middle_authors);
    let authorship = reader.authorship()?;
    info!(
        "run_authorlist: {} authors, {} institutions",
        authorship.authors().len(),
        authorship.institutions().len()
    );

    let writer = settings.writer.writer();
    write_output(writer.as_ref(), &authorship, settings.output.as_deref())?;

    if let Some(reference_path) = &settings.reference {
        let rendered = writer.to_text(&authorship)?;
        check_reference(&rendered, reference_path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;

    fn example() -> Authorship {
        let t = Table::from_strs(
            &["First", "Middle", "Last", "Role", "Email", "", "", "", "Affiliation"],
            &[
                &["Cy", "", "Noor", "Senior", "cy@example.org", "", "", "", "Other U"],
                &["Ann", "", "Lee", "Lead", "ann@example.org", "", "", "", "Acme"],
            ],
        );
        HoytReader::new(t).authorship().unwrap()
    }

    #[test]
    fn reference_matches() {
        let a = example();
        let rendered = TextWriter.to_text(&a).unwrap();
        let path = env::temp_dir().join("authorlist_reference_matches.txt");
        fs::write(&path, format!("{}\n", rendered)).unwrap();
        check_reference(&rendered, path.to_str().unwrap()).unwrap();
    }

    #[test]
    fn reference_differs() {
        let a = example();
        let rendered = TextWriter.to_text(&a).unwrap();
        let path = env::temp_dir().join("authorlist_reference_differs.txt");
        fs::write(&path, "Cy Noor¹, Ann Lee²\n").unwrap();
        let res = check_reference(&rendered, path.to_str().unwrap());
        assert!(matches!(res, Err(AuthorlistError::ReferenceMismatch { .. })));
    }

    #[test]
    fn write_to_file() {
        let a = example();
        let path = env::temp_dir().join("authorlist_write_to_file.tex");
        let path_s = path.to_str().unwrap();
        write_output(&ScientificDataWriter, &a, Some(path_s)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            format!("{}\n", ScientificDataWriter.to_text(&a).unwrap())
        );
    }

    #[test]
    fn authorship_errors_convert() {
        let res: AuthorlistResult<WriterKind> =
            WriterKind::from_name("docx").map_err(AuthorlistError::from);
        assert!(matches!(res, Err(AuthorlistError::Processing { .. })));
    }
}
