use clap::Parser;

/// Generates author lists for papers from a spreadsheet of authors and affiliations.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A configuration file in JSON format. The options passed on the command
    /// line take precedence over the ones in this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The spreadsheet with the authors (CSV, TSV or Excel).
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (csv, tsv, excel or googleSheets) The type of the input. If not provided, it is guessed
    /// from the extension of the input file.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// The identifier of a Google Sheet to download, instead of reading a file.
    #[clap(long, value_parser)]
    pub sheet: Option<String>,

    /// (default 0) The identifier of the tab in the Google Sheet.
    #[clap(long, value_parser)]
    pub gid: Option<String>,

    /// (default 0) The number of rows to skip before the header row.
    #[clap(long, value_parser)]
    pub skip_rows: Option<usize>,

    /// When using an Excel file, the name of the worksheet to use. Defaults to the first worksheet.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (hoyt or obo, default hoyt) The layout of the spreadsheet.
    #[clap(short, long, value_parser)]
    pub layout: Option<String>,

    /// If passed as an argument, the authors keep the order of the spreadsheet within the lead,
    /// middle and senior groups instead of being sorted by last name.
    #[clap(long, takes_value = false)]
    pub no_sort_middle: bool,

    /// (default text) The output format. Use --list-writers to see all of them.
    #[clap(short, long, value_parser)]
    pub writer: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the author list. Defaults to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file with the expected output. If provided, authorlist checks that
    /// the generated author list matches the reference and shows the differences.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// Lists the output formats and exits.
    #[clap(long, takes_value = false)]
    pub list_writers: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
