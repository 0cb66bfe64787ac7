use std::fs;
use std::path::{Path, PathBuf};

use authorship::{ReaderKind, WriterKind};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use snafu::prelude::*;

use crate::args::Args;
use crate::authorlist::io_common::Provider;
use crate::authorlist::*;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    pub provider: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    #[serde(rename = "sheetId")]
    pub sheet_id: Option<String>,
    pub gid: Option<JSValue>,
    #[serde(rename = "skipRows")]
    pub skip_rows: Option<JSValue>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    pub layout: Option<String>,
    #[serde(rename = "sortMiddleAuthors")]
    pub sort_middle_authors: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub writer: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthorlistConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the table of authors comes from.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum InputSource {
    Delimited { path: String, delimiter: u8 },
    Excel {
        path: String,
        worksheet: Option<String>,
    },
    GoogleSheets { sheet_id: String, gid: String },
}

/// The settings of a run, once the configuration file and the command line
/// are merged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Settings {
    pub source: InputSource,
    pub skip_rows: usize,
    pub layout: ReaderKind,
    pub sort_middle_authors: bool,
    pub writer: WriterKind,
    /// None for the standard output.
    pub output: Option<String>,
    pub reference: Option<String>,
}

pub fn parse_config(content: &str) -> AuthorlistResult<AuthorlistConfig> {
    serde_json::from_str(content).context(ParsingJsonSnafu {})
}

pub fn read_config(path: &str) -> AuthorlistResult<AuthorlistConfig> {
    let content = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    parse_config(&content)
}

/// Reads the configuration file, if any, and merges it with the command line.
pub fn read_settings(args: &Args) -> AuthorlistResult<Settings> {
    match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            debug!("read_settings: config: {:?}", config);
            let root = Path::new(config_path).parent();
            merge_settings(&config, root, args)
        }
        None => merge_settings(&AuthorlistConfig::default(), None, args),
    }
}

/// The paths in the configuration file are relative to the directory of that file.
fn resolve_path(root: Option<&Path>, path: &str) -> String {
    let p = Path::new(path);
    match root {
        Some(root) if p.is_relative() => {
            let full: PathBuf = root.join(p);
            full.to_string_lossy().to_string()
        }
        _ => path.to_string(),
    }
}

fn read_js_int(x: &Option<JSValue>, key: &str) -> AuthorlistResult<Option<usize>> {
    match x {
        None | Some(JSValue::Null) => Ok(None),
        Some(JSValue::Number(n)) => n
            .as_u64()
            .map(|x| Some(x as usize))
            .context(ParsingJsonNumberSnafu { key }),
        Some(JSValue::String(s)) => s
            .trim()
            .parse::<usize>()
            .ok()
            .map(Some)
            .context(ParsingJsonNumberSnafu { key }),
        _ => ParsingJsonNumberSnafu { key }.fail(),
    }
}

/// Sheet identifiers are integers, but they are sometimes quoted.
fn read_js_gid(x: &Option<JSValue>) -> AuthorlistResult<Option<String>> {
    match x {
        Some(JSValue::String(s)) => Ok(Some(s.trim().to_string())),
        _ => Ok(read_js_int(x, "gid")?.map(|x| x.to_string())),
    }
}

/// Options passed on the command line take precedence over the configuration.
pub fn merge_settings(
    config: &AuthorlistConfig,
    root: Option<&Path>,
    args: &Args,
) -> AuthorlistResult<Settings> {
    let src = &config.source;

    let input: Option<String> = match (&args.input, &src.file_path) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(path)) => Some(resolve_path(root, path)),
        (None, None) => None,
    };
    let sheet_id = args.sheet.clone().or_else(|| src.sheet_id.clone());

    let provider = match args.input_type.as_deref().or(src.provider.as_deref()) {
        Some(name) => Provider::from_name(name)?,
        None => match (&input, &sheet_id) {
            (Some(path), _) => Provider::guess(path),
            (None, Some(_)) => Provider::GoogleSheets,
            (None, None) => return MissingInputSnafu {}.fail(),
        },
    };
    debug!("merge_settings: provider: {:?}", provider);

    let source = match provider {
        Provider::Csv | Provider::Tsv => InputSource::Delimited {
            path: input.context(MissingInputSnafu {})?,
            delimiter: provider.delimiter(),
        },
        Provider::Excel => InputSource::Excel {
            path: input.context(MissingInputSnafu {})?,
            worksheet: args
                .excel_worksheet_name
                .clone()
                .or_else(|| src.excel_worksheet_name.clone()),
        },
        Provider::GoogleSheets => {
            let gid = match &args.gid {
                Some(gid) => gid.clone(),
                None => read_js_gid(&src.gid)?.unwrap_or_else(|| "0".to_string()),
            };
            InputSource::GoogleSheets {
                sheet_id: sheet_id.context(MissingSheetIdSnafu {})?,
                gid,
            }
        }
    };

    let skip_rows = match args.skip_rows {
        Some(x) => x,
        None => read_js_int(&src.skip_rows, "skipRows")?.unwrap_or(0),
    };

    let layout =
        ReaderKind::from_name(args.layout.as_deref().or(src.layout.as_deref()).unwrap_or("hoyt"))?;
    let sort_middle_authors = !args.no_sort_middle && src.sort_middle_authors.unwrap_or(true);

    let writer_name = args
        .writer
        .as_deref()
        .or(config.output.writer.as_deref())
        .unwrap_or("text");
    let writer = WriterKind::from_name(writer_name)?;

    let output = match (&args.out, &config.output.output_path) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(path)) => Some(resolve_path(root, path)),
        (None, None) => None,
    };

    Ok(Settings {
        source,
        skip_rows,
        layout,
        sort_middle_authors,
        writer,
        output,
        reference: args.reference.clone(),
    })
}
