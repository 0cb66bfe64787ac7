// Reader for the OBO layout: named author columns and a separate table of institution codes.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use snafu::{ensure, OptionExt};

use crate::error::*;
use crate::model::*;
use crate::readers::Reader;
use crate::table::{Row, Table};

pub const FIRST_NAME: &str = "First name";
pub const MIDDLE_NAME: &str = "Middle (optional)";
pub const LAST_NAME: &str = "Last name";
pub const POSITION: &str = "Author Position";
pub const EMAIL: &str = "Email";
pub const ORCID: &str = "ORCID";
pub const WIKIDATA: &str = "Wikidata";
pub const TWITTER: &str = "Twitter";
pub const ORGANIZATIONS: &str = "Organization + location (will separate later)";

/// Reads an authorship from a sheet in the layout used by the OBO Foundry papers.
///
/// The authors are described by named columns (`First name`, `Last name`,
/// `Email`, ...). The column `Organization + location (will separate later)`
/// holds the comma-separated codes of the institutions of each author.
///
/// The last two columns of the sheet are a separate table mapping each integer
/// code to the name of an institution.
///
/// The order of the rows is kept as is.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct OboReader {
    table: Table,
}

impl OboReader {
    pub fn new(table: Table) -> OboReader {
        OboReader { table }
    }
}

impl Reader for OboReader {
    fn authorship(&self) -> AuthorshipResult<Authorship> {
        read_obo(&self.table)
    }
}

fn read_obo(table: &Table) -> AuthorshipResult<Authorship> {
    for column in [FIRST_NAME, LAST_NAME, ORGANIZATIONS] {
        table.column(column)?;
    }
    let (code_to_institution, institutions) = read_codes(table)?;
    debug!("read_obo: institution codes: {:?}", code_to_institution.keys());

    let mut authors: Vec<Author> = Vec::new();
    for row in table.rows() {
        if row.get_opt(FIRST_NAME)?.is_none() {
            continue;
        }
        let author = read_author(&row, &code_to_institution)?;
        debug!("read_obo: row {}: {:?}", row.lineno(), author.name());
        authors.push(author);
    }
    info!(
        "read_obo: {} authors, {} institutions",
        authors.len(),
        institutions.len()
    );
    Ok(Authorship::new(authors, institutions))
}

type CodeTable = HashMap<i64, Arc<Institution>>;

/// Reads the table of codes found in the last two columns.
///
/// Returns the mapping from the codes and the institutions in the order of
/// the table, deduplicated by name.
fn read_codes(table: &Table) -> AuthorshipResult<(CodeTable, Vec<Arc<Institution>>)> {
    let num_cols = table.header().len();
    ensure!(
        num_cols >= 2,
        MissingColumnSnafu {
            column: "institution code"
        }
    );
    let (code_idx, name_idx) = (num_cols - 2, num_cols - 1);

    let mut code_to_institution: CodeTable = HashMap::new();
    let mut by_name: HashMap<String, Arc<Institution>> = HashMap::new();
    let mut institutions: Vec<Arc<Institution>> = Vec::new();
    for row in table.rows() {
        let code_s = match row.at_opt(code_idx) {
            Some(s) => s,
            None => continue,
        };
        let code = parse_code(code_s, row.lineno())?;
        let name = row.at_opt(name_idx).context(MalformedRowSnafu {
            lineno: row.lineno(),
            field: "institution",
        })?;
        let institution = by_name
            .entry(name.to_string())
            .or_insert_with(|| {
                // The address is not separated from the name for now.
                let inst = Arc::new(Institution::named(name));
                institutions.push(inst.clone());
                inst
            })
            .clone();
        code_to_institution.insert(code, institution);
    }
    Ok((code_to_institution, institutions))
}

fn parse_code(s: &str, lineno: usize) -> AuthorshipResult<i64> {
    let s = s.trim();
    if let Ok(x) = s.parse::<i64>() {
        return Ok(x);
    }
    // Spreadsheets like to store integers as floats.
    match s.parse::<f64>() {
        Ok(x) if x.fract() == 0.0 => Ok(x as i64),
        _ => InvalidInstitutionCodeSnafu { lineno, code: s }.fail(),
    }
}

fn read_author(row: &Row, code_to_institution: &CodeTable) -> AuthorshipResult<Author> {
    let lineno = row.lineno();
    let first = row.get_opt(FIRST_NAME)?.context(MalformedRowSnafu {
        lineno,
        field: FIRST_NAME,
    })?;
    let last = row.get_opt(LAST_NAME)?.context(MalformedRowSnafu {
        lineno,
        field: LAST_NAME,
    })?;

    let mut institutions: Vec<Arc<Institution>> = Vec::new();
    for code_s in row.get(ORGANIZATIONS)?.split(',') {
        if code_s.trim().is_empty() {
            continue;
        }
        let code = parse_code(code_s, lineno)?;
        match code_to_institution.get(&code) {
            Some(inst) => institutions.push(inst.clone()),
            None => {
                warn!("missing organization code {} for {} {}", code, first, last);
            }
        }
    }
    ensure!(
        !institutions.is_empty(),
        MissingAffiliationSnafu {
            name: format!("{} {}", first, last)
        }
    );

    Ok(Author {
        first: first.to_string(),
        middle: row.get_opt(MIDDLE_NAME)?.map(|s| s.to_string()),
        last: last.to_string(),
        email: row.get_opt(EMAIL)?.map(|s| s.to_string()),
        orcid: row.get_opt(ORCID)?.map(|s| s.to_string()),
        wikidata: row.get_opt(WIKIDATA)?.map(strip_wikidata),
        twitter: row.get_opt(TWITTER)?.map(strip_twitter),
        homepage: None,
        role: row.lookup(POSITION).and_then(Role::parse),
        conflict: None,
        institutions,
    })
}
