// Reader for the fixed-column layout: one row per author, up to two affiliations.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use snafu::OptionExt;

use crate::error::*;
use crate::model::*;
use crate::ordering::sort_authors;
use crate::readers::Reader;
use crate::table::{Row, Table};

const FIRST: usize = 0;
const MIDDLE: usize = 1;
const LAST: usize = 2;
const ROLE: usize = 3;
const EMAIL: usize = 4;
const ORCID: usize = 5;
const WIKIDATA: usize = 6;
const TWITTER: usize = 7;
/// (name, address, ROR or Wikidata URI) for each affiliation slot.
const AFFILIATIONS: [(usize, usize, usize); 2] = [(8, 9, 10), (11, 12, 13)];
const CONFLICT: usize = 14;

/// Reads an authorship from a sheet with the following columns, in this order:
///
/// | position | content |
/// |---|---|
/// | 0, 1, 2 | first name, middle name (optional), last name |
/// | 3 | role: `Lead`, `Senior` or anything else |
/// | 4, 5 | email, ORCID |
/// | 6 | Wikidata URL or QID |
/// | 7 | Twitter handle (with or without `@`) |
/// | 8, 9, 10 | first affiliation: name, address, ROR or Wikidata URL |
/// | 11, 12, 13 | second affiliation: name, address, ROR or Wikidata URL |
/// | 14 | conflict of interest |
///
/// The names in the header are not significant. The authors are sorted: lead
/// authors first, senior authors last, the others in between, each group by
/// last name.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HoytReader {
    table: Table,
    sort_middle: bool,
}

impl HoytReader {
    pub fn new(table: Table) -> HoytReader {
        HoytReader {
            table,
            sort_middle: true,
        }
    }

    /// When disabled, the authors keep the order of the sheet within each group.
    /// Lead and senior authors are still moved to the front and to the back.
    pub fn sort_middle_authors(self, sort_middle: bool) -> HoytReader {
        HoytReader {
            table: self.table,
            sort_middle,
        }
    }
}

impl Reader for HoytReader {
    fn authorship(&self) -> AuthorshipResult<Authorship> {
        read_hoyt(&self.table, self.sort_middle)
    }
}

fn read_hoyt(table: &Table, sort_middle: bool) -> AuthorshipResult<Authorship> {
    let mut rows: Vec<Row> = Vec::new();
    for row in table.rows() {
        if row.is_blank() {
            debug!("read_hoyt: skipping blank row {}", row.lineno());
        } else {
            rows.push(row);
        }
    }
    sort_authors(&mut rows, sort_middle, |row| {
        (Role::parse(row.at(ROLE)), row.at(LAST).to_string())
    });
    debug!(
        "read_hoyt: sorted rows: {:?}",
        rows.iter().map(|r| r.lineno()).collect::<Vec<usize>>()
    );

    // Name -> position in the list of institutions.
    // A repeated name overwrites the address and the identifiers, but keeps
    // its first position.
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut institutions: Vec<Institution> = Vec::new();
    for row in rows.iter() {
        for (name_idx, address_idx, uri_idx) in AFFILIATIONS {
            let name = match row.at_opt(name_idx) {
                Some(name) => name,
                None => continue,
            };
            let institution =
                Institution::from_uri(name, row.at_opt(address_idx), row.at_opt(uri_idx));
            match positions.get(name) {
                Some(pos) => {
                    institutions[*pos] = institution;
                }
                None => {
                    positions.insert(name.to_string(), institutions.len());
                    institutions.push(institution);
                }
            }
        }
    }
    let institutions: Vec<Arc<Institution>> = institutions.into_iter().map(Arc::new).collect();

    let mut authors: Vec<Author> = Vec::new();
    for row in rows.iter() {
        let author = read_author(row, &positions, &institutions)?;
        debug!("read_hoyt: row {}: {:?}", row.lineno(), author.name());
        authors.push(author);
    }
    info!(
        "read_hoyt: {} authors, {} institutions",
        authors.len(),
        institutions.len()
    );
    Ok(Authorship::new(authors, institutions))
}

fn read_author(
    row: &Row,
    positions: &HashMap<String, usize>,
    institutions: &[Arc<Institution>],
) -> AuthorshipResult<Author> {
    let lineno = row.lineno();
    let first = row.at_opt(FIRST).context(MalformedRowSnafu {
        lineno,
        field: "first name",
    })?;
    let last = row.at_opt(LAST).context(MalformedRowSnafu {
        lineno,
        field: "last name",
    })?;

    let author_institutions: Vec<Arc<Institution>> = AFFILIATIONS
        .iter()
        .filter_map(|(name_idx, _, _)| row.at_opt(*name_idx))
        .filter_map(|name| positions.get(name))
        .map(|pos| institutions[*pos].clone())
        .collect();

    Ok(Author {
        first: first.to_string(),
        middle: row.at_opt(MIDDLE).map(|s| s.to_string()),
        last: last.to_string(),
        email: row.at_opt(EMAIL).map(|s| s.to_string()),
        orcid: row.at_opt(ORCID).map(|s| s.to_string()),
        wikidata: row.at_opt(WIKIDATA).map(strip_wikidata),
        twitter: row.at_opt(TWITTER).map(strip_twitter),
        homepage: None,
        role: Role::parse(row.at(ROLE)),
        conflict: row.at_opt(CONFLICT).map(|s| s.to_string()),
        institutions: author_institutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<&'static str> {
        vec![
            "First",
            "Middle",
            "Last",
            "Role",
            "Email",
            "ORCID",
            "Wikidata",
            "Twitter",
            "Affiliation",
            "Affiliation Address",
            "Affiliation ROR/Wikidata",
            "Affiliation 2",
            "Affiliation 2 Address",
            "Affiliation 2 ROR/Wikidata",
            "Conflicts",
        ]
    }

    fn table(rows: &[&[&str]]) -> Table {
        Table::from_strs(&header(), rows)
    }

    #[test]
    fn read_and_sort() {
        let _ = env_logger::builder().is_test(true).try_init();
        let t = table(&[
            &["Cy", "", "Noor", "Senior", "cy@example.org", "", "", "", "Other U"],
            &["Bo", "", "Kim", "", "", "", "", "", "Acme"],
            &[
                "Ann",
                "",
                "Lee",
                "Lead",
                "ann@example.org",
                "0000-0003-4423-4370",
                "https://www.wikidata.org/wiki/Q47475003",
                "@annlee",
                "Acme",
                "1 Main St",
                "https://ror.org/0abc123",
                "",
                "",
                "",
                "None",
            ],
        ]);
        let a = HoytReader::new(t).authorship().unwrap();
        let names: Vec<String> = a.authors().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Ann Lee", "Bo Kim", "Cy Noor"]);

        let ann = &a.authors()[0];
        assert_eq!(ann.role, Some(Role::Lead));
        assert_eq!(ann.wikidata.as_deref(), Some("Q47475003"));
        assert_eq!(ann.twitter.as_deref(), Some("annlee"));
        assert_eq!(ann.conflict.as_deref(), Some("None"));
        assert_eq!(ann.middle, None);
        assert_eq!(ann.institutions.len(), 1);
        assert_eq!(ann.institutions[0].ror.as_deref(), Some("0abc123"));
        assert!(a.authors()[2].is_corresponding());
        assert!(!ann.is_corresponding());

        // First seen order, after sorting.
        let inst: Vec<&str> = a.institutions().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(inst, vec!["Acme", "Other U"]);
    }

    #[test]
    fn dedup_by_name() {
        let t = table(&[
            &["Ann", "", "Lee", "", "", "", "", "", "Acme University", "Here"],
            &["Bo", "", "Kim", "", "", "", "", "", "Acme University", "There"],
        ]);
        let a = HoytReader::new(t).authorship().unwrap();
        assert_eq!(a.institutions().len(), 1);
        // The last address wins
        assert_eq!(a.institutions()[0].address.as_deref(), Some("There"));
        // Both authors share the same institution.
        assert!(Arc::ptr_eq(
            &a.authors()[0].institutions[0],
            &a.authors()[1].institutions[0]
        ));
    }

    #[test]
    fn two_affiliations() {
        let t = table(&[&[
            "Ann", "Q", "Lee", "", "", "", "", "", "Acme", "", "", "Other U", "",
            "https://www.wikidata.org/wiki/Q49108",
        ]]);
        let a = HoytReader::new(t).authorship().unwrap();
        let ann = &a.authors()[0];
        assert_eq!(ann.name(), "Ann Q Lee");
        let inst: Vec<&str> = ann.institutions.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(inst, vec!["Acme", "Other U"]);
        assert_eq!(ann.institutions[1].wikidata.as_deref(), Some("Q49108"));
        assert_eq!(ann.institutions[1].ror, None);
    }

    #[test]
    fn middle_authors_keep_order() {
        let t = table(&[
            &["Zoe", "", "Zhu", ""],
            &["Sam", "", "Senn", "Senior"],
            &["Al", "", "Abe", ""],
            &["Lu", "", "Lam", "Lead"],
        ]);
        let sorted = HoytReader::new(t.clone()).authorship().unwrap();
        let lasts: Vec<&str> = sorted.authors().iter().map(|a| a.last.as_str()).collect();
        assert_eq!(lasts, vec!["Lam", "Abe", "Zhu", "Senn"]);

        let kept = HoytReader::new(t)
            .sort_middle_authors(false)
            .authorship()
            .unwrap();
        let lasts: Vec<&str> = kept.authors().iter().map(|a| a.last.as_str()).collect();
        assert_eq!(lasts, vec!["Lam", "Zhu", "Abe", "Senn"]);
    }

    #[test]
    fn several_leads_sorted_by_last_name() {
        let t = table(&[
            &["Yan", "", "Yu", "Senior"],
            &["Zoe", "", "Zhu", "Lead"],
            &["Bea", "", "Bo", "Senior"],
            &["Al", "", "Abe", "Lead"],
            &["Kai", "", "Kim", ""],
        ]);
        let a = HoytReader::new(t).authorship().unwrap();
        let lasts: Vec<&str> = a.authors().iter().map(|a| a.last.as_str()).collect();
        assert_eq!(lasts, vec!["Abe", "Zhu", "Kim", "Bo", "Yu"]);
    }

    #[test]
    fn blank_last_name() {
        let t = table(&[&["Ann", "", "Lee"], &["Bo", "", " "]]);
        let res = HoytReader::new(t).authorship();
        assert!(matches!(
            res,
            Err(AuthorshipError::MalformedRow { lineno: 2, .. })
        ));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let t = table(&[&["Ann", "", "Lee"], &["", "", ""], &[]]);
        let a = HoytReader::new(t).authorship().unwrap();
        assert_eq!(a.authors().len(), 1);
        assert!(a.authors()[0].institutions.is_empty());
    }
}
