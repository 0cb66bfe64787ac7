use snafu::ResultExt;

use crate::error::*;
use crate::model::{Author, Authorship, WIKIDATA_PREFIX};
use crate::writers::Writer;

pub const HEADER: [&str; 10] = [
    "Email",
    "Institution",
    "First Name",
    "Middle Name(s)/Initial(s)",
    "Last Name",
    "Suffix",
    "Corresponding Author",
    "Home Page URL",
    "Collaborative Group/Consortium",
    "ORCiD",
];

/// The tab-separated table accepted by the bulk author upload of bioRxiv.
///
/// Only the first institution of each author is kept. The corresponding
/// author is marked with `x`.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct BiorxivWriter;

impl Writer for BiorxivWriter {
    fn lines(&self, authorship: &Authorship) -> AuthorshipResult<Vec<String>> {
        let mut res: Vec<String> = vec![tsv_line(&HEADER)?];
        for author in authorship.authors() {
            let homepage = homepage(author);
            let row: [&str; 10] = [
                author.email.as_deref().unwrap_or(""),
                author
                    .institutions
                    .first()
                    .map(|i| i.name.as_str())
                    .unwrap_or(""),
                &author.first,
                author.middle.as_deref().unwrap_or(""),
                &author.last,
                "",
                if author.is_corresponding() { "x" } else { "" },
                homepage.as_deref().unwrap_or(""),
                "",
                author.orcid.as_deref().unwrap_or(""),
            ];
            res.push(tsv_line(&row)?);
        }
        Ok(res)
    }
}

/// The Wikidata page of the author if known, the declared homepage otherwise.
fn homepage(author: &Author) -> Option<String> {
    match &author.wikidata {
        Some(qid) => Some(format!("{}{}", WIKIDATA_PREFIX, qid)),
        None => author.homepage.clone(),
    }
}

/// One row, separated by tabs. Cells are only quoted when needed.
fn tsv_line(fields: &[&str]) -> AuthorshipResult<String> {
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);
        writer.write_record(fields).context(FormattingTsvSnafu {})?;
        writer.flush().context(WritingOutputSnafu {})?;
    }
    let line = String::from_utf8_lossy(&buffer);
    Ok(line.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::test_utils::*;
    use std::sync::Arc;

    #[test]
    fn header_and_rows() {
        let lines = BiorxivWriter.lines(&example()).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER.join("\t"));
        assert_eq!(lines[1], "ann@example.org\tAcme\tAnn\t\tLee\t\t\t\t\t");
        assert_eq!(lines[3], "cy@example.org\tOther U\tCy\t\tNoor\t\tx\t\t\t");
    }

    #[test]
    fn first_institution_and_homepage() {
        let a = authorship(&[("Ann", "B.", "Lee", "", &["Acme", "Other U"])]);
        let mut author = a.authors()[0].clone();
        author.wikidata = Some("Q47475003".to_string());
        author.orcid = Some("0000-0003-4423-4370".to_string());
        let a = crate::model::Authorship::new(vec![author], a.institutions().to_vec());
        let lines = BiorxivWriter.lines(&a).unwrap();
        let cells: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[1], "Acme");
        assert_eq!(cells[3], "B.");
        assert_eq!(cells[7], "https://www.wikidata.org/wiki/Q47475003");
        assert_eq!(cells[9], "0000-0003-4423-4370");
        assert_eq!(a.institutions().len(), 2);
        assert!(Arc::ptr_eq(&a.institutions()[0], &a.authors()[0].institutions[0]));
    }

    #[test]
    fn quoting() {
        assert_eq!(tsv_line(&["a b", "c\td"]).unwrap(), "a b\t\"c\td\"");
    }
}
