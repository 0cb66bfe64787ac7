use crate::error::*;
use crate::model::{Authorship, ORCID_PREFIX};
use crate::writers::Writer;

/// The `authors` section of a `CITATION.cff` file, as read by GitHub.
///
/// ```text
/// authors:
/// - family-names: "Lee"
///   given-names: "Ann"
///   orcid: "https://orcid.org/0000-0003-4423-4370"
/// ```
///
/// The `orcid` line is left out for authors without an ORCID, rather than
/// written with an empty value.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct CitationCffWriter;

impl Writer for CitationCffWriter {
    fn lines(&self, authorship: &Authorship) -> AuthorshipResult<Vec<String>> {
        let mut res: Vec<String> = vec!["authors:".to_string()];
        for author in authorship.authors() {
            res.push(format!("- family-names: \"{}\"", quoted(&author.last)));
            res.push(format!("  given-names: \"{}\"", quoted(&author.given_names())));
            if let Some(orcid) = &author.orcid {
                res.push(format!("  orcid: \"{}{}\"", ORCID_PREFIX, quoted(orcid)));
            }
        }
        Ok(res)
    }
}

/// Escapes a value for a double-quoted YAML string.
fn quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
