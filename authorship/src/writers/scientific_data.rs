use crate::error::*;
use crate::model::{Author, Authorship};
use crate::numbering::AffiliationNumbering;
use crate::writers::Writer;

/// LaTeX commands of the `authblk` package, as used in the Nature Scientific Data template.
///
/// ```text
/// \author[1]{Ann Lee}
/// \author[1,2,*]{Cy Noor}
/// \affil[1]{Acme}
/// \affil[2]{Other U}
/// \affil[*]{corresponding author(s): Cy Noor (cy@example.org)}
/// ```
///
/// The senior author is the corresponding author. If there are several senior
/// authors, the last one is the corresponding author. Without a senior author
/// the `\affil[*]` line is left out instead of naming nobody, and without an
/// email the contact is only the name.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct ScientificDataWriter;

impl Writer for ScientificDataWriter {
    fn lines(&self, authorship: &Authorship) -> AuthorshipResult<Vec<String>> {
        let numbering = AffiliationNumbering::from_authors(authorship.authors());
        let mut corresponding: Option<&Author> = None;
        let mut res: Vec<String> = Vec::new();
        for author in authorship.authors() {
            let mut marks: Vec<String> = numbering
                .author_numbers(author)
                .iter()
                .map(|n| n.to_string())
                .collect();
            if author.is_corresponding() {
                marks.push("*".to_string());
                corresponding = Some(author);
            }
            res.push(format!("\\author[{}]{{{}}}", marks.join(","), author.name()));
        }

        for (idx, name) in numbering.iter() {
            res.push(format!("\\affil[{}]{{{}}}", idx + 1, name));
        }

        if let Some(author) = corresponding {
            let contact = match &author.email {
                Some(email) => format!("{} ({})", author.name(), email),
                None => author.name(),
            };
            res.push(format!(
                "\\affil[*]{{corresponding author(s): {}}}",
                contact
            ));
        }
        Ok(res)
    }
}
