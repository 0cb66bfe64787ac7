use snafu::OptionExt;

use crate::error::*;
use crate::model::{Author, Authorship};
use crate::numbering::AffiliationNumbering;
use crate::writers::Writer;

const NAME: &str = "oxford_bioinformatics";

/// LaTeX for the template of the Oxford Bioinformatics journal.
///
/// ```text
/// \author[Lee \textit{et~al}.]{%
///     Ann Lee\,$^{\text{\sfb 1}}$,
///     Cy Noor\,$^{\text{\sfb 2},*}$,
/// }
/// \address{%
///     $^{\text{\sf 1}}${Acme} \\
///     $^{\text{\sf 2}}${Other U} \\
/// }
/// \textbf{Contact:} \href{cy@example.org}{cy@example.org}\\
/// ```
///
/// The contact line needs a corresponding (senior) author with an email.
/// Rendering fails otherwise.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct OxfordBioinformaticsWriter;

impl Writer for OxfordBioinformaticsWriter {
    fn lines(&self, authorship: &Authorship) -> AuthorshipResult<Vec<String>> {
        let first = authorship
            .authors()
            .first()
            .context(EmptyAuthorshipSnafu { writer: NAME })?;
        let numbering = AffiliationNumbering::from_authors(authorship.authors());

        let mut corresponding: Option<&Author> = None;
        let mut author_lines: Vec<String> = Vec::new();
        for author in authorship.authors() {
            let mut marks: Vec<String> = numbering
                .author_numbers(author)
                .iter()
                .map(|n| format!("\\text{{\\sfb {}}}", n))
                .collect();
            if author.is_corresponding() {
                marks.push("*".to_string());
                corresponding = Some(author);
            }
            author_lines.push(format!(
                "    {}\\,$^{{{}}}$,",
                author.name(),
                marks.join(",")
            ));
        }

        let corresponding = corresponding.context(NoCorrespondingAuthorSnafu { writer: NAME })?;
        let email = corresponding
            .email
            .as_deref()
            .context(MissingContactEmailSnafu {
                name: corresponding.name(),
            })?;
        let email = escape_latex(email);

        let mut res: Vec<String> = Vec::new();
        res.push(format!("\\author[{} \\textit{{et~al}}.]{{%", first.last));
        res.extend(author_lines);
        res.push("}".to_string());
        res.push("\\address{%".to_string());
        for (idx, name) in numbering.iter() {
            res.push(format!("    $^{{\\text{{\\sf {}}}}}${{{}}} \\\\", idx + 1, name));
        }
        res.push("}".to_string());
        res.push(format!(
            "\\textbf{{Contact:}} \\href{{{}}}{{{}}}\\\\",
            email, email
        ));
        Ok(res)
    }
}

fn escape_latex(s: &str) -> String {
    s.replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::test_utils::*;

    #[test]
    fn full_output() {
        let lines = OxfordBioinformaticsWriter.lines(&example()).unwrap();
        assert_eq!(
            lines,
            vec![
                "\\author[Lee \\textit{et~al}.]{%",
                "    Ann Lee\\,$^{\\text{\\sfb 1}}$,",
                "    Bo Kim\\,$^{\\text{\\sfb 1}}$,",
                "    Cy Noor\\,$^{\\text{\\sfb 2},*}$,",
                "}",
                "\\address{%",
                "    $^{\\text{\\sf 1}}${Acme} \\\\",
                "    $^{\\text{\\sf 2}}${Other U} \\\\",
                "}",
                "\\textbf{Contact:} \\href{cy@example.org}{cy@example.org}\\\\",
            ]
        );
    }

    #[test]
    fn escaped_email() {
        let a = example();
        let mut authors = a.authors().to_vec();
        authors[2].email = Some("cy_noor@example.org".to_string());
        let a = Authorship::new(authors, a.institutions().to_vec());
        let lines = OxfordBioinformaticsWriter.lines(&a).unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "\\textbf{Contact:} \\href{cy\\_noor@example.org}{cy\\_noor@example.org}\\\\"
        );
    }

    #[test]
    fn no_corresponding_author() {
        let a = authorship(&[("Ann", "", "Lee", "Lead", &["Acme"])]);
        assert!(matches!(
            OxfordBioinformaticsWriter.lines(&a),
            Err(AuthorshipError::NoCorrespondingAuthor { .. })
        ));
    }

    #[test]
    fn no_email() {
        let a = example();
        let mut authors = a.authors().to_vec();
        authors[2].email = None;
        let a = Authorship::new(authors, a.institutions().to_vec());
        assert!(matches!(
            OxfordBioinformaticsWriter.lines(&a),
            Err(AuthorshipError::MissingContactEmail { .. })
        ));
    }

    #[test]
    fn no_authors() {
        let a = Authorship::new(vec![], vec![]);
        assert!(matches!(
            OxfordBioinformaticsWriter.lines(&a),
            Err(AuthorshipError::EmptyAuthorship { .. })
        ));
    }
}
