use crate::error::*;
use crate::model::Authorship;
use crate::numbering::AffiliationNumbering;
use crate::writers::Writer;

/// Separates the affiliation numbers of an author.
pub const SEPARATOR: &str = "𝄒";

/// Plain text: one line with all the authors, the affiliation numbers in
/// superscript after each name, then the numbered list of affiliations.
///
/// ```text
/// Ann Lee¹, Bo Kim¹𝄒², Cy Noor²
///
/// 1. Acme
/// 2. Other U
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct TextWriter;

impl Writer for TextWriter {
    fn lines(&self, authorship: &Authorship) -> AuthorshipResult<Vec<String>> {
        let numbering = AffiliationNumbering::from_authors(authorship.authors());
        let names: Vec<String> = authorship
            .authors()
            .iter()
            .map(|author| {
                let numbers: Vec<String> = numbering
                    .author_numbers(author)
                    .into_iter()
                    .map(superscript)
                    .collect();
                format!("{}{}", author.name(), numbers.join(SEPARATOR))
            })
            .collect();

        let mut res: Vec<String> = vec![names.join(", "), String::new()];
        for (idx, name) in numbering.iter() {
            res.push(format!("{}. {}", idx + 1, name));
        }
        Ok(res)
    }
}

/// Writes a number with unicode superscript digits.
pub fn superscript(n: usize) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            x => x,
        })
        .collect()
}
