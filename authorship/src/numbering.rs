use std::collections::HashMap;

use crate::model::Author;

/// The numbering of the affiliations, as displayed next to the author names.
///
/// Institutions are numbered in the order they first appear when going through
/// the authors in display order. The name of the institution is the only key:
/// two authors with the same institution name share the same number.
///
/// The numbering is computed again by every writer that needs it. It is not
/// stored in the authorship.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct AffiliationNumbering {
    names: Vec<String>,
    indexes: HashMap<String, usize>,
}

impl AffiliationNumbering {
    pub fn from_authors(authors: &[Author]) -> AffiliationNumbering {
        let mut res = AffiliationNumbering::default();
        for author in authors {
            for institution in author.institutions.iter() {
                if !res.indexes.contains_key(&institution.name) {
                    res.indexes
                        .insert(institution.name.clone(), res.names.len());
                    res.names.push(institution.name.clone());
                }
            }
        }
        res
    }

    /// The 0-based index of an institution.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.indexes.get(name).cloned()
    }

    /// The number displayed for an institution (starting at 1).
    pub fn display(&self, name: &str) -> Option<usize> {
        self.index(name).map(|idx| idx + 1)
    }

    /// The display numbers of the institutions of one author, in the order of the author.
    pub fn author_numbers(&self, author: &Author) -> Vec<usize> {
        author
            .institutions
            .iter()
            .filter_map(|inst| self.display(&inst.name))
            .collect()
    }

    /// The (0-based index, name) pairs, by increasing index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(idx, s)| (idx, s.as_str()))
    }
}
