use std::fmt::Display;

use crate::error::*;
use crate::model::Authorship;
use crate::table::Table;

pub mod hoyt;
pub mod obo;

pub use hoyt::HoytReader;
pub use obo::OboReader;

/// Something that produces an authorship.
pub trait Reader {
    fn authorship(&self) -> AuthorshipResult<Authorship>;
}

/// A reader for an authorship that has already been assembled.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PreparedReader {
    authorship: Authorship,
}

impl PreparedReader {
    pub fn new(authorship: Authorship) -> PreparedReader {
        PreparedReader { authorship }
    }
}

impl Reader for PreparedReader {
    fn authorship(&self) -> AuthorshipResult<Authorship> {
        Ok(self.authorship.clone())
    }
}

/// The layouts of spreadsheets that can be read.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ReaderKind {
    /// One row per author, columns at fixed positions, up to two affiliations.
    Hoyt,
    /// Named author columns, institution codes resolved in the last two columns.
    Obo,
}

impl ReaderKind {
    pub const ALL: [ReaderKind; 2] = [ReaderKind::Hoyt, ReaderKind::Obo];

    pub fn from_name(name: &str) -> AuthorshipResult<ReaderKind> {
        match name.trim().to_lowercase().as_str() {
            "hoyt" | "sheet" => Ok(ReaderKind::Hoyt),
            "obo" | "obo_sheet" => Ok(ReaderKind::Obo),
            _ => UnknownLayoutSnafu { name }.fail(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReaderKind::Hoyt => "hoyt",
            ReaderKind::Obo => "obo",
        }
    }

    /// Builds the reader for this layout over a table.
    ///
    /// `sort_middle_authors` only matters for the Hoyt layout: the OBO layout
    /// keeps the order of the input.
    pub fn reader(&self, table: Table, sort_middle_authors: bool) -> Box<dyn Reader> {
        match self {
            ReaderKind::Hoyt => Box::new(
                HoytReader::new(table).sort_middle_authors(sort_middle_authors),
            ),
            ReaderKind::Obo => Box::new(OboReader::new(table)),
        }
    }
}

impl Display for ReaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for kind in ReaderKind::ALL {
            assert_eq!(ReaderKind::from_name(kind.name()).unwrap(), kind);
        }
        assert_eq!(ReaderKind::from_name("OBO").unwrap(), ReaderKind::Obo);
        assert!(matches!(
            ReaderKind::from_name("pandas"),
            Err(AuthorshipError::UnknownLayout { .. })
        ));
    }

    #[test]
    fn prepared() {
        let a = Authorship::new(vec![], vec![]);
        let r = PreparedReader::new(a.clone());
        assert_eq!(r.authorship().unwrap(), a);
    }
}
