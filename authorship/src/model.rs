// ********* Canonical model ***********

use std::fmt::Display;
use std::sync::Arc;

pub const ROR_PREFIX: &str = "https://ror.org/";
pub const WIKIDATA_PREFIX: &str = "https://www.wikidata.org/wiki/";
pub const ORCID_PREFIX: &str = "https://orcid.org/";

/// An institution that authors are affiliated with.
///
/// The name is the identity of an institution: two institutions with the same
/// name are the same institution, even when their address or identifiers differ.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Institution {
    pub name: String,
    pub address: Option<String>,
    /// The ROR identifier, without the `https://ror.org/` prefix.
    pub ror: Option<String>,
    /// The Wikidata QID, without the Wikidata URL prefix.
    pub wikidata: Option<String>,
}

impl Institution {
    /// An institution known only by its free-text name.
    pub fn named(name: &str) -> Institution {
        Institution {
            name: name.to_string(),
            address: None,
            ror: None,
            wikidata: None,
        }
    }

    /// Builds an institution from the identifier URI found in a spreadsheet.
    ///
    /// The prefix of the URI decides which identifier is filled: a ROR URL
    /// sets `ror`, a Wikidata URL sets `wikidata`. Anything else is dropped.
    pub fn from_uri(name: &str, address: Option<&str>, uri: Option<&str>) -> Institution {
        let uri = uri.unwrap_or("");
        let (ror, wikidata) = if let Some(ror) = uri.strip_prefix(ROR_PREFIX) {
            (Some(ror.to_string()), None)
        } else if let Some(qid) = uri.strip_prefix(WIKIDATA_PREFIX) {
            (None, Some(qid.to_string()))
        } else {
            (None, None)
        };
        Institution {
            name: name.to_string(),
            address: address.map(|s| s.to_string()),
            ror,
            wikidata,
        }
    }
}

/// The role of an author. It controls the position in the author list
/// and who is the corresponding author.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Role {
    /// First author(s).
    Lead,
    /// Last author(s), also the corresponding author.
    Senior,
    /// Any other label found in the role column.
    Other(String),
}

impl Role {
    /// Reads a role from a cell. Blank cells have no role.
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim() {
            "" => None,
            "Lead" => Some(Role::Lead),
            "Senior" => Some(Role::Senior),
            x => Some(Role::Other(x.to_string())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Lead => write!(f, "Lead"),
            Role::Senior => write!(f, "Senior"),
            Role::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Author {
    pub first: String,
    pub middle: Option<String>,
    pub last: String,
    pub email: Option<String>,
    pub orcid: Option<String>,
    pub wikidata: Option<String>,
    /// The handle, without the leading `@`.
    pub twitter: Option<String>,
    pub homepage: Option<String>,
    pub role: Option<Role>,
    /// Free-text conflict of interest statement.
    pub conflict: Option<String>,
    /// Shared with the institutions of the enclosing [`Authorship`].
    pub institutions: Vec<Arc<Institution>>,
}

impl Author {
    /// The display name: `first middle last`, or `first last` without a middle name.
    pub fn name(&self) -> String {
        match self.middle.as_deref() {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first, middle, self.last)
            }
            _ => format!("{} {}", self.first, self.last),
        }
    }

    /// The given names: `first middle`, or `first` without a middle name.
    pub fn given_names(&self) -> String {
        match self.middle.as_deref() {
            Some(middle) if !middle.is_empty() => format!("{} {}", self.first, middle),
            _ => self.first.clone(),
        }
    }

    pub fn is_corresponding(&self) -> bool {
        self.role == Some(Role::Senior)
    }
}

/// A combination of authors and institutions for one document.
///
/// The order of the authors is the order in which they are rendered. It is
/// fixed when the authorship is built and never changes afterwards.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Authorship {
    authors: Vec<Author>,
    institutions: Vec<Arc<Institution>>,
}

impl Authorship {
    pub fn new(authors: Vec<Author>, institutions: Vec<Arc<Institution>>) -> Authorship {
        Authorship {
            authors,
            institutions,
        }
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All the institutions, deduplicated by name, in the order they were first seen.
    pub fn institutions(&self) -> &[Arc<Institution>] {
        &self.institutions
    }
}

/// Removes the Wikidata URL prefix of an identifier, if present.
pub fn strip_wikidata(s: &str) -> String {
    s.trim()
        .strip_prefix(WIKIDATA_PREFIX)
        .unwrap_or(s.trim())
        .to_string()
}

/// Removes the leading `@` of a handle, if present.
pub fn strip_twitter(s: &str) -> String {
    s.trim().strip_prefix('@').unwrap_or(s.trim()).to_string()
}
