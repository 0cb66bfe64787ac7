use snafu::Snafu;

/// Errors that prevent an author list from being read or rendered.
///
/// Reading errors abort the whole ingestion. Rendering errors only concern
/// the writer that raised them: the [`crate::Authorship`] itself is never
/// modified by a writer.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AuthorshipError {
    /// A required field (first or last name) is blank.
    #[snafu(display("row {lineno}: the required field '{field}' is blank"))]
    MalformedRow { lineno: usize, field: String },

    /// An author has no institution left after resolving the institution codes.
    #[snafu(display("no affiliation for {name}"))]
    MissingAffiliation { name: String },

    /// An institution code that is not an integer.
    #[snafu(display("row {lineno}: could not read institution code {code:?}"))]
    InvalidInstitutionCode { lineno: usize, code: String },

    /// A named column is absent from the header of the table.
    #[snafu(display("cannot find column '{column}' in the header"))]
    MissingColumn { column: String },

    /// The writer needs a corresponding author (role `Senior`) and none was found.
    #[snafu(display("the writer {writer} needs a corresponding author, none was found"))]
    NoCorrespondingAuthor { writer: String },

    /// The writer needs at least one author.
    #[snafu(display("the writer {writer} needs at least one author"))]
    EmptyAuthorship { writer: String },

    /// The corresponding author has no email to use as a contact.
    #[snafu(display("the corresponding author {name} has no email"))]
    MissingContactEmail { name: String },

    #[snafu(display("unknown writer '{name}'"))]
    UnknownWriter { name: String },

    #[snafu(display("unknown layout '{name}'"))]
    UnknownLayout { name: String },

    #[snafu(display("could not write the output"))]
    WritingOutput { source: std::io::Error },

    #[snafu(display("could not format a tab-separated row"))]
    FormattingTsv { source: csv::Error },
}

pub type AuthorshipResult<T> = Result<T, AuthorshipError>;
