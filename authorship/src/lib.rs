/*!

Format author lists for academic texts and journal submissions.

The authors of a paper and their affiliations are usually collected in a
spreadsheet. This crate turns the rows of such a spreadsheet into an
[`Authorship`]: the ordered list of authors and the institutions they are
affiliated with. An authorship can then be rendered by one of the
[`writers`]: plain text, the bioRxiv bulk upload table, LaTeX for several
journal templates or the authors of a `CITATION.cff` file.

```
use authorship::{HoytReader, Reader, Table, TextWriter, Writer};

let table = Table::from_strs(
    &["First", "Middle", "Last", "Role", "Email", "ORCID", "Wikidata", "Twitter", "Affiliation"],
    &[
        &["Cy", "", "Noor", "Senior", "", "", "", "", "Other U"],
        &["Bo", "", "Kim", "", "", "", "", "", "Acme"],
        &["Ann", "", "Lee", "Lead", "", "", "", "", "Acme"],
    ],
);
let authorship = HoytReader::new(table).authorship()?;
assert_eq!(
    TextWriter.to_text(&authorship)?,
    "Ann Lee¹, Bo Kim¹, Cy Noor²\n\n1. Acme\n2. Other U"
);
# Ok::<(), authorship::AuthorshipError>(())
```

See the [manual] for the supported spreadsheet layouts and output formats.
*/

mod error;
mod model;
mod numbering;
mod table;

pub mod manual;
pub mod ordering;
pub mod readers;
pub mod writers;

pub use crate::error::*;
pub use crate::model::*;
pub use crate::numbering::AffiliationNumbering;
pub use crate::readers::{HoytReader, OboReader, PreparedReader, Reader, ReaderKind};
pub use crate::table::{Row, Table};
pub use crate::writers::{
    BiorxivWriter, CitationCffWriter, OxfordBioinformaticsWriter, ScientificDataWriter,
    TextWriter, Writer, WriterKind,
};
