use std::fmt::Display;
use std::io::Write;

use snafu::ResultExt;

use crate::error::*;
use crate::model::Authorship;

pub mod biorxiv;
pub mod citation_cff;
pub mod oxford_bioinformatics;
pub mod scientific_data;
pub mod text;

pub use biorxiv::BiorxivWriter;
pub use citation_cff::CitationCffWriter;
pub use oxford_bioinformatics::OxfordBioinformaticsWriter;
pub use scientific_data::ScientificDataWriter;
pub use text::TextWriter;

/// Renders an authorship as lines of text.
///
/// Writers hold no state: rendering the same authorship twice gives the
/// same lines. All the lines are produced before being returned, a writer
/// that fails does not leave partial output behind.
pub trait Writer {
    /// The lines of the rendering, without line terminators.
    fn lines(&self, authorship: &Authorship) -> AuthorshipResult<Vec<String>>;

    /// The lines joined by newlines.
    fn to_text(&self, authorship: &Authorship) -> AuthorshipResult<String> {
        Ok(self.lines(authorship)?.join("\n"))
    }

    /// Writes all the lines to a sink, each followed by a newline.
    fn write_to(&self, authorship: &Authorship, out: &mut dyn Write) -> AuthorshipResult<()> {
        let lines = self.lines(authorship)?;
        for line in lines.iter() {
            writeln!(out, "{}", line).context(WritingOutputSnafu {})?;
        }
        out.flush().context(WritingOutputSnafu {})
    }
}

/// All the output formats.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum WriterKind {
    Text,
    Biorxiv,
    ScientificData,
    OxfordBioinformatics,
    CitationCff,
}

impl WriterKind {
    pub const ALL: [WriterKind; 5] = [
        WriterKind::Text,
        WriterKind::Biorxiv,
        WriterKind::ScientificData,
        WriterKind::OxfordBioinformatics,
        WriterKind::CitationCff,
    ];

    /// Finds a writer by name. Dashes and underscores are interchangeable and
    /// the case does not matter.
    pub fn from_name(name: &str) -> AuthorshipResult<WriterKind> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "text" | "txt" => Ok(WriterKind::Text),
            "biorxiv" => Ok(WriterKind::Biorxiv),
            "scientific_data" | "nature_scientific_data" => Ok(WriterKind::ScientificData),
            "oxford_bioinformatics" | "bioinformatics" => Ok(WriterKind::OxfordBioinformatics),
            "citation_cff" | "cff" => Ok(WriterKind::CitationCff),
            _ => UnknownWriterSnafu { name }.fail(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WriterKind::Text => "text",
            WriterKind::Biorxiv => "biorxiv",
            WriterKind::ScientificData => "scientific_data",
            WriterKind::OxfordBioinformatics => "oxford_bioinformatics",
            WriterKind::CitationCff => "citation_cff",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WriterKind::Text => "plain text with superscript affiliation numbers",
            WriterKind::Biorxiv => "tab-separated table for the bioRxiv bulk author upload",
            WriterKind::ScientificData => "LaTeX authblk commands (Nature Scientific Data)",
            WriterKind::OxfordBioinformatics => "LaTeX for the Oxford Bioinformatics template",
            WriterKind::CitationCff => "authors section of a CITATION.cff file",
        }
    }

    pub fn writer(&self) -> Box<dyn Writer> {
        match self {
            WriterKind::Text => Box::new(TextWriter),
            WriterKind::Biorxiv => Box::new(BiorxivWriter),
            WriterKind::ScientificData => Box::new(ScientificDataWriter),
            WriterKind::OxfordBioinformatics => Box::new(OxfordBioinformaticsWriter),
            WriterKind::CitationCff => Box::new(CitationCffWriter),
        }
    }
}

impl Display for WriterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for kind in WriterKind::ALL {
            assert_eq!(WriterKind::from_name(kind.name()).unwrap(), kind);
        }
        assert_eq!(
            WriterKind::from_name("Oxford-Bioinformatics").unwrap(),
            WriterKind::OxfordBioinformatics
        );
        assert!(matches!(
            WriterKind::from_name("docx"),
            Err(AuthorshipError::UnknownWriter { .. })
        ));
    }

    #[test]
    fn rendering_is_repeatable() {
        let a = test_utils::example();
        for kind in WriterKind::ALL {
            let w = kind.writer();
            assert_eq!(w.lines(&a).unwrap(), w.lines(&a).unwrap(), "{}", kind);
        }
    }

    #[test]
    fn write_to_sink() {
        let a = test_utils::example();
        let mut out: Vec<u8> = Vec::new();
        TextWriter.write_to(&a, &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s, format!("{}\n", TextWriter.to_text(&a).unwrap()));
    }

    #[test]
    fn failure_is_local_to_the_writer() {
        let a = test_utils::authorship(&[("Ann", "", "Lee", "Lead", &["Acme"])]);
        assert!(OxfordBioinformaticsWriter.lines(&a).is_err());
        assert!(TextWriter.lines(&a).is_ok());
        assert_eq!(a.authors().len(), 1);
    }
}
