use crate::io::error::Error;
use crate::model::assignment::Assignment;
use crate::model::types::SecondaryStructure;
use std::io::Write;

const LEGEND_ORDER: [SecondaryStructure; 7] = [
    SecondaryStructure::ParallelStrand,
    SecondaryStructure::AntiparallelStrand,
    SecondaryStructure::Coil,
    SecondaryStructure::AlphaHelix,
    SecondaryStructure::ThreeTenHelix,
    SecondaryStructure::PiHelix,
    SecondaryStructure::Turn,
];

const HEADER_WIDTH: usize = 50;

/// Provenance printed above a text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub program: String,
    pub version: String,
    pub input: String,
}

impl ReportHeader {
    pub fn new(
        program: impl Into<String>,
        version: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            version: version.into(),
            input: input.into(),
        }
    }
}

/// Writes one `id name code` line per residue, optionally preceded by a header block
/// with provenance and the label legend.
pub fn write_text<W: Write>(
    writer: W,
    assignment: &Assignment,
    header: Option<&ReportHeader>,
) -> Result<(), Error> {
    let mut ctx = TextContext { writer };

    if let Some(header) = header {
        ctx.write_header(header, &assignment.chain_id)?;
    }
    ctx.write_records(assignment)?;
    ctx.writer.flush().map_err(|e| Error::from_io(e, None))
}

/// Writes the assignment as a pretty-printed JSON document.
pub fn write_json<W: Write>(mut writer: W, assignment: &Assignment) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, assignment)
        .map_err(|e| Error::serialize(assignment.chain_id.as_str(), e))?;
    writeln!(writer).map_err(|e| Error::from_io(e, None))
}

struct TextContext<W> {
    writer: W,
}

impl<W: Write> TextContext<W> {
    fn write_header(&mut self, header: &ReportHeader, chain_id: &str) -> Result<(), Error> {
        let delimiter = "=".repeat(HEADER_WIDTH);
        let separator = "-".repeat(HEADER_WIDTH);

        self.line(&delimiter)?;
        self.line(&format!("Program : {}", header.program))?;
        self.line(&format!("Version : {}", header.version))?;
        self.line(&format!("Input file : {}", header.input))?;
        self.line(&format!("Chain : {}", chain_id))?;
        self.line(&separator)?;
        for ss in LEGEND_ORDER {
            self.line(&format!("{} : {}", ss.code(), ss.name()))?;
        }
        self.line(&delimiter)
    }

    fn write_records(&mut self, assignment: &Assignment) -> Result<(), Error> {
        for record in assignment {
            writeln!(
                self.writer,
                "{:<6} {:<6} {:<6}",
                record.id,
                record.name,
                record.structure.code()
            )
            .map_err(|e| Error::from_io(e, None))?;
        }
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.writer, "{}", text).map_err(|e| Error::from_io(e, None))
    }
}
