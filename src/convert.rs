//! KiCad to YY1 conversion driver.
//!
//! Reads placements one row at a time and writes each converted row
//! immediately, preserving input order. The input header is validated
//! before the output is created, so a missing or empty input never leaves
//! a truncated output file behind.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{ConvertError, ConvertResult};
use crate::kicad::PlacementReader;
use crate::yy1::{Yy1Row, Yy1Writer};

/// Summary of a completed file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Source placement file.
    pub input: PathBuf,
    /// Written YY1 file.
    pub output: PathBuf,
    /// Number of component rows written after the preamble.
    pub components: usize,
}

impl ConversionReport {
    /// The success line shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Successfully converted '{}' to '{}'",
            self.input.display(),
            self.output.display()
        )
    }
}

/// Converts a KiCad placement stream into a YY1 stream.
///
/// Returns the destination writer and the number of component rows.
///
/// # Errors
///
/// Returns an error if the input has no header row, or if reading or
/// writing fails. Output already written before a failure is left as-is.
pub fn convert<R: Read, W: Write>(reader: R, writer: W) -> ConvertResult<(W, usize)> {
    let placements = PlacementReader::new(reader)?;
    transfer(placements, writer)
}

/// Converts the placement file at `input` and writes the result to `output`.
///
/// # Errors
///
/// - [`ConvertError::InputNotFound`] if `input` does not exist
/// - [`ConvertError::InputRead`] if `input` cannot be opened
/// - [`ConvertError::EmptyOrHeaderlessInput`] if `input` has no header row
/// - [`ConvertError::OutputCreate`] if `output` cannot be created
/// - [`ConvertError::Csv`] or [`ConvertError::Io`] on failure mid-stream
pub fn convert_file(input: &Path, output: &Path) -> ConvertResult<ConversionReport> {
    let source = File::open(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::input_not_found(input),
        _ => ConvertError::input_read(input, e),
    })?;
    let placements = PlacementReader::new(source).map_err(|e| e.with_input_path(input))?;

    let destination =
        File::create(output).map_err(|e| ConvertError::output_create(output, e))?;
    debug!(path = %output.display(), "Created output file");

    let (_, components) = transfer(placements, destination)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        components,
        "Conversion complete"
    );

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        components,
    })
}

fn transfer<R: Read, W: Write>(
    mut placements: PlacementReader<R>,
    writer: W,
) -> ConvertResult<(W, usize)> {
    let mut output = Yy1Writer::new(writer)?;
    let mut record = StringRecord::new();

    while placements.read_record(&mut record)? {
        let placement = placements.header().placement(&record);
        output.write_row(&Yy1Row::from_placement(&placement))?;
    }

    let components = output.rows_written();
    debug!(components, "Reached end of placement input");
    Ok((output.finish()?, components))
}
