//! Neoden YY1 placement file format.
//!
//! A YY1 file is a comma-separated table with a fixed preamble of machine
//! settings followed by one row per component:
//!
//! ```text
//! NEODEN,YY1,P&P FILE,,,,,,,,,
//! ,,,,,,,,,,,
//! PanelizedPCB,UnitLength,0,UnitWidth,0,Rows,1,Columns,1,,,
//! ...
//! Designator,Comment,Footprint,Mid X(mm),Mid Y(mm),Rotation,Head,FeederNo,...
//! R1,10k,0402,12.5,34.2,90,0,1,100,0,0,1,0
//! ```
//!
//! Preamble rows are 12 cells wide and component rows 13, so the writer is
//! configured as flexible. Records end with `\r\n`.

mod preamble;
mod row;

pub use preamble::{preamble_rows, PREAMBLE_WIDTH};
pub use row::{parse_rotation, Yy1Column, Yy1Row, COLUMN_COUNT};

use std::io::Write;

use tracing::trace;

use crate::error::{ConvertError, ConvertResult};

/// Streaming writer for YY1 placement files.
///
/// The preamble is written when the writer is created; component rows are
/// appended one at a time with [`Yy1Writer::write_row`].
pub struct Yy1Writer<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> Yy1Writer<W> {
    /// Creates a writer and emits the fixed preamble.
    ///
    /// # Errors
    ///
    /// Returns an error if the preamble cannot be written.
    pub fn new(writer: W) -> ConvertResult<Self> {
        let mut inner = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        for row in preamble_rows() {
            inner.write_record(&row)?;
        }

        Ok(Self {
            inner,
            rows_written: 0,
        })
    }

    /// Appends one component row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn write_row(&mut self, row: &Yy1Row) -> ConvertResult<()> {
        trace!(designator = %row.designator, rotation = row.rotation, "Writing component row");
        self.inner.write_record(&row.to_record())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of component rows written so far.
    #[must_use]
    pub const fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes buffered output and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(self) -> ConvertResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| ConvertError::from(e.into_error()))
    }
}
