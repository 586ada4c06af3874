//! Streaming reader for KiCad placement files.

use std::io::Read;

use csv::StringRecord;
use tracing::debug;

use super::PlacementHeader;
use crate::error::{ConvertError, ConvertResult};

/// Reads placement records one at a time.
///
/// The header row is read and validated on construction, so an empty
/// input is rejected before any output is produced.
pub struct PlacementReader<R: Read> {
    inner: csv::Reader<R>,
    header: PlacementHeader,
}

impl<R: Read> PlacementReader<R> {
    /// Creates a reader and consumes the header row.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyOrHeaderlessInput`] if the input has no
    /// header row, or a CSV error if the header cannot be parsed.
    pub fn new(reader: R) -> ConvertResult<Self> {
        let mut inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = inner.headers()?;
        if headers.is_empty() {
            return Err(ConvertError::EmptyOrHeaderlessInput { path: None });
        }

        let header = PlacementHeader::new(headers);
        debug!(fields = header.len(), "Read placement header");

        let missing = header.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "Placement header lacks mapped fields");
        }

        Ok(Self { inner, header })
    }

    /// The resolved header of this file.
    #[must_use]
    pub const fn header(&self) -> &PlacementHeader {
        &self.header
    }

    /// Reads the next data row into `record`.
    ///
    /// Returns `false` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be read or is not valid UTF-8.
    pub fn read_record(&mut self, record: &mut StringRecord) -> ConvertResult<bool> {
        Ok(self.inner.read_record(record)?)
    }
}
