//! KiCad footprint position (`.csv` "pos") file records.
//!
//! KiCad's "Component Placement" export writes one row per footprint with a
//! header naming the columns:
//!
//! ```text
//! Ref,Val,Package,PosX,PosY,Rot,Side
//! "C1","100n","C_0402_1005Metric",112.5000,-47.2500,90.0000,top
//! ```
//!
//! Records are keyed by header name, so column order does not matter and
//! extra columns are ignored.

mod reader;

pub use reader::PlacementReader;

use std::collections::HashMap;

use csv::StringRecord;

use crate::yy1::Yy1Column;

/// Byte order mark some Windows tools prepend to UTF-8 exports.
const UTF8_BOM: char = '\u{feff}';

/// Static mapping from KiCad field names to YY1 output columns.
///
/// A `None` target means the field is read but not carried into the output.
pub const FIELD_MAPPING: [(&str, Option<Yy1Column>); 7] = [
    ("Ref", Some(Yy1Column::Designator)),
    ("Val", Some(Yy1Column::Comment)),
    ("Package", Some(Yy1Column::Footprint)),
    ("PosX", Some(Yy1Column::MidX)),
    ("PosY", Some(Yy1Column::MidY)),
    ("Rot", Some(Yy1Column::Rotation)),
    ("Side", None),
];

/// Column layout of a placement file, resolved once from its header row.
#[derive(Debug, Clone, Default)]
pub struct PlacementHeader {
    positions: HashMap<String, usize>,
}

impl PlacementHeader {
    /// Builds the header index from the raw header record.
    ///
    /// When a name appears more than once the last occurrence wins.
    #[must_use]
    pub fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = if index == 0 {
                    name.trim_start_matches(UTF8_BOM)
                } else {
                    name
                };
                (name.to_string(), index)
            })
            .collect();
        Self { positions }
    }

    /// Returns `true` if the header declares the given field.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.positions.contains_key(field)
    }

    /// Number of distinct field names in the header.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the header declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Field names from [`FIELD_MAPPING`] that this header lacks.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        FIELD_MAPPING
            .iter()
            .map(|(field, _)| *field)
            .filter(|field| !self.contains(field))
            .collect()
    }

    /// Pairs a data record with this header.
    #[must_use]
    pub fn placement<'a>(&'a self, record: &'a StringRecord) -> Placement<'a> {
        Placement {
            header: self,
            record,
        }
    }
}

/// One component placement row, keyed by header name.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    header: &'a PlacementHeader,
    record: &'a StringRecord,
}

impl<'a> Placement<'a> {
    /// Returns the value of a field, or `None` if the header does not
    /// declare it or the row is too short to reach it.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'a str> {
        let index = *self.header.positions.get(field)?;
        self.record.get(index)
    }

    /// Returns the value of a field, or an empty string when it is missing.
    #[must_use]
    pub fn field(&self, field: &str) -> &'a str {
        self.get(field).unwrap_or_default()
    }
}
