//! Component rows of a YY1 placement file.

use csv::StringRecord;

use crate::kicad::{Placement, FIELD_MAPPING};

/// Number of cells in every component row.
pub const COLUMN_COUNT: usize = 13;

/// Output columns of the YY1 component table, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yy1Column {
    /// Reference designator.
    Designator,
    /// Component value.
    Comment,
    /// Footprint or package name.
    Footprint,
    /// X position of the component centre, in mm.
    MidX,
    /// Y position of the component centre, in mm.
    MidY,
    /// Rotation in whole degrees.
    Rotation,
    /// Placement head.
    Head,
    /// Feeder the part is picked from.
    FeederNo,
    /// Mount speed as a percentage of maximum.
    MountSpeed,
    /// Pick height, in mm.
    PickHeight,
    /// Place height, in mm.
    PlaceHeight,
    /// Placement mode.
    Mode,
    /// Skip flag.
    Skip,
}

impl Yy1Column {
    /// All columns in file order.
    pub const ALL: [Self; COLUMN_COUNT] = [
        Self::Designator,
        Self::Comment,
        Self::Footprint,
        Self::MidX,
        Self::MidY,
        Self::Rotation,
        Self::Head,
        Self::FeederNo,
        Self::MountSpeed,
        Self::PickHeight,
        Self::PlaceHeight,
        Self::Mode,
        Self::Skip,
    ];

    /// Column title as written in the header row.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Designator => "Designator",
            Self::Comment => "Comment",
            Self::Footprint => "Footprint",
            Self::MidX => "Mid X(mm)",
            Self::MidY => "Mid Y(mm)",
            Self::Rotation => "Rotation",
            Self::Head => "Head",
            Self::FeederNo => "FeederNo",
            Self::MountSpeed => "Mount Speed(%)",
            Self::PickHeight => "Pick Height(mm)",
            Self::PlaceHeight => "Place Height(mm)",
            Self::Mode => "Mode",
            Self::Skip => "Skip",
        }
    }
}

/// Parses a rotation in degrees and truncates it toward zero.
///
/// The accepted grammar is Rust's `f64` parsing after trimming whitespace:
/// digit separators such as `1_0` are rejected, and magnitudes beyond the
/// `i64` range saturate. Anything that is not a finite number, including
/// an empty string, yields `0`.
///
/// # Examples
///
/// ```
/// use kicad_to_yy1::yy1::parse_rotation;
///
/// assert_eq!(parse_rotation("90.0000"), 90);
/// assert_eq!(parse_rotation("-45.7"), -45);
/// assert_eq!(parse_rotation("N/A"), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // saturating float-to-int cast
pub fn parse_rotation(value: &str) -> i64 {
    match value.trim().parse::<f64>() {
        Ok(degrees) if degrees.is_finite() => degrees.trunc() as i64,
        _ => 0,
    }
}

/// One component row of the YY1 table.
///
/// The machine-setting columns are fixed for every component; only the
/// first six columns come from the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yy1Row {
    /// Reference designator.
    pub designator: String,
    /// Component value.
    pub comment: String,
    /// Footprint name.
    pub footprint: String,
    /// X position, copied verbatim.
    pub mid_x: String,
    /// Y position, copied verbatim.
    pub mid_y: String,
    /// Rotation in whole degrees.
    pub rotation: i64,
    /// Placement head.
    pub head: u8,
    /// Feeder number.
    pub feeder_no: u8,
    /// Mount speed in percent.
    pub mount_speed: u8,
    /// Pick height in mm.
    pub pick_height: u8,
    /// Place height in mm.
    pub place_height: u8,
    /// Placement mode.
    pub mode: u8,
    /// Skip flag.
    pub skip: u8,
}

impl Default for Yy1Row {
    fn default() -> Self {
        Self {
            designator: String::new(),
            comment: String::new(),
            footprint: String::new(),
            mid_x: String::new(),
            mid_y: String::new(),
            rotation: 0,
            head: 0,
            feeder_no: 1,
            mount_speed: 100,
            pick_height: 0,
            place_height: 0,
            mode: 1,
            skip: 0,
        }
    }
}

impl Yy1Row {
    /// Maps a KiCad placement onto a YY1 row.
    ///
    /// Fields absent from the placement are left empty, and the rotation
    /// falls back to `0` when it cannot be parsed.
    #[must_use]
    pub fn from_placement(placement: &Placement<'_>) -> Self {
        let mut row = Self::default();
        let mut rotation = "";

        for (field, column) in FIELD_MAPPING {
            let (Some(column), Some(value)) = (column, placement.get(field)) else {
                continue;
            };
            match column {
                Yy1Column::Designator => row.designator = value.to_string(),
                Yy1Column::Comment => row.comment = value.to_string(),
                Yy1Column::Footprint => row.footprint = value.to_string(),
                Yy1Column::MidX => row.mid_x = value.to_string(),
                Yy1Column::MidY => row.mid_y = value.to_string(),
                Yy1Column::Rotation => rotation = value,
                // Machine settings are never taken from the source file.
                _ => {}
            }
        }

        row.rotation = parse_rotation(rotation);
        row
    }

    /// Returns the cell for a column as it is written to the file.
    #[must_use]
    pub fn cell(&self, column: Yy1Column) -> String {
        match column {
            Yy1Column::Designator => self.designator.clone(),
            Yy1Column::Comment => self.comment.clone(),
            Yy1Column::Footprint => self.footprint.clone(),
            Yy1Column::MidX => self.mid_x.clone(),
            Yy1Column::MidY => self.mid_y.clone(),
            Yy1Column::Rotation => self.rotation.to_string(),
            Yy1Column::Head => self.head.to_string(),
            Yy1Column::FeederNo => self.feeder_no.to_string(),
            Yy1Column::MountSpeed => self.mount_speed.to_string(),
            Yy1Column::PickHeight => self.pick_height.to_string(),
            Yy1Column::PlaceHeight => self.place_height.to_string(),
            Yy1Column::Mode => self.mode.to_string(),
            Yy1Column::Skip => self.skip.to_string(),
        }
    }

    /// Returns all 13 cells in file order.
    #[must_use]
    pub fn to_record(&self) -> StringRecord {
        Yy1Column::ALL
            .iter()
            .map(|column| self.cell(*column))
            .collect()
    }
}
