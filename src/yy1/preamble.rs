//! Fixed rows at the top of a YY1 placement file.
//!
//! The YY1 controller expects its machine settings (panel layout, fiducial
//! position, nozzle changes) before the component table. These values are
//! constants for the machine this tool targets and are written verbatim.

use super::row::Yy1Column;

/// Width of every preamble row except the component table header.
pub const PREAMBLE_WIDTH: usize = 12;

const TITLE: &[&str] = &["NEODEN", "YY1", "P&P FILE"];

const PANEL: &[&str] = &[
    "PanelizedPCB",
    "UnitLength",
    "0",
    "UnitWidth",
    "0",
    "Rows",
    "1",
    "Columns",
    "1",
];

const FIDUCIAL: &[&str] = &[
    "Fiducial",
    "1-X",
    "13.09",
    "1-Y",
    "55.01",
    "OverallOffsetX",
    "0.08",
    "OverallOffsetY",
    "0.12",
];

const NOZZLE_CHANGES: [[&str; 9]; 4] = [
    [
        "NozzleChange",
        "OFF",
        "BeforeComponent",
        "1",
        "Head1",
        "Drop",
        "Station2",
        "PickUp",
        "Station1",
    ],
    [
        "NozzleChange",
        "OFF",
        "BeforeComponent",
        "2",
        "Head2",
        "Drop",
        "Station3",
        "PickUp",
        "Station2",
    ],
    [
        "NozzleChange",
        "OFF",
        "BeforeComponent",
        "1",
        "Head1",
        "Drop",
        "Station1",
        "PickUp",
        "Station1",
    ],
    [
        "NozzleChange",
        "OFF",
        "BeforeComponent",
        "1",
        "Head1",
        "Drop",
        "Station1",
        "PickUp",
        "Station1",
    ],
];

/// Pads `cells` with empty strings to [`PREAMBLE_WIDTH`].
fn padded(cells: &[&'static str]) -> Vec<&'static str> {
    let mut row = cells.to_vec();
    row.resize(PREAMBLE_WIDTH.max(cells.len()), "");
    row
}

/// Returns every row that precedes the component data, ending with the
/// component table header.
#[must_use]
pub fn preamble_rows() -> Vec<Vec<&'static str>> {
    let blank = padded(&[]);

    let mut rows = vec![
        padded(TITLE),
        blank.clone(),
        padded(PANEL),
        blank.clone(),
        padded(FIDUCIAL),
        blank.clone(),
    ];
    rows.extend(NOZZLE_CHANGES.iter().map(|change| padded(change)));
    rows.push(blank);
    rows.push(Yy1Column::ALL.iter().map(|column| column.title()).collect());
    rows
}
