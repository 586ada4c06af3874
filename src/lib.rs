//! kicad-to-yy1: convert KiCad placement files for the Neoden YY1
//!
//! This library turns the component position CSV exported by KiCad into
//! the placement file loaded by the Neoden YY1 pick-and-place controller.
//!
//! # Architecture
//!
//! Conversion is a single streaming pass:
//!
//! - **Read**: KiCad rows are read one at a time and keyed by header name
//! - **Map**: each row becomes a 13-column YY1 row with fixed machine settings
//! - **Write**: a fixed preamble is written first, then each row in input order
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`convert`] — Stream and file conversion
//! - [`error`] — Error types
//! - [`kicad`] — KiCad placement file reading
//! - [`yy1`] — YY1 placement file writing

pub mod config;
pub mod convert;
pub mod error;
pub mod kicad;
pub mod yy1;

pub use convert::{convert, convert_file, ConversionReport};
pub use error::{ConvertError, ConvertResult};
