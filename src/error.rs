//! Error types for kicad-to-yy1.
//!
//! Conversion errors are reported to the user and never abort the process.
//! Rotation parse failures are not errors at all; see
//! [`crate::yy1::parse_rotation`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while converting a placement file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("File not found at path: {}", path.display())]
    InputNotFound {
        /// Path to the input file.
        path: PathBuf,
    },

    /// The input file exists but could not be opened.
    #[error("failed to open input file {}", path.display())]
    InputRead {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input stream has no header row.
    #[error("Input CSV file is empty or has no headers.")]
    EmptyOrHeaderlessInput {
        /// Path to the input file, if the input came from a file.
        path: Option<PathBuf>,
    },

    /// The output file could not be created.
    #[error("failed to create output file {}", path.display())]
    OutputCreate {
        /// Path to the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading, parsing or writing a CSV record failed.
    #[error("CSV error: {source}")]
    Csv {
        /// Underlying CSV error.
        #[from]
        source: csv::Error,
    },

    /// Flushing the output failed.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl ConvertError {
    /// Creates an input-not-found error.
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Creates an input read error.
    pub fn input_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    /// Creates an output create error.
    pub fn output_create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputCreate {
            path: path.into(),
            source,
        }
    }

    /// Attaches the input path to a headerless-input error.
    #[must_use]
    pub fn with_input_path(self, input: impl Into<PathBuf>) -> Self {
        match self {
            Self::EmptyOrHeaderlessInput { path: None } => Self::EmptyOrHeaderlessInput {
                path: Some(input.into()),
            },
            other => other,
        }
    }

    /// Formats the error as the one-line diagnostic shown to the user.
    ///
    /// Missing and empty inputs get their own wording; everything else is
    /// reported with its full cause chain.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::InputNotFound { .. } | Self::EmptyOrHeaderlessInput { .. } => {
                format!("Error: {self}")
            }
            other => {
                let mut message = other.to_string();
                let mut source = std::error::Error::source(other);
                while let Some(cause) = source {
                    let cause_text = cause.to_string();
                    if !message.contains(&cause_text) {
                        message.push_str(": ");
                        message.push_str(&cause_text);
                    }
                    source = cause.source();
                }
                format!("An error occurred: {message}")
            }
        }
    }
}

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}
