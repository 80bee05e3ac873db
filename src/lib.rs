//! Argo Processor Library
//!
//! A Rust library for extracting per-level measurements from Argo float
//! profile files (NetCDF) into a flat stream of rows suitable for CSV
//! output or database ingestion.
//!
//! This library provides tools for:
//! - Opening profile containers and resolving variable names across the
//!   naming variants found in real Argo archives
//! - Normalizing single-profile and multi-profile file layouts into one
//!   uniform per-level access model with explicit missing-value handling
//! - Decoding platform identifiers with filename fallback
//! - Resolving absolute measurement timestamps from reference time plus
//!   Julian day offsets
//! - Filtering profiles by geographic bounding box and year window
//! - Streaming accepted rows to a sink with full skip accounting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod netcdf_source;
        pub mod profile_extractor;
        pub mod row_sink;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::MeasurementRow;
pub use config::Config;

/// Result type alias for the Argo processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for Argo profile processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be opened or parsed as a profile container
    #[error("Cannot open source file '{file}': {message}")]
    SourceOpen { file: String, message: String },

    /// NetCDF read error
    #[error("NetCDF error: {message}")]
    Netcdf {
        message: String,
        #[source]
        source: netcdf::Error,
    },

    /// A variable named by the resolver is not present in the source
    #[error("Variable '{name}' not found in source '{file}'")]
    VariableNotFound { name: String, file: String },

    /// CSV writing error
    #[error("CSV writing error: {message}")]
    CsvWriting {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a source-open error
    pub fn source_open(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceOpen {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a NetCDF read error with context
    pub fn netcdf(message: impl Into<String>, source: netcdf::Error) -> Self {
        Self::Netcdf {
            message: message.into(),
            source,
        }
    }

    /// Create a variable-not-found error
    pub fn variable_not_found(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self::VariableNotFound {
            name: name.into(),
            file: file.into(),
        }
    }

    /// Create a CSV writing error with context
    pub fn csv_writing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<netcdf::Error> for Error {
    fn from(error: netcdf::Error) -> Self {
        Self::Netcdf {
            message: "NetCDF operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
