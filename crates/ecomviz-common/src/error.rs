//! Error types and utilities for EcomViz

use thiserror::Error;

/// Result type alias for EcomViz operations
pub type Result<T> = std::result::Result<T, EcomError>;

/// Main error type for EcomViz operations
#[derive(Error, Debug)]
pub enum EcomError {
    /// A required column is missing, a row does not deserialize, or a value
    /// such as a purchase timestamp cannot be parsed. Always fatal.
    #[error("Input schema error{}: {message}", location(.file, .line))]
    InputSchema {
        /// What was wrong with the input
        message: String,
        /// Input file the problem was found in, when known
        file: Option<String>,
        /// One-based line number within `file`, when known
        line: Option<u64>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader errors that are not tied to the schema of a row
    #[error("CSV error: {message}")]
    Csv {
        /// Human-readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        /// Human-readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Why the value was rejected
        message: String,
        /// Dotted path of the offending setting, e.g. `charts.top_n`
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Human-readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn location(file: &Option<String>, line: &Option<u64>) -> String {
    match (file, line) {
        (Some(file), Some(line)) => format!(" in {file} at line {line}"),
        (Some(file), None) => format!(" in {file}"),
        (None, Some(line)) => format!(" at line {line}"),
        (None, None) => String::new(),
    }
}

impl EcomError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new input schema error
    pub fn input_schema(msg: impl Into<String>) -> Self {
        Self::InputSchema {
            message: msg.into(),
            file: None,
            line: None,
        }
    }

    /// Create a new input schema error pointing at a file and line
    pub fn input_schema_at(msg: impl Into<String>, file: impl Into<String>, line: Option<u64>) -> Self {
        Self::InputSchema {
            message: msg.into(),
            file: Some(file.into()),
            line,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error was caused by malformed input data.
    pub const fn is_input_schema(&self) -> bool {
        matches!(self, Self::InputSchema { .. })
    }

    /// Attach a file name to an input schema error that has none yet.
    #[must_use]
    pub fn in_file(self, name: impl Into<String>) -> Self {
        match self {
            Self::InputSchema {
                message,
                file: None,
                line,
            } => Self::InputSchema {
                message,
                file: Some(name.into()),
                line,
            },
            other => other,
        }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to EcomError
///
/// Row-level deserialization failures are schema errors; everything else
/// (I/O while reading, broken UTF-8) is reported as a CSV error.
impl From<csv::Error> for EcomError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        match err.kind() {
            csv::ErrorKind::Deserialize { err: de, .. } => Self::InputSchema {
                message: format!("row does not match the expected columns: {de}"),
                file: None,
                line,
            },
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => Self::InputSchema {
                message: format!("row has {len} fields but the header has {expected_len}"),
                file: None,
                line,
            },
            _ => Self::Csv {
                message: "failed to read CSV input".to_string(),
                source: Some(Box::new(err)),
            },
        }
    }
}

/// Convert from serde_yaml::Error to EcomError
impl From<serde_yaml::Error> for EcomError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

/// Convert from toml::de::Error to EcomError
impl From<toml::de::Error> for EcomError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to EcomError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for EcomError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = EcomError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = EcomError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let validation_error = EcomError::validation_field("Invalid input", "top_n");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_input_schema_display() {
        let bare = EcomError::input_schema("missing column 'customer_city'");
        assert_eq!(
            bare.to_string(),
            "Input schema error: missing column 'customer_city'"
        );

        let located = EcomError::input_schema_at("bad timestamp", "orders.csv", Some(7));
        assert_eq!(
            located.to_string(),
            "Input schema error in orders.csv at line 7: bad timestamp"
        );
        assert!(located.is_input_schema());
        assert!(!EcomError::graph("x").is_input_schema());
    }

    #[test]
    fn test_csv_deserialize_error_is_input_schema() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Row {
            count: u32,
        }

        let mut reader = csv::Reader::from_reader("count\nnot-a-number\n".as_bytes());
        let err = reader.deserialize::<Row>().next().unwrap().unwrap_err();
        let ecom: EcomError = err.into();

        assert!(ecom.is_input_schema());
        assert!(ecom.to_string().contains("line 2"));
    }

    #[test]
    fn test_in_file_fills_missing_location() {
        let located = EcomError::input_schema("bad row").in_file("orders.csv");
        assert_eq!(located.to_string(), "Input schema error in orders.csv: bad row");

        let kept = EcomError::input_schema_at("bad row", "a.csv", Some(3)).in_file("b.csv");
        assert!(kept.to_string().contains("a.csv at line 3"));

        assert!(!EcomError::config("x").in_file("c.csv").is_input_schema());
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = EcomError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ecom_error: EcomError = io_error.into();

        assert!(ecom_error.to_string().contains("I/O error"));
        assert!(ecom_error.source().is_some());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<u32>("[not, a, number]").unwrap_err();
        let ecom_error: EcomError = yaml_error.into();

        assert!(ecom_error.to_string().contains("Configuration error"));
        assert!(ecom_error.source().is_some());
    }
}
