//! Export adapter: validated employees -> flat records -> sink.
//!
//! # Responsibility
//! - Resolve manager display fields into one flat record per employee.
//! - Serialize records as CSV or JSON through a `ResultSink`.
//!
//! # Invariants
//! - Only validated populations reach this layer.
//! - File sinks never leave a partially written export behind.

use crate::model::employee::EmployeeId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod record;
pub mod sink;

/// Export serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// JSON array of record objects.
    Json,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from record building and serialization.
#[derive(Debug)]
pub enum ExportError {
    /// Employee has no manager assigned.
    UnassignedManager(EmployeeId),
    /// Manager id does not resolve to an employee.
    MissingManager {
        employee_id: EmployeeId,
        manager_id: EmployeeId,
    },
    /// Format string is neither `csv` nor `json`.
    UnsupportedFormat(String),
    /// Writing to the sink failed.
    Io(std::io::Error),
    /// JSON serialization failed.
    Json(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnassignedManager(id) => write!(f, "employee {id} has no manager assigned"),
            Self::MissingManager {
                employee_id,
                manager_id,
            } => write!(
                f,
                "manager {manager_id} of employee {employee_id} does not exist"
            ),
            Self::UnsupportedFormat(value) => {
                write!(f, "unsupported export format `{value}`; expected csv|json")
            }
            Self::Io(err) => write!(f, "export write failed: {err}"),
            Self::Json(err) => write!(f, "json export failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
