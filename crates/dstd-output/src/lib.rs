//! Serialization of category reports.
//!
//! Both writers emit the header record first, then one record per row.

#![deny(unsafe_code)]

pub mod csv;
pub mod error;
pub mod json;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dstd_report::Report;

pub use crate::csv::write_csv;
pub use crate::error::OutputError;
pub use crate::json::write_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Write `report` in the requested format.
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    writer: W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Csv => write_csv(report, writer),
        OutputFormat::Json => write_json(report, writer),
    }
}
