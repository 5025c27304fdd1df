//! Category reports over a datastandard.
//!
//! A report walks from the requested category up to its top-most ancestor and
//! lists, root first, every attribute attached to each category together with
//! its description, its expanded type signature and its group names.

#![deny(unsafe_code)]

pub mod ancestry;
pub mod error;
pub mod report;
pub mod rows;
pub mod type_format;

pub use crate::ancestry::resolve_ancestry;
pub use crate::error::{ReportError, Result};
pub use crate::report::{REPORT_HEADER, Report, ReportBuilder, report};
pub use crate::rows::{ReportRow, category_rows};
pub use crate::type_format::format_type;
