use std::iter;

use tracing::{debug, debug_span};

use dstd_model::{Attribute, Category, Datastandard, DatastandardIndex};

use crate::ancestry::resolve_ancestry;
use crate::error::Result;
use crate::rows::{ReportRow, category_rows};
use crate::type_format::format_type;

/// Header row, always the first record of a report.
pub const REPORT_HEADER: [&str; 5] = ["Category", "Attribute", "Description", "Type", "Groups"];

/// Attribute report for one category and its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    category_id: String,
    ancestry: Vec<String>,
    rows: Vec<ReportRow>,
}

impl Report {
    /// The category the report was requested for.
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// Ids of the contributing categories, root first.
    pub fn ancestry(&self) -> &[String] {
        &self.ancestry
    }

    /// Data rows, without the header.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Header followed by every data row.
    pub fn records(&self) -> impl Iterator<Item = [&str; 5]> {
        iter::once(REPORT_HEADER).chain(self.rows.iter().map(ReportRow::columns))
    }

    /// Number of records including the header.
    pub fn record_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Builds reports over one datastandard, indexing it once.
#[derive(Debug, Clone)]
pub struct ReportBuilder<'a> {
    index: DatastandardIndex<'a>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(datastandard: &'a Datastandard) -> Self {
        Self {
            index: datastandard.index(),
        }
    }

    pub fn ancestry(&self, category_id: &str) -> Result<Vec<&'a Category>> {
        resolve_ancestry(&self.index, category_id)
    }

    pub fn format_type(&self, attribute: &'a Attribute) -> Result<String> {
        format_type(&self.index, attribute)
    }

    pub fn category_rows(
        &self,
        category: &'a Category,
    ) -> impl Iterator<Item = Result<ReportRow>> + '_ {
        category_rows(&self.index, category)
    }

    /// Build the report for `category_id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReportError::NotFound`] for an unknown category and a
    /// cyclic error when the category or attribute graph loops.
    pub fn report(&self, category_id: &str) -> Result<Report> {
        let span = debug_span!("report", category_id);
        let _guard = span.enter();

        let ancestry = self.ancestry(category_id)?;
        let mut rows = Vec::new();
        for &category in &ancestry {
            let before = rows.len();
            for row in self.category_rows(category) {
                rows.push(row?);
            }
            debug!(
                category_id = %category.id,
                row_count = rows.len() - before,
                "category rows generated"
            );
        }

        Ok(Report {
            category_id: category_id.to_string(),
            ancestry: ancestry
                .iter()
                .map(|category| category.id.clone())
                .collect(),
            rows,
        })
    }
}

/// Build a report in one call.
pub fn report(datastandard: &Datastandard, category_id: &str) -> Result<Report> {
    ReportBuilder::new(datastandard).report(category_id)
}
