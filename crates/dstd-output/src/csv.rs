use std::io::Write;

use csv::WriterBuilder;
use tracing::debug;

use dstd_report::Report;

use crate::error::OutputError;

/// Write `report` as CSV. Cells containing newlines are quoted.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<(), OutputError> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    for record in report.records() {
        csv_writer.write_record(record)?;
    }
    csv_writer.flush()?;
    debug!(
        category_id = report.category_id(),
        records = report.record_count(),
        "csv report written"
    );
    Ok(())
}
