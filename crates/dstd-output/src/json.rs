use std::io::Write;

use tracing::debug;

use dstd_report::Report;

use crate::error::OutputError;

/// Write `report` as a pretty-printed JSON array of five-column arrays.
pub fn write_json<W: Write>(report: &Report, mut writer: W) -> Result<(), OutputError> {
    let records: Vec<[&str; 5]> = report.records().collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(
        category_id = report.category_id(),
        records = records.len(),
        "json report written"
    );
    Ok(())
}
