use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dstd_model::Datastandard;
use dstd_output::{OutputFormat, write_report};
use dstd_report::{ReportBuilder, ReportError};
use dstd_standards::{default_datastandard_path, load_datastandard};

use crate::render::{categories_table, report_table};

/// Exit code for a category that does not exist.
pub const EXIT_NOT_FOUND: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Serialized(OutputFormat),
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Falls back to [`default_datastandard_path`] when absent.
    pub datastandard: Option<PathBuf>,
    pub category_id: String,
    pub format: ReportFormat,
    /// Destination for serialized output; stdout when absent.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub category_id: String,
    pub ancestry: Vec<String>,
    pub record_count: usize,
    pub output: Option<PathBuf>,
}

pub fn load(path: Option<&Path>) -> Result<Datastandard> {
    let path = path.map_or_else(default_datastandard_path, Path::to_path_buf);
    let start = Instant::now();
    let datastandard = load_datastandard(&path)
        .with_context(|| format!("load datastandard: {}", path.display()))?;
    info!(
        path = %path.display(),
        categories = datastandard.categories.len(),
        attributes = datastandard.attributes.len(),
        duration_ms = start.elapsed().as_millis(),
        "datastandard loaded"
    );
    Ok(datastandard)
}

pub fn run_report(request: &ReportRequest) -> Result<ReportSummary> {
    let span = info_span!("report", category_id = %request.category_id);
    let _guard = span.enter();

    let datastandard = load(request.datastandard.as_deref())?;
    let start = Instant::now();
    let report = ReportBuilder::new(&datastandard)
        .report(&request.category_id)
        .with_context(|| format!("build report for category {}", request.category_id))?;
    info!(
        category_id = %request.category_id,
        ancestors = report.ancestry().len(),
        rows = report.rows().len(),
        duration_ms = start.elapsed().as_millis(),
        "report built"
    );

    match (request.format, request.output.as_deref()) {
        (ReportFormat::Table, _) => {
            println!("{}", report_table(&report));
        }
        (ReportFormat::Serialized(format), Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&report, format, &mut writer)
                .with_context(|| format!("write {format} report: {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("flush output file: {}", path.display()))?;
        }
        (ReportFormat::Serialized(format), None) => {
            let stdout = io::stdout();
            write_report(&report, format, stdout.lock())
                .with_context(|| format!("write {format} report to stdout"))?;
        }
    }

    Ok(ReportSummary {
        category_id: report.category_id().to_string(),
        ancestry: report.ancestry().to_vec(),
        record_count: report.record_count(),
        output: request.output.clone(),
    })
}

pub fn print_report_summary(summary: &ReportSummary) {
    if let Some(path) = &summary.output {
        println!(
            "Category: {} ({})",
            summary.category_id,
            summary.ancestry.join(" > ")
        );
        println!("Records: {}", summary.record_count);
        println!("Output: {}", path.display());
    }
}

pub fn run_categories(datastandard: Option<&Path>) -> Result<()> {
    let datastandard = load(datastandard)?;
    println!("{}", categories_table(&datastandard));
    Ok(())
}

/// Process exit code for a failed command.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ReportError>() {
        Some(report_error) if report_error.is_not_found() => EXIT_NOT_FOUND,
        _ => 1,
    }
}
