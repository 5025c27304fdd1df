use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span};

use dstd_model::Datastandard;

use crate::error::StandardsError;
use crate::summary::DatastandardSummary;

const DATASTANDARD_ENV_VAR: &str = "DATASTANDARD_FILE";
const DEFAULT_DATASTANDARD_FILE: &str = "datastandard.json";
const READER_PATH: &str = "<reader>";

pub fn default_datastandard_path() -> PathBuf {
    if let Ok(path) = std::env::var(DATASTANDARD_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../standards")
        .join(DEFAULT_DATASTANDARD_FILE)
}

pub fn load_default_datastandard() -> Result<Datastandard, StandardsError> {
    load_datastandard(&default_datastandard_path())
}

/// Load a datastandard snapshot from a JSON file.
pub fn load_datastandard(path: &Path) -> Result<Datastandard, StandardsError> {
    let span = debug_span!("load_datastandard", path = %path.display());
    let _guard = span.enter();
    let file = File::open(path).map_err(|source| StandardsError::io(path, source))?;
    let datastandard: Datastandard = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| StandardsError::json(path, source))?;
    log_summary(&datastandard);
    Ok(datastandard)
}

pub fn read_datastandard<R: Read>(reader: R) -> Result<Datastandard, StandardsError> {
    let datastandard: Datastandard = serde_json::from_reader(reader)
        .map_err(|source| StandardsError::json(READER_PATH, source))?;
    log_summary(&datastandard);
    Ok(datastandard)
}

pub fn parse_datastandard(text: &str) -> Result<Datastandard, StandardsError> {
    let datastandard: Datastandard =
        serde_json::from_str(text).map_err(|source| StandardsError::json(READER_PATH, source))?;
    log_summary(&datastandard);
    Ok(datastandard)
}

fn log_summary(datastandard: &Datastandard) {
    let summary = DatastandardSummary::from_datastandard(datastandard);
    debug!(
        categories = summary.category_count,
        root_categories = summary.root_category_count,
        attributes = summary.attribute_count,
        composite_attributes = summary.composite_attribute_count,
        groups = summary.group_count,
        "datastandard loaded"
    );
}
