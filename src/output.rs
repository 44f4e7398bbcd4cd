//! Serialization and persistence of the build outputs.
//!
//! Both documents are rendered to strings before anything touches the disk,
//! so a failing build never leaves half its output behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::charts::ChartCatalog;
use crate::error::Result;
use crate::record::SchoolRecord;

pub const SCHOOLS_FILE: &str = "schools.json";
pub const CHARTS_FILE: &str = "charts.json";

/// Both output documents, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutputs {
    pub schools: String,
    pub charts: String,
}

/// Pretty-prints the records in the given order after applying the rounding
/// policy.
pub fn render_schools(records: &[SchoolRecord]) -> Result<String> {
    let normalized: Vec<SchoolRecord> = records
        .iter()
        .cloned()
        .map(|mut r| {
            r.normalize();
            r
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&normalized)?;
    json.push('\n');
    Ok(json)
}

pub fn render_catalog(catalog: &ChartCatalog) -> Result<String> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');
    Ok(json)
}

pub fn render(records: &[SchoolRecord], catalog: &ChartCatalog) -> Result<RenderedOutputs> {
    Ok(RenderedOutputs {
        schools: render_schools(records)?,
        charts: render_catalog(catalog)?,
    })
}

/// Writes `schools.json` and `charts.json` into `dir`, creating it if needed.
/// Returns the two paths written.
pub fn write_outputs(dir: &Path, rendered: &RenderedOutputs) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;
    let schools_path = dir.join(SCHOOLS_FILE);
    let charts_path = dir.join(CHARTS_FILE);

    debug!(path = %schools_path.display(), bytes = rendered.schools.len(), "Writing schools");
    fs::write(&schools_path, &rendered.schools)?;
    debug!(path = %charts_path.display(), bytes = rendered.charts.len(), "Writing chart catalog");
    fs::write(&charts_path, &rendered.charts)?;

    info!(dir = %dir.display(), "Outputs written");
    Ok((schools_path, charts_path))
}

/// Reads a previously written `schools.json`.
pub fn read_schools(path: &Path) -> Result<Vec<SchoolRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
