//! Keyed left-joins of the external CSV sources onto the school index.
//!
//! Every source implements [`Source`]; [`merge_source`] does the shared work
//! of reading the file, matching rows by handle, and writing the source's
//! own field group. A missing file is not an error. A malformed row in a
//! present file is.

pub mod bias;
pub mod donations;
pub mod ranking;
pub mod staffing;

pub use bias::BiasSource;
pub use donations::DonationSource;
pub use ranking::RankingSource;
pub use staffing::StaffingSource;

use std::collections::HashSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{BuildError, Result};
use crate::record::{SchoolIndex, SchoolRecord};

/// A value in an otherwise well-formed row that cannot be used.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Rejects NaN and infinities, which `f64` parsing happily accepts.
pub fn finite(value: f64, field: &'static str) -> std::result::Result<f64, FieldError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldError {
            field,
            message: format!("expected a finite number, got {value}"),
        })
    }
}

/// One external table joined onto the index by handle.
pub trait Source {
    /// Name used in logs and error messages.
    const NAME: &'static str;

    /// Header of the column holding the handle.
    const KEY: &'static str;

    /// A CSV row, deserialized by header name. Extra columns are ignored.
    type Row: DeserializeOwned;

    /// The field group this source owns on [`SchoolRecord`].
    type Fields;

    /// Turns a raw row into the published fields (rounding, derived labels).
    fn derive(row: Self::Row) -> std::result::Result<Self::Fields, FieldError>;

    /// The record slot this source writes. No other source shares its type.
    fn slot(record: &mut SchoolRecord) -> &mut Option<Self::Fields>;
}

/// Row counts for one merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub source: &'static str,
    pub rows: usize,
    pub matched: usize,
    pub unknown: usize,
    pub duplicates: usize,
}

/// Merges the CSV at `path` into `index` through source `S`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`BuildError::MalformedRow`] if the key column is missing, or for
/// the first matched row whose fields do not deserialize or fail
/// [`Source::derive`]. Rows with unknown handles are dropped unparsed.
#[tracing::instrument(skip(index), fields(source = S::NAME, path = %path.display()))]
pub fn merge_source<S: Source>(
    path: &Path,
    index: &mut SchoolIndex,
) -> Result<Option<MergeSummary>> {
    if !path.exists() {
        info!("Source file not found, skipping");
        return Ok(None);
    }

    let mut summary = MergeSummary {
        source: S::NAME,
        ..Default::default()
    };
    let mut seen = HashSet::new();

    let mut rdr = ReaderBuilder::new().from_path(path)?;
    let headers = rdr.headers()?.clone();
    let key_col = headers
        .iter()
        .position(|h| h == S::KEY)
        .ok_or_else(|| BuildError::MalformedRow {
            source_name: S::NAME.to_string(),
            line: 1,
            field: S::KEY.to_string(),
            message: "key column missing from header".to_string(),
        })?;

    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        summary.rows += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        // handles match exactly; padding around a handle makes it unknown
        let handle = record.get(key_col).unwrap_or_default().to_string();

        let Some(school) = index.get_mut(&handle) else {
            debug!(handle = %handle, line, "Unknown handle, row dropped");
            summary.unknown += 1;
            continue;
        };

        record.trim();
        let row: S::Row = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(S::NAME, line, &headers, e))?;
        let fields = S::derive(row).map_err(|e| BuildError::MalformedRow {
            source_name: S::NAME.to_string(),
            line,
            field: e.field.to_string(),
            message: e.message,
        })?;

        if seen.insert(handle.clone()) {
            summary.matched += 1;
        } else {
            warn!(handle = %handle, line, "Repeated handle, later row wins");
            summary.duplicates += 1;
        }
        *S::slot(school) = Some(fields);
    }

    info!(
        rows = summary.rows,
        matched = summary.matched,
        unknown = summary.unknown,
        duplicates = summary.duplicates,
        "Source merged"
    );
    Ok(Some(summary))
}

/// Reads every row of a headed CSV file, paired with its 1-based line number.
/// Cells are kept verbatim.
pub(crate) fn read_rows<R: DeserializeOwned>(
    path: &Path,
    source_name: &str,
) -> Result<Vec<(u64, R)>> {
    let mut rdr = ReaderBuilder::new().from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(source_name, line, &headers, e))?;
        rows.push((line, row));
    }
    Ok(rows)
}

fn malformed(source_name: &str, line: u64, headers: &StringRecord, err: csv::Error) -> BuildError {
    let detail = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => {
            let field = de
                .field()
                .and_then(|i| headers.get(i as usize))
                .unwrap_or("<row>")
                .to_string();
            Some((field, de.kind().to_string()))
        }
        _ => None,
    };

    match detail {
        Some((field, message)) => BuildError::MalformedRow {
            source_name: source_name.to_string(),
            line,
            field,
            message,
        },
        None => BuildError::Csv(err),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Writes `contents` to `name` inside a fresh temp dir.
    pub fn csv_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        (dir, path)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::csv_file;
    use super::*;
    use crate::registry::master_schools;

    fn index() -> SchoolIndex {
        SchoolIndex::from_registry(master_schools()).unwrap()
    }

    #[test]
    fn test_missing_file_is_a_noop() {
        let mut idx = index();
        let before = idx.records().to_vec();
        let summary =
            merge_source::<StaffingSource>(Path::new("/nonexistent/dei.csv"), &mut idx).unwrap();
        assert!(summary.is_none());
        assert_eq!(idx.records(), before.as_slice());
    }

    #[test]
    fn test_unknown_handle_leaves_index_unchanged() {
        let (_dir, path) = csv_file("dei.csv", "handle,staff_count\nNotASchool,12\n");
        let mut idx = index();
        let before = idx.records().to_vec();

        let summary = merge_source::<StaffingSource>(&path, &mut idx).unwrap().unwrap();

        assert_eq!(summary.rows, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.matched, 0);
        assert_eq!(idx.len(), before.len());
        assert_eq!(idx.records(), before.as_slice());
        assert!(!idx.contains("NotASchool"));
    }

    #[test]
    fn test_malformed_number_is_fatal_with_line() {
        let (_dir, path) = csv_file(
            "dei.csv",
            "handle,staff_count\nYale,4\nHarvard,lots\n",
        );
        let mut idx = index();
        let err = merge_source::<StaffingSource>(&path, &mut idx).unwrap_err();
        match err {
            BuildError::MalformedRow {
                source_name,
                line,
                field,
                ..
            } => {
                assert_eq!(source_name, "staffing");
                assert_eq!(line, 3);
                assert_eq!(field, "staff_count");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let (_dir, path) = csv_file("dei.csv", "handle,count\nYale,4\n");
        let mut idx = index();
        let err = merge_source::<StaffingSource>(&path, &mut idx).unwrap_err();
        assert!(matches!(err, BuildError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_missing_key_column_is_fatal() {
        let (_dir, path) = csv_file("dei.csv", "school,staff_count\nYale,4\n");
        let mut idx = index();
        let err = merge_source::<StaffingSource>(&path, &mut idx).unwrap_err();
        assert!(matches!(err, BuildError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_unknown_handle_row_is_not_parsed() {
        let (_dir, path) = csv_file(
            "dei.csv",
            "handle,staff_count\nNotASchool,n/a\nYale,3\n",
        );
        let mut idx = index();
        let summary = merge_source::<StaffingSource>(&path, &mut idx).unwrap().unwrap();
        assert_eq!(summary.unknown, 1);
        assert_eq!(idx.get("Yale").unwrap().staffing.as_ref().unwrap().dei_staff, 3);
    }

    #[test]
    fn test_repeated_handle_later_row_wins() {
        let (_dir, path) = csv_file("dei.csv", "handle,staff_count\nYale,4\nYale,9\n");
        let mut idx = index();
        let summary = merge_source::<StaffingSource>(&path, &mut idx).unwrap().unwrap();
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(idx.get("Yale").unwrap().staffing.as_ref().unwrap().dei_staff, 9);
    }

    #[test]
    fn test_extra_columns_and_padded_values_are_tolerated() {
        let (_dir, path) = csv_file(
            "dei.csv",
            "handle,staff_count,source_url\nYale, 7 ,https://example.edu\n",
        );
        let mut idx = index();
        merge_source::<StaffingSource>(&path, &mut idx).unwrap();
        assert_eq!(idx.get("Yale").unwrap().staffing.as_ref().unwrap().dei_staff, 7);
    }

    #[test]
    fn test_padded_handle_is_unknown() {
        let (_dir, path) = csv_file("dei.csv", "handle,staff_count\n Yale ,7\nYale ,8\n");
        let mut idx = index();
        let summary = merge_source::<StaffingSource>(&path, &mut idx).unwrap().unwrap();
        assert_eq!(summary.unknown, 2);
        assert_eq!(summary.matched, 0);
        assert!(idx.get("Yale").unwrap().staffing.is_none());
    }

    #[test]
    fn test_finite_rejects_nan() {
        assert_eq!(finite(1.5, "x"), Ok(1.5));
        assert_eq!(finite(f64::NAN, "x").unwrap_err().field, "x");
        assert!(finite(f64::INFINITY, "x").is_err());
    }
}
