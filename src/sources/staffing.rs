//! DEI office staffing counts.

use serde::Deserialize;

use super::{FieldError, Source};
use crate::record::{SchoolRecord, StaffingFields};

#[derive(Debug, Deserialize)]
pub struct StaffingRow {
    pub handle: String,
    pub staff_count: u32,
}

pub struct StaffingSource;

impl Source for StaffingSource {
    const NAME: &'static str = "staffing";
    const KEY: &'static str = "handle";
    type Row = StaffingRow;
    type Fields = StaffingFields;

    fn derive(row: StaffingRow) -> Result<StaffingFields, FieldError> {
        Ok(StaffingFields {
            dei_staff: row.staff_count,
        })
    }

    fn slot(record: &mut SchoolRecord) -> &mut Option<StaffingFields> {
        &mut record.staffing
    }
}
