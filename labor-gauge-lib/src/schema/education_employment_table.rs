use super::{EducationId, Period, RegionId, check_count, define_table};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EducationEmploymentRow {
    pub region_id: RegionId,
    pub education_id: EducationId,
    #[serde(rename = "year_month")]
    pub period: Period,
    pub employed_count: f64,
}

define_table! {
    education_employment: EducationEmploymentRow {
        fn key(row) -> (RegionId, EducationId, Period) {
            (row.region_id, row.education_id, row.period)
        }

        fn check_row(row) -> Result<()> {
            check_count("employed_count", row.employed_count)
        }
    }
}
