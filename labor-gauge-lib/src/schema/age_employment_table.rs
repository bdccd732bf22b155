use super::{AgeGroupId, Period, RegionId, check_count, define_table};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AgeEmploymentRow {
    pub region_id: RegionId,
    pub age_group_id: AgeGroupId,
    #[serde(rename = "year_month")]
    pub period: Period,
    pub employed_count: f64,
}

define_table! {
    age_employment: AgeEmploymentRow {
        fn key(row) -> (RegionId, AgeGroupId, Period) {
            (row.region_id, row.age_group_id, row.period)
        }

        fn check_row(row) -> Result<()> {
            check_count("employed_count", row.employed_count)
        }
    }
}
