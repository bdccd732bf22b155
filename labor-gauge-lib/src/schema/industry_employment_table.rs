use super::{IndustryCode, Period, RegionId, check_count, define_table};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryEmploymentRow {
    pub region_id: RegionId,
    pub industry_code: IndustryCode,
    #[serde(rename = "year_month")]
    pub period: Period,
    pub employed_persons: f64,
}

define_table! {
    industry_employment: IndustryEmploymentRow {
        fn key(row) -> (RegionId, IndustryCode, Period) {
            (row.region_id, row.industry_code.clone(), row.period)
        }

        fn check_row(row) -> Result<()> {
            check_count("employed_persons", row.employed_persons)
        }
    }
}
