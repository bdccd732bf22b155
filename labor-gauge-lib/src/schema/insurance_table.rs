use super::{Period, RegionId, check_count, define_table};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRow {
    pub region_id: RegionId,
    #[serde(rename = "year_month")]
    pub period: Period,
    pub insured_count: f64,
    pub new_insured: f64,
    pub terminated_insured: f64,
}

define_table! {
    insurance: InsuranceRow {
        fn key(row) -> (RegionId, Period) {
            (row.region_id, row.period)
        }

        fn check_row(row) -> Result<()> {
            check_count("insured_count", row.insured_count)?;
            check_count("new_insured", row.new_insured)?;
            check_count("terminated_insured", row.terminated_insured)
        }
    }
}
