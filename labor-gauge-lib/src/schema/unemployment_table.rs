use super::{Period, RegionId, check_count, check_percentage, define_table};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UnemploymentRow {
    pub region_id: RegionId,
    #[serde(rename = "year_month")]
    pub period: Period,
    pub unemployment_rate: f64,
    pub unemployment_level: f64,
    pub labor_force: f64,
    pub employed_persons: f64,
}

define_table! {
    unemployment: UnemploymentRow {
        fn key(row) -> (RegionId, Period) {
            (row.region_id, row.period)
        }

        fn check_row(row) -> Result<()> {
            check_percentage("unemployment_rate", row.unemployment_rate)?;
            check_count("unemployment_level", row.unemployment_level)?;
            check_count("labor_force", row.labor_force)?;
            check_count("employed_persons", row.employed_persons)
        }
    }
}
