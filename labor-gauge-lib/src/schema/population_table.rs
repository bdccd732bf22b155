use super::{Period, RegionId, check_count, define_table};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PopulationRow {
    pub region_id: RegionId,
    #[serde(rename = "year_month")]
    pub period: Period,
    #[serde(alias = "total_pop")]
    pub total_population: f64,
}

define_table! {
    population: PopulationRow {
        fn key(row) -> (RegionId, Period) {
            (row.region_id, row.period)
        }

        fn check_row(row) -> Result<()> {
            check_count("total_population", row.total_population)
        }
    }
}
