use super::{Period, RegionId, Table};

/// A time-series table keyed by region and period.
pub trait FactTable: Table {
    fn region(row: &Self::Row) -> RegionId;
    fn period(row: &Self::Row) -> Period;

    fn latest_period(&self) -> Option<Period> {
        self.iter().map(Self::period).max()
    }

    fn period_range(&self) -> Option<(Period, Period)> {
        self.iter().map(Self::period).fold(None, |range, period| match range {
            None => Some((period, period)),
            Some((first, last)) => Some((first.min(period), last.max(period))),
        })
    }

    /// First period of the trailing window of `months` periods that ends at the table's latest period.
    ///
    /// Returns `None` for an empty table.
    fn window_start(&self, months: u32) -> Option<Period> {
        self.latest_period().and_then(|latest| latest.window_start(months))
    }
}

/// Implements [`FactTable`] for tables whose rows carry `region_id` and `period` fields.
macro_rules! impl_fact_table {
    ($($table:ty),* $(,)?) => {
        $(
            impl FactTable for $table {
                fn region(row: &Self::Row) -> RegionId {
                    row.region_id
                }

                fn period(row: &Self::Row) -> Period {
                    row.period
                }
            }
        )*
    };
}

impl_fact_table!(
    super::UnemploymentTable,
    super::IndustryEmploymentTable,
    super::PopulationTable,
    super::InsuranceTable,
    super::EducationEmploymentTable,
    super::AgeEmploymentTable,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PopulationRow, PopulationTable};

    fn row(region: u32, token: &str) -> PopulationRow {
        PopulationRow {
            region_id: RegionId(region),
            period: token.parse().unwrap(),
            total_population: 100.0,
        }
    }

    #[test]
    fn test_period_range_and_window() {
        let table = PopulationTable::build(vec![row(1, "2022-06"), row(2, "2023-03"), row(1, "2021-01")]).unwrap();
        let (first, last) = table.period_range().unwrap();
        assert_eq!(first.to_string(), "2021-01");
        assert_eq!(last.to_string(), "2023-03");
        assert_eq!(table.window_start(12).unwrap().to_string(), "2022-04");
    }

    #[test]
    fn test_empty_table_has_no_window() {
        let table = PopulationTable::build(Vec::new()).unwrap();
        assert!(table.latest_period().is_none());
        assert!(table.window_start(12).is_none());
    }
}
