use super::report::{Ranked, rank_rows};
use super::settings::WindowSettings;
use super::{MetricValue, ReportRow};
use crate::concentration::{cohort_share, concentration, partition_totals};
use crate::config::Config;
use crate::schema::{FactTable, RegionId, Table, Warehouse};
use std::collections::BTreeMap;

/// Log target for window reports
const LOG_TARGET: &str = "   reports";

/// `1 - HHI` of employment across industries per region, over the trailing window.
pub fn industry_diversification(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.industry_diversification;
    let table = warehouse.industry_employment_table();
    let Some(start) = table.window_start(settings.trailing_months) else {
        return Vec::new();
    };

    let totals = partition_totals(
        table.iter(),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.industry_code.clone(),
        |row| row.employed_persons,
    );

    concentration_rows(warehouse, &totals, settings)
}

/// `1 - HHI` of employment across age groups per region, over the trailing window.
pub fn age_balance(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.age_balance;
    let table = warehouse.age_employment_table();
    let Some(start) = table.window_start(settings.trailing_months) else {
        return Vec::new();
    };

    let totals = partition_totals(
        table.iter(),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.age_group_id,
        |row| row.employed_count,
    );

    concentration_rows(warehouse, &totals, settings)
}

/// Share of employment in age groups at or above the senior cutoff per region, over the trailing window.
pub fn senior_share(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.senior_share;
    let table = warehouse.age_employment_table();
    let Some(start) = table.window_start(settings.trailing_months) else {
        return Vec::new();
    };

    let totals = partition_totals(
        table.iter(),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.age_group_id,
        |row| row.employed_count,
    );

    let ranked = totals
        .iter()
        .filter_map(|(&region, by_age)| {
            let Some(cohort) = cohort_share(by_age, |&age_group| age_group >= settings.senior_cutoff) else {
                log::debug!(target: LOG_TARGET, "senior_share: region {region} has no employment in the window");
                return None;
            };

            Some(Ranked {
                key: region,
                score: cohort.share,
                row: ReportRow::new(
                    warehouse.region_name(region),
                    vec![
                        Some(MetricValue::count(cohort.cohort_total)),
                        Some(MetricValue::count(cohort.total)),
                        Some(MetricValue::proportion(cohort.share)),
                    ],
                )
                .with_label(settings.classification.classify(cohort.share)),
            })
        })
        .collect();

    rank_rows(ranked, settings.limit)
}

fn concentration_rows<C>(warehouse: &Warehouse, totals: &BTreeMap<RegionId, BTreeMap<C, f64>>, settings: &WindowSettings) -> Vec<ReportRow> {
    let ranked = totals
        .iter()
        .filter_map(|(&region, by_category)| {
            let Some(measured) = concentration(by_category) else {
                log::debug!(target: LOG_TARGET, "region {region} has no employment in the window, HHI is undefined");
                return None;
            };

            let diversification = measured.diversification();
            Some(Ranked {
                key: region,
                score: diversification,
                row: ReportRow::new(
                    warehouse.region_name(region),
                    vec![
                        Some(MetricValue::from(measured.categories)),
                        Some(MetricValue::proportion(measured.hhi)),
                        Some(MetricValue::proportion(diversification)),
                    ],
                )
                .with_label(settings.classification.classify(diversification)),
            })
        })
        .collect();

    rank_rows(ranked, settings.limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        AgeEmploymentRow, AgeEmploymentTable, AgeGroupId, IndustryCode, IndustryEmploymentRow, IndustryEmploymentTable, Period, RegionRow,
        RegionTable,
    };

    fn period(token: &str) -> Period {
        token.parse().unwrap()
    }

    fn regions() -> RegionTable {
        RegionTable::build(vec![
            RegionRow {
                region_id: RegionId(1),
                region_name: "Mono".into(),
            },
            RegionRow {
                region_id: RegionId(2),
                region_name: "Even".into(),
            },
        ])
        .unwrap()
    }

    fn industry(region: u32, code: &str, token: &str, employed_persons: f64) -> IndustryEmploymentRow {
        IndustryEmploymentRow {
            region_id: RegionId(region),
            industry_code: IndustryCode::from(code),
            period: period(token),
            employed_persons,
        }
    }

    fn age(region: u32, group: u32, token: &str, employed_count: f64) -> AgeEmploymentRow {
        AgeEmploymentRow {
            region_id: RegionId(region),
            age_group_id: AgeGroupId(group),
            period: period(token),
            employed_count,
        }
    }

    #[test]
    fn test_single_industry_is_fully_concentrated() {
        let table = IndustryEmploymentTable::build(vec![
            industry(1, "C", "2023-12", 500.0),
            industry(2, "A", "2023-12", 100.0),
            industry(2, "B", "2023-12", 100.0),
            industry(2, "C", "2023-12", 100.0),
            industry(2, "D", "2023-12", 100.0),
        ])
        .unwrap();
        let warehouse = Warehouse::default().with_region_table(regions()).with_industry_employment_table(table);

        let rows = industry_diversification(&warehouse, &Config::default());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entity, "Even");
        assert_eq!(
            rows[0].values,
            vec![Some(MetricValue::UInt(4)), Some(MetricValue::Proportion(0.25)), Some(MetricValue::Proportion(0.75))]
        );
        assert_eq!(rows[0].label.as_deref(), Some("moderate"));

        assert_eq!(rows[1].entity, "Mono");
        assert_eq!(
            rows[1].values,
            vec![Some(MetricValue::UInt(1)), Some(MetricValue::Proportion(1.0)), Some(MetricValue::Proportion(0.0))]
        );
        assert_eq!(rows[1].label.as_deref(), Some("concentrated"));
    }

    #[test]
    fn test_window_ends_at_latest_period() {
        let table = IndustryEmploymentTable::build(vec![
            industry(2, "A", "2022-01", 900.0),
            industry(2, "A", "2023-06", 100.0),
            industry(2, "B", "2023-06", 100.0),
        ])
        .unwrap();
        let warehouse = Warehouse::default().with_region_table(regions()).with_industry_employment_table(table);

        let rows = industry_diversification(&warehouse, &Config::default());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].values[1], Some(MetricValue::Proportion(0.5)));
    }

    #[test]
    fn test_zero_employment_region_is_excluded() {
        let table = AgeEmploymentTable::build(vec![age(1, 1, "2023-01", 0.0), age(2, 1, "2023-01", 10.0), age(2, 6, "2023-01", 30.0)]).unwrap();
        let warehouse = Warehouse::default().with_region_table(regions()).with_age_employment_table(table);
        let config = Config::default();

        let balance = age_balance(&warehouse, &config);
        assert_eq!(balance.len(), 1);
        assert_eq!(balance[0].entity, "Even");
        assert_eq!(balance[0].values[1], Some(MetricValue::Proportion(0.625)));

        let senior = senior_share(&warehouse, &config);
        assert_eq!(senior.len(), 1);
        assert_eq!(
            senior[0].values,
            vec![Some(MetricValue::Count(30.0)), Some(MetricValue::Count(40.0)), Some(MetricValue::Proportion(0.75))]
        );
        assert_eq!(senior[0].label.as_deref(), Some("aged"));
    }

    #[test]
    fn test_senior_cutoff_is_inclusive() {
        let table = AgeEmploymentTable::build(vec![age(2, 4, "2023-01", 50.0), age(2, 5, "2023-01", 25.0), age(2, 6, "2023-01", 25.0)]).unwrap();
        let warehouse = Warehouse::default().with_region_table(regions()).with_age_employment_table(table);

        let rows = senior_share(&warehouse, &Config::default());
        assert_eq!(rows[0].values[2], Some(MetricValue::Proportion(0.5)));
    }

    #[test]
    fn test_empty_tables_yield_no_rows() {
        let warehouse = Warehouse::default();
        let config = Config::default();
        assert!(industry_diversification(&warehouse, &config).is_empty());
        assert!(age_balance(&warehouse, &config).is_empty());
        assert!(senior_share(&warehouse, &config).is_empty());
    }
}
