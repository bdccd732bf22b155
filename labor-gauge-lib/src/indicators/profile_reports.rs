use super::report::{Ranked, rank_rows};
use super::{MetricValue, ReportRow};
use crate::config::Config;
use crate::schema::{FactTable, Period, RegionId, Table, Warehouse};
use crate::stats::grouped_sums;
use std::collections::BTreeMap;

/// Log target for window reports
const LOG_TARGET: &str = "   reports";

/// Derived labor-market ratios per region over the trailing window.
///
/// The window ends at the latest unemployment period and is applied to every source.
/// Each ratio divides window sums; a non-positive denominator leaves it undefined.
/// Regions without an employment-to-population ratio are left out.
pub fn regional_profile(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.regional_profile;
    let unemployment = warehouse.unemployment_table();
    let (Some(start), Some(end)) = (unemployment.window_start(settings.trailing_months), unemployment.latest_period()) else {
        return Vec::new();
    };

    let in_window = |period: Period| period <= end;

    let employed = grouped_sums(
        unemployment.iter().filter(|row| in_window(row.period)),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.employed_persons,
    );
    let labor_force = grouped_sums(
        unemployment.iter().filter(|row| in_window(row.period)),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.labor_force,
    );
    let population = grouped_sums(
        warehouse.population_table().iter().filter(|row| in_window(row.period)),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.total_population,
    );
    let insured = grouped_sums(
        warehouse.insurance_table().iter().filter(|row| in_window(row.period)),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.insured_count,
    );
    let turnover = grouped_sums(
        warehouse.insurance_table().iter().filter(|row| in_window(row.period)),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.new_insured + row.terminated_insured,
    );
    let educated = grouped_sums(
        warehouse.education_employment_table().iter().filter(|row| in_window(row.period)),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.employed_count,
    );
    let college = grouped_sums(
        warehouse
            .education_employment_table()
            .iter()
            .filter(|row| in_window(row.period) && row.education_id == settings.college_education_id),
        Some(start),
        |row| row.period,
        |row| row.region_id,
        |row| row.employed_count,
    );

    let ranked = employed
        .iter()
        .filter_map(|(&region, &employed_sum)| {
            let Some(employment_ratio) = ratio(employed_sum, lookup(&population, region)) else {
                log::debug!(target: LOG_TARGET, "regional_profile: region {region} has no population in the window");
                return None;
            };

            let labor_force_ratio = ratio(lookup(&labor_force, region), lookup(&population, region));
            let insurance_coverage = ratio(lookup(&insured, region), employed_sum);
            let turnover_rate = ratio(lookup(&turnover, region), lookup(&insured, region));
            let college_share = ratio(lookup(&college, region), lookup(&educated, region));

            Some(Ranked {
                key: region,
                score: employment_ratio,
                row: ReportRow::new(
                    warehouse.region_name(region),
                    vec![
                        Some(MetricValue::proportion(employment_ratio)),
                        labor_force_ratio.map(MetricValue::proportion),
                        insurance_coverage.map(MetricValue::proportion),
                        turnover_rate.map(MetricValue::proportion),
                        college_share.map(MetricValue::proportion),
                    ],
                )
                .with_label(settings.classification.classify(employment_ratio)),
            })
        })
        .collect();

    rank_rows(ranked, settings.limit)
}

fn lookup(sums: &BTreeMap<RegionId, f64>, region: RegionId) -> f64 {
    sums.get(&region).copied().unwrap_or(0.0)
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        EducationEmploymentRow, EducationEmploymentTable, EducationId, InsuranceRow, InsuranceTable, PopulationRow, PopulationTable,
        RegionRow, RegionTable, UnemploymentRow, UnemploymentTable,
    };

    fn period(token: &str) -> Period {
        token.parse().unwrap()
    }

    fn unemployment(region: u32, token: &str, labor_force: f64, employed_persons: f64) -> UnemploymentRow {
        UnemploymentRow {
            region_id: RegionId(region),
            period: period(token),
            unemployment_rate: 0.0,
            unemployment_level: labor_force - employed_persons,
            labor_force,
            employed_persons,
        }
    }

    fn population(region: u32, token: &str, total_population: f64) -> PopulationRow {
        PopulationRow {
            region_id: RegionId(region),
            period: period(token),
            total_population,
        }
    }

    fn warehouse() -> Warehouse {
        let regions = RegionTable::build(vec![
            RegionRow {
                region_id: RegionId(1),
                region_name: "Busy".into(),
            },
            RegionRow {
                region_id: RegionId(2),
                region_name: "Quiet".into(),
            },
            RegionRow {
                region_id: RegionId(3),
                region_name: "Unknown".into(),
            },
        ])
        .unwrap();

        let unemployment = UnemploymentTable::build(vec![
            unemployment(1, "2022-01", 9999.0, 9999.0),
            unemployment(1, "2023-12", 800.0, 700.0),
            unemployment(2, "2023-12", 500.0, 400.0),
            unemployment(3, "2023-12", 10.0, 10.0),
        ])
        .unwrap();

        let population = PopulationTable::build(vec![
            population(1, "2023-12", 1000.0),
            population(2, "2023-12", 1000.0),
            population(2, "2024-06", 5000.0),
        ])
        .unwrap();

        let insurance = InsuranceTable::build(vec![InsuranceRow {
            region_id: RegionId(1),
            period: period("2023-12"),
            insured_count: 350.0,
            new_insured: 20.0,
            terminated_insured: 15.0,
        }])
        .unwrap();

        let education = EducationEmploymentTable::build(vec![
            EducationEmploymentRow {
                region_id: RegionId(1),
                education_id: EducationId(3),
                period: period("2023-12"),
                employed_count: 300.0,
            },
            EducationEmploymentRow {
                region_id: RegionId(1),
                education_id: EducationId(4),
                period: period("2023-12"),
                employed_count: 100.0,
            },
        ])
        .unwrap();

        Warehouse::default()
            .with_region_table(regions)
            .with_unemployment_table(unemployment)
            .with_population_table(population)
            .with_insurance_table(insurance)
            .with_education_employment_table(education)
    }

    #[test]
    fn test_ratios_over_window_sums() {
        let rows = regional_profile(&warehouse(), &Config::default());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entity, "Busy");
        assert_eq!(
            rows[0].values,
            vec![
                Some(MetricValue::Proportion(0.7)),
                Some(MetricValue::Proportion(0.8)),
                Some(MetricValue::Proportion(0.5)),
                Some(MetricValue::Proportion(0.1)),
                Some(MetricValue::Proportion(0.25)),
            ]
        );
        assert_eq!(rows[0].label.as_deref(), Some("high employment"));
    }

    #[test]
    fn test_undefined_secondary_ratios_are_empty_cells() {
        let rows = regional_profile(&warehouse(), &Config::default());

        // no insurance or education rows: coverage is zero, turnover and college share are undefined
        assert_eq!(rows[1].entity, "Quiet");
        assert_eq!(
            rows[1].values,
            vec![
                Some(MetricValue::Proportion(0.4)),
                Some(MetricValue::Proportion(0.5)),
                Some(MetricValue::Proportion(0.0)),
                None,
                None,
            ]
        );
        assert_eq!(rows[1].label.as_deref(), Some("low employment"));
    }

    #[test]
    fn test_region_without_population_is_excluded() {
        let rows = regional_profile(&warehouse(), &Config::default());
        assert!(rows.iter().all(|row| row.entity != "Unknown"));
    }

    #[test]
    fn test_empty_unemployment_table_yields_no_rows() {
        assert!(regional_profile(&Warehouse::default(), &Config::default()).is_empty());
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(1.0, 4.0), Some(0.25));
        assert_eq!(ratio(1.0, 0.0), None);
    }
}
