use super::settings::ReconciliationSettings;
use super::{MetricValue, ReportRow};
use crate::config::Config;
use crate::reconcile::{Reconciliation, reconcile_breakdown, reference_totals};
use crate::schema::Warehouse;

/// Reconciles the industry, education, and age breakdowns against the aggregate employed-persons totals.
///
/// The three comparisons run in parallel and are returned in that fixed order.
#[must_use]
pub fn reconcile_all(warehouse: &Warehouse) -> Vec<Reconciliation> {
    let reference = reference_totals(warehouse.unemployment_table());

    let (industry, (education, age)) = rayon::join(
        || reconcile_breakdown(&reference, warehouse.industry_employment_table()),
        || {
            rayon::join(
                || reconcile_breakdown(&reference, warehouse.education_employment_table()),
                || reconcile_breakdown(&reference, warehouse.age_employment_table()),
            )
        },
    );

    vec![industry, education, age]
}

pub fn reconciliation_summary(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    summary_rows(&reconcile_all(warehouse), &config.reconciliation)
}

pub fn reconciliation_detail(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    detail_rows(warehouse, &reconcile_all(warehouse), &config.reconciliation)
}

/// One row per comparison, labeled with the band of its worst record.
#[must_use]
pub fn summary_rows(reconciliations: &[Reconciliation], settings: &ReconciliationSettings) -> Vec<ReportRow> {
    reconciliations
        .iter()
        .map(|reconciliation| {
            let summary = reconciliation.summary(&settings.tolerance);
            let row = ReportRow::new(
                summary.comparison,
                vec![
                    Some(MetricValue::from(summary.total_records)),
                    Some(MetricValue::from(summary.within_minor)),
                    Some(MetricValue::from(summary.within_major)),
                    Some(MetricValue::from(summary.over_major)),
                    summary.avg_abs_pct.map(MetricValue::rate),
                    summary.max_abs_pct.map(MetricValue::rate),
                ],
            );

            match summary.max_abs_pct {
                Some(max) => row.with_label(settings.tolerance.band(max).to_string()),
                None => row,
            }
        })
        .collect()
}

/// Every disagreeing record, grouped by comparison and ordered by percentage within each.
#[must_use]
pub fn detail_rows(warehouse: &Warehouse, reconciliations: &[Reconciliation], settings: &ReconciliationSettings) -> Vec<ReportRow> {
    reconciliations
        .iter()
        .flat_map(|reconciliation| {
            reconciliation
                .discrepancies()
                .into_iter()
                .take(settings.detail_limit.unwrap_or(usize::MAX))
                .map(|record| {
                    ReportRow::new(
                        warehouse.region_name(record.region_id),
                        vec![
                            Some(MetricValue::text(reconciliation.comparison)),
                            Some(MetricValue::text(record.period.to_string())),
                            Some(MetricValue::count(record.reference_total)),
                            Some(MetricValue::count(record.decomposed_sum)),
                            Some(MetricValue::count(record.difference)),
                            Some(MetricValue::rate(record.difference_pct)),
                        ],
                    )
                    .with_label(settings.tolerance.band(record.difference_pct).to_string())
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::ToleranceBand;
    use crate::schema::{
        AgeEmploymentRow, AgeEmploymentTable, AgeGroupId, IndustryCode, IndustryEmploymentRow, IndustryEmploymentTable, Period, RegionId,
        RegionRow, RegionTable, Table, UnemploymentRow, UnemploymentTable,
    };

    fn period(token: &str) -> Period {
        token.parse().unwrap()
    }

    fn total(region: u32, token: &str, employed_persons: f64) -> UnemploymentRow {
        UnemploymentRow {
            region_id: RegionId(region),
            period: period(token),
            unemployment_rate: 0.0,
            unemployment_level: 0.0,
            labor_force: employed_persons,
            employed_persons,
        }
    }

    fn industry(region: u32, code: &str, token: &str, employed_persons: f64) -> IndustryEmploymentRow {
        IndustryEmploymentRow {
            region_id: RegionId(region),
            industry_code: IndustryCode::from(code),
            period: period(token),
            employed_persons,
        }
    }

    fn warehouse() -> Warehouse {
        let regions = RegionTable::build(vec![
            RegionRow {
                region_id: RegionId(1),
                region_name: "North".into(),
            },
            RegionRow {
                region_id: RegionId(2),
                region_name: "South".into(),
            },
        ])
        .unwrap();

        let totals = UnemploymentTable::build(vec![total(1, "2023-01", 100.0), total(1, "2023-02", 100.0), total(2, "2023-01", 200.0)]).unwrap();

        let industries = IndustryEmploymentTable::build(vec![
            industry(1, "A", "2023-01", 60.0),
            industry(1, "B", "2023-01", 40.0),
            industry(1, "A", "2023-02", 95.0),
            industry(2, "A", "2023-01", 180.0),
        ])
        .unwrap();

        let ages = AgeEmploymentTable::build(vec![AgeEmploymentRow {
            region_id: RegionId(1),
            age_group_id: AgeGroupId(1),
            period: period("2023-01"),
            employed_count: 100.0,
        }])
        .unwrap();

        Warehouse::default()
            .with_region_table(regions)
            .with_unemployment_table(totals)
            .with_industry_employment_table(industries)
            .with_age_employment_table(ages)
    }

    #[test]
    fn test_reconcile_all_keeps_comparison_order() {
        let names: Vec<_> = reconcile_all(&warehouse()).iter().map(|r| r.comparison).collect();
        assert_eq!(names, vec!["industry_vs_total", "education_vs_total", "age_vs_total"]);
    }

    #[test]
    fn test_summary_rows() {
        let config = Config::default();
        let rows = reconciliation_summary(&warehouse(), &config);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].entity, "industry_vs_total");
        assert_eq!(
            rows[0].values,
            vec![
                Some(MetricValue::UInt(3)),
                Some(MetricValue::UInt(1)),
                Some(MetricValue::UInt(0)),
                Some(MetricValue::UInt(2)),
                Some(MetricValue::Rate(5.0)),
                Some(MetricValue::Rate(10.0)),
            ]
        );
        assert_eq!(rows[0].label.as_deref(), Some("over major tolerance"));

        assert_eq!(rows[1].values[0], Some(MetricValue::UInt(0)));
        assert_eq!(rows[1].values[4], None);
        assert_eq!(rows[1].label, None);

        assert_eq!(rows[2].values[1], Some(MetricValue::UInt(1)));
        assert_eq!(rows[2].label.as_deref(), Some(ToleranceBand::Minor.to_string().as_str()));
    }

    #[test]
    fn test_detail_rows_skip_exact_matches() {
        let config = Config::default();
        let rows = reconciliation_detail(&warehouse(), &config);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entity, "South");
        assert_eq!(
            rows[0].values,
            vec![
                Some(MetricValue::text("industry_vs_total")),
                Some(MetricValue::text("2023-01")),
                Some(MetricValue::Count(200.0)),
                Some(MetricValue::Count(180.0)),
                Some(MetricValue::Count(20.0)),
                Some(MetricValue::Rate(10.0)),
            ]
        );
        assert_eq!(rows[1].entity, "North");
        assert_eq!(rows[1].values[5], Some(MetricValue::Rate(5.0)));
        assert_eq!(rows[1].label.as_deref(), Some("over major tolerance"));
    }

    #[test]
    fn test_detail_label_follows_unrounded_percentage() {
        let regions = RegionTable::build(vec![RegionRow {
            region_id: RegionId(1),
            region_name: "North".into(),
        }])
        .unwrap();
        let totals = UnemploymentTable::build(vec![total(1, "2023-01", 100_001.0)]).unwrap();
        let industries = IndustryEmploymentTable::build(vec![industry(1, "A", "2023-01", 99_001.0)]).unwrap();
        let warehouse = Warehouse::default()
            .with_region_table(regions)
            .with_unemployment_table(totals)
            .with_industry_employment_table(industries);

        let rows = reconciliation_detail(&warehouse, &Config::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].values[5], Some(MetricValue::Rate(1.0)));
        assert_eq!(rows[0].label.as_deref(), Some("within minor tolerance"));
    }

    #[test]
    fn test_detail_limit_applies_per_comparison() {
        let mut config = Config::default();
        config.reconciliation.detail_limit = Some(1);
        let rows = reconciliation_detail(&warehouse(), &config);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entity, "South");
    }

    #[test]
    fn test_empty_warehouse() {
        let warehouse = Warehouse::default();
        let config = Config::default();
        assert!(reconciliation_detail(&warehouse, &config).is_empty());

        let summary = reconciliation_summary(&warehouse, &config);
        assert_eq!(summary.len(), 3);
        assert!(summary.iter().all(|row| row.label.is_none()));
        assert!(warehouse.unemployment_table().is_empty());
    }
}
