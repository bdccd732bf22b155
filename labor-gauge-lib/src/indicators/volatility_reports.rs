use super::report::{Ranked, rank_rows};
use super::{MetricValue, ReportRow};
use crate::config::Config;
use crate::schema::{Table, Warehouse};
use crate::stats::grouped_stats;

/// Mean and population standard deviation of the monthly unemployment rate per region.
pub fn unemployment_volatility(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.unemployment_volatility;
    let stats = grouped_stats(
        warehouse.unemployment_table().iter(),
        settings.since,
        |row| row.period,
        |row| row.region_id,
        |row| row.unemployment_rate,
    );

    let ranked = stats
        .into_iter()
        .map(|(region, stats)| Ranked {
            key: region,
            score: stats.std_dev,
            row: ReportRow::new(
                warehouse.region_name(region),
                vec![
                    Some(MetricValue::from(stats.count)),
                    Some(MetricValue::rate(stats.mean)),
                    Some(MetricValue::rate(stats.std_dev)),
                ],
            )
            .with_label(settings.classification.classify(stats.std_dev)),
        })
        .collect();

    rank_rows(ranked, settings.limit)
}
