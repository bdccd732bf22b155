use super::settings::TrendSettings;
use super::{MetricValue, ReportRow};
use crate::config::Config;
use crate::schema::{Table, Warehouse};
use crate::stats::yearly_means;
use crate::trend::{TrendForm, TrendSummary, rank, summarize, year_over_year};

/// Mean year-over-year employment growth per industry, over every (industry, region) series.
pub fn industry_growth(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.industry_growth;
    let yearly = yearly_means(
        warehouse.industry_employment_table().iter(),
        settings.since,
        |row| row.period,
        |row| (row.industry_code.clone(), row.region_id),
        |row| row.employed_persons,
    );

    let summaries = summarize(&year_over_year(&yearly), TrendForm::Growth, |(industry, _)| industry.clone());
    trend_rows(summaries, settings, |industry| warehouse.industry_name(industry), MetricValue::count)
}

/// Mean year-over-year employment growth per education level, over every (level, region) series.
pub fn education_growth(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.education_growth;
    let yearly = yearly_means(
        warehouse.education_employment_table().iter(),
        settings.since,
        |row| row.period,
        |row| (row.education_id, row.region_id),
        |row| row.employed_count,
    );

    let summaries = summarize(&year_over_year(&yearly), TrendForm::Growth, |&(education, _)| education);
    trend_rows(summaries, settings, |&education| warehouse.education_name(education), MetricValue::count)
}

/// Mean year-over-year growth of insured workers per region.
pub fn insurance_growth(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.insurance_growth;
    let yearly = yearly_means(
        warehouse.insurance_table().iter(),
        settings.since,
        |row| row.period,
        |row| row.region_id,
        |row| row.insured_count,
    );

    let summaries = summarize(&year_over_year(&yearly), TrendForm::Growth, |&region| region);
    trend_rows(summaries, settings, |&region| warehouse.region_name(region), MetricValue::count)
}

/// Mean year-over-year change of the unemployment rate per region, in percentage points.
///
/// A rate is already a ratio, so the change is a plain difference of yearly means.
pub fn unemployment_trend(warehouse: &Warehouse, config: &Config) -> Vec<ReportRow> {
    let settings = &config.unemployment_trend;
    let yearly = yearly_means(
        warehouse.unemployment_table().iter(),
        settings.since,
        |row| row.period,
        |row| row.region_id,
        |row| row.unemployment_rate,
    );

    let summaries = summarize(&year_over_year(&yearly), TrendForm::Delta, |&region| region);
    trend_rows(summaries, settings, |&region| warehouse.region_name(region), MetricValue::rate)
}

fn trend_rows<G: Ord>(
    summaries: Vec<TrendSummary<G>>,
    settings: &TrendSettings,
    entity: impl Fn(&G) -> String,
    total_change: fn(f64) -> MetricValue,
) -> Vec<ReportRow> {
    rank(summaries, settings.min_observations, settings.metric, settings.limit)
        .into_iter()
        .map(|summary| {
            let label = settings.classification.classify(summary.metric(settings.metric));
            ReportRow::new(
                entity(&summary.group),
                vec![
                    Some(MetricValue::from(summary.observations)),
                    Some(MetricValue::rate(summary.average)),
                    Some(total_change(summary.total_change)),
                ],
            )
            .with_label(label)
        })
        .collect()
}
