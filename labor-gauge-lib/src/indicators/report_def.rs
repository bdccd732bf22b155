use super::{ReportCategory, ReportRow, concentration_reports, profile_reports, reconciliation_reports, trend_reports, volatility_reports};
use crate::config::Config;
use crate::schema::Warehouse;

#[derive(Debug)]
pub struct ReportDef {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ReportCategory,

    /// Header of the column naming each row's entity
    pub entity: &'static str,

    pub columns: &'static [&'static str],
    pub runner: fn(&Warehouse, &Config) -> Vec<ReportRow>,
}

macro_rules! report_def {
    ($name:expr, $description:expr, $category:ident, $entity:expr, [$($column:expr),* $(,)?], $runner:expr) => {
        ReportDef {
            name: $name,
            description: $description,
            category: ReportCategory::$category,
            entity: $entity,
            columns: &[$($column),*],
            runner: $runner,
        }
    };
}

pub static INDUSTRY_GROWTH: ReportDef = report_def!(
    "industry_growth",
    "Mean year-over-year employment growth per industry across regions",
    Trend,
    "industry",
    ["observations", "avg_growth", "total_change"],
    trend_reports::industry_growth
);

pub static EDUCATION_GROWTH: ReportDef = report_def!(
    "education_growth",
    "Mean year-over-year employment growth per education level across regions",
    Trend,
    "education_level",
    ["observations", "avg_growth", "total_change"],
    trend_reports::education_growth
);

pub static INSURANCE_GROWTH: ReportDef = report_def!(
    "insurance_growth",
    "Mean year-over-year growth of insured workers per region",
    Trend,
    "region",
    ["observations", "avg_growth", "total_change"],
    trend_reports::insurance_growth
);

pub static UNEMPLOYMENT_TREND: ReportDef = report_def!(
    "unemployment_trend",
    "Mean year-over-year change of the unemployment rate per region, in percentage points",
    Trend,
    "region",
    ["observations", "avg_change", "total_change"],
    trend_reports::unemployment_trend
);

pub static UNEMPLOYMENT_VOLATILITY: ReportDef = report_def!(
    "unemployment_volatility",
    "Mean and population standard deviation of the monthly unemployment rate per region",
    Volatility,
    "region",
    ["months", "mean_rate", "std_dev"],
    volatility_reports::unemployment_volatility
);

pub static INDUSTRY_DIVERSIFICATION: ReportDef = report_def!(
    "industry_diversification",
    "Herfindahl-Hirschman concentration of employment across industries per region",
    Concentration,
    "region",
    ["industries", "hhi", "diversification"],
    concentration_reports::industry_diversification
);

pub static AGE_BALANCE: ReportDef = report_def!(
    "age_balance",
    "Herfindahl-Hirschman concentration of employment across age groups per region",
    Demographics,
    "region",
    ["age_groups", "hhi", "balance"],
    concentration_reports::age_balance
);

pub static SENIOR_SHARE: ReportDef = report_def!(
    "senior_share",
    "Share of employment held by senior age groups per region",
    Demographics,
    "region",
    ["senior_employed", "total_employed", "senior_share"],
    concentration_reports::senior_share
);

pub static REGIONAL_PROFILE: ReportDef = report_def!(
    "regional_profile",
    "Employment, participation, insurance coverage, turnover, and college share ratios per region",
    Profile,
    "region",
    ["employment_ratio", "labor_force_ratio", "insurance_coverage", "turnover_rate", "college_share"],
    profile_reports::regional_profile
);

pub static RECONCILIATION_SUMMARY: ReportDef = report_def!(
    "reconciliation_summary",
    "Agreement of each employment breakdown with the aggregate employed-persons totals",
    Reconciliation,
    "comparison",
    ["total_records", "within_minor", "within_major", "over_major", "avg_abs_pct", "max_abs_pct"],
    reconciliation_reports::reconciliation_summary
);

pub static RECONCILIATION_DETAIL: ReportDef = report_def!(
    "reconciliation_detail",
    "Region-months where an employment breakdown disagrees with the aggregate total",
    Reconciliation,
    "region",
    ["comparison", "period", "reference_total", "decomposed_sum", "difference", "difference_pct"],
    reconciliation_reports::reconciliation_detail
);

/// Every report, in output order.
pub static REPORT_DEFINITIONS: &[&ReportDef] = &[
    &INDUSTRY_GROWTH,
    &EDUCATION_GROWTH,
    &INSURANCE_GROWTH,
    &UNEMPLOYMENT_TREND,
    &UNEMPLOYMENT_VOLATILITY,
    &INDUSTRY_DIVERSIFICATION,
    &AGE_BALANCE,
    &SENIOR_SHARE,
    &REGIONAL_PROFILE,
    &RECONCILIATION_SUMMARY,
    &RECONCILIATION_DETAIL,
];

#[must_use]
pub fn find(name: &str) -> Option<&'static ReportDef> {
    REPORT_DEFINITIONS.iter().copied().find(|def| def.name == name)
}
