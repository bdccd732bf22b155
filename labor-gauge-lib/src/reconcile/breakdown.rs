use crate::schema::{AgeEmploymentTable, EducationEmploymentTable, IndustryEmploymentTable, Period, RegionId, Table, UnemploymentTable};
use std::collections::BTreeMap;

/// Employment totals keyed by (region, period).
pub type RegionPeriodTotals = BTreeMap<(RegionId, Period), f64>;

/// A fact source that breaks regional employment out by a finer dimension.
pub trait Breakdown: Sync {
    /// Name of the comparison against the aggregate source
    const COMPARISON: &'static str;

    /// Sum over the finer dimension for every (region, period).
    fn region_period_totals(&self) -> RegionPeriodTotals;
}

impl Breakdown for IndustryEmploymentTable {
    const COMPARISON: &'static str = "industry_vs_total";

    fn region_period_totals(&self) -> RegionPeriodTotals {
        sum_by_region_period(self.iter().map(|row| (row.region_id, row.period, row.employed_persons)))
    }
}

impl Breakdown for EducationEmploymentTable {
    const COMPARISON: &'static str = "education_vs_total";

    fn region_period_totals(&self) -> RegionPeriodTotals {
        sum_by_region_period(self.iter().map(|row| (row.region_id, row.period, row.employed_count)))
    }
}

impl Breakdown for AgeEmploymentTable {
    const COMPARISON: &'static str = "age_vs_total";

    fn region_period_totals(&self) -> RegionPeriodTotals {
        sum_by_region_period(self.iter().map(|row| (row.region_id, row.period, row.employed_count)))
    }
}

/// Employed persons from the aggregate unemployment survey, the reference side of every comparison.
#[must_use]
pub fn reference_totals(table: &UnemploymentTable) -> RegionPeriodTotals {
    table.iter().map(|row| ((row.region_id, row.period), row.employed_persons)).collect()
}

fn sum_by_region_period(values: impl Iterator<Item = (RegionId, Period, f64)>) -> RegionPeriodTotals {
    let mut totals = RegionPeriodTotals::new();
    for (region_id, period, value) in values {
        *totals.entry((region_id, period)).or_default() += value;
    }
    totals
}
