use super::{Breakdown, RegionPeriodTotals, Tolerance, ToleranceBand};
use crate::schema::{Period, RegionId};

/// Log target for reconciliation
const LOG_TARGET: &str = " reconcile";

/// One (region, period) compared across the aggregate and decomposed sources.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationRecord {
    pub region_id: RegionId,
    pub period: Period,
    pub reference_total: f64,
    pub decomposed_sum: f64,

    /// `reference_total - decomposed_sum`
    pub difference: f64,

    /// `|difference| / reference_total * 100`, unrounded
    pub difference_pct: f64,
}

impl ReconciliationRecord {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.difference == 0.0
    }
}

/// Every joined (region, period) record for one comparison, in (region, period) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub comparison: &'static str,
    pub records: Vec<ReconciliationRecord>,
}

/// Data-quality score for one comparison. Exact matches are counted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationSummary {
    pub comparison: &'static str,
    pub total_records: usize,
    pub within_minor: usize,
    pub within_major: usize,
    pub over_major: usize,

    /// `None` when there are no records
    pub avg_abs_pct: Option<f64>,
    pub max_abs_pct: Option<f64>,
}

/// Compares a decomposed source against the aggregate reference totals.
///
/// Only (region, period) pairs present on both sides are compared. Pairs whose reference
/// total is not positive have an undefined percentage and are left out.
#[must_use]
pub fn reconcile(comparison: &'static str, reference: &RegionPeriodTotals, decomposed: &RegionPeriodTotals) -> Reconciliation {
    let records = decomposed
        .iter()
        .filter_map(|(&(region_id, period), &decomposed_sum)| {
            let &reference_total = reference.get(&(region_id, period))?;
            if reference_total.is_nan() || reference_total <= 0.0 {
                log::debug!(
                    target: LOG_TARGET,
                    "{comparison}: skipping region {region_id} at {period}, reference total is {reference_total}"
                );
                return None;
            }

            let difference = reference_total - decomposed_sum;
            Some(ReconciliationRecord {
                region_id,
                period,
                reference_total,
                decomposed_sum,
                difference,
                difference_pct: difference.abs() / reference_total * 100.0,
            })
        })
        .collect();

    Reconciliation { comparison, records }
}

/// [`reconcile`] for a [`Breakdown`] source.
#[must_use]
pub fn reconcile_breakdown<B: Breakdown>(reference: &RegionPeriodTotals, source: &B) -> Reconciliation {
    reconcile(B::COMPARISON, reference, &source.region_period_totals())
}

impl Reconciliation {
    /// Records that disagree, largest percentage first (ties by region, then period).
    #[must_use]
    pub fn discrepancies(&self) -> Vec<&ReconciliationRecord> {
        let mut rows: Vec<_> = self.records.iter().filter(|record| !record.is_exact()).collect();
        rows.sort_by(|a, b| {
            b.difference_pct
                .total_cmp(&a.difference_pct)
                .then_with(|| a.region_id.cmp(&b.region_id))
                .then_with(|| a.period.cmp(&b.period))
        });
        rows
    }

    #[must_use]
    pub fn summary(&self, tolerance: &Tolerance) -> ReconciliationSummary {
        let mut summary = ReconciliationSummary {
            comparison: self.comparison,
            total_records: self.records.len(),
            within_minor: 0,
            within_major: 0,
            over_major: 0,
            avg_abs_pct: None,
            max_abs_pct: None,
        };

        let mut sum = 0.0;
        for record in &self.records {
            match tolerance.band(record.difference_pct) {
                ToleranceBand::Minor => summary.within_minor += 1,
                ToleranceBand::Major => summary.within_major += 1,
                ToleranceBand::OverMajor => summary.over_major += 1,
            }
            sum += record.difference_pct;
            summary.max_abs_pct = Some(summary.max_abs_pct.map_or(record.difference_pct, |max: f64| max.max(record.difference_pct)));
        }

        if !self.records.is_empty() {
            #[expect(clippy::cast_precision_loss, reason = "record counts stay far below 2^52")]
            let count = self.records.len() as f64;
            summary.avg_abs_pct = Some(sum / count);
        }

        summary
    }
}
