use super::YoyPoint;
use crate::stats::Welford;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which year-over-year quantity a trend report aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendForm {
    /// Percentage growth; points with an undefined growth rate are dropped entirely
    Growth,

    /// Absolute change; every point contributes
    Delta,
}

/// The summary value used to rank and classify a trend report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    Average,
    TotalChange,
}

/// Year-over-year rollup for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary<G> {
    pub group: G,

    /// Number of contributing year-over-year points
    pub observations: u64,

    /// Mean growth rate (growth form) or mean delta (delta form)
    pub average: f64,

    /// Sum of deltas over the contributing points
    pub total_change: f64,
}

impl<G> TrendSummary<G> {
    #[must_use]
    pub const fn metric(&self, metric: TrendMetric) -> f64 {
        match metric {
            TrendMetric::Average => self.average,
            TrendMetric::TotalChange => self.total_change,
        }
    }
}

/// Rolls year-over-year points up to `group`, in group order.
pub fn summarize<P, G: Ord>(points: &[YoyPoint<P>], form: TrendForm, group: impl Fn(&P) -> G) -> Vec<TrendSummary<G>> {
    let mut groups: BTreeMap<G, (Welford, f64)> = BTreeMap::new();

    for point in points {
        let value = match form {
            TrendForm::Growth => match point.growth_rate() {
                Some(rate) => rate,
                None => continue,
            },
            TrendForm::Delta => point.delta(),
        };

        let (acc, total_change) = groups.entry(group(&point.partition)).or_default();
        acc.push(value);
        *total_change += point.delta();
    }

    groups
        .into_iter()
        .map(|(group, (acc, total_change))| TrendSummary {
            group,
            observations: acc.count(),
            average: acc.mean(),
            total_change,
        })
        .collect()
}

/// Drops groups with fewer than `min_observations` points, orders the rest by `metric`
/// descending (ties by group ascending), and keeps at most `limit` rows.
#[must_use]
pub fn rank<G: Ord>(
    mut summaries: Vec<TrendSummary<G>>,
    min_observations: u64,
    metric: TrendMetric,
    limit: Option<usize>,
) -> Vec<TrendSummary<G>> {
    summaries.retain(|s| s.observations >= min_observations);
    summaries.sort_by(|a, b| b.metric(metric).total_cmp(&a.metric(metric)).then_with(|| a.group.cmp(&b.group)));
    if let Some(limit) = limit {
        summaries.truncate(limit);
    }
    summaries
}
