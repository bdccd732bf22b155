use crate::schema::Period;
use crate::stats::grouped_sums;
use std::collections::BTreeMap;

/// Sums `measure` per (partition, category) over rows at or after `since`, nested by partition.
pub fn partition_totals<'a, R: 'a, P: Ord, C: Ord>(
    rows: impl IntoIterator<Item = &'a R>,
    since: Option<Period>,
    period: impl Fn(&R) -> Period,
    partition: impl Fn(&R) -> P,
    category: impl Fn(&R) -> C,
    measure: impl Fn(&R) -> f64,
) -> BTreeMap<P, BTreeMap<C, f64>> {
    let mut nested: BTreeMap<P, BTreeMap<C, f64>> = BTreeMap::new();

    for ((p, c), total) in grouped_sums(rows, since, period, |row| (partition(row), category(row)), measure) {
        let _ = nested.entry(p).or_default().insert(c, total);
    }

    nested
}

/// Each category's fraction of the partition total.
///
/// `None` when the partition total is not positive.
#[must_use]
pub fn shares<C: Ord + Clone>(totals: &BTreeMap<C, f64>) -> Option<BTreeMap<C, f64>> {
    let total: f64 = totals.values().sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    Some(totals.iter().map(|(category, value)| (category.clone(), value / total)).collect())
}

/// Portion of a partition total that belongs to a cohort of categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortShare {
    pub cohort_total: f64,
    pub total: f64,
    pub share: f64,
}

/// Plain (unsquared) share of the categories accepted by `member`.
///
/// `None` when the partition total is not positive.
pub fn cohort_share<C>(totals: &BTreeMap<C, f64>, member: impl Fn(&C) -> bool) -> Option<CohortShare> {
    let total: f64 = totals.values().sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    // an empty f64 sum is -0.0
    let cohort_total = totals.iter().filter(|(category, _)| member(category)).map(|(_, value)| value).sum::<f64>() + 0.0;

    Some(CohortShare {
        cohort_total,
        total,
        share: cohort_total / total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(entries: &[(u32, f64)]) -> BTreeMap<u32, f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_shares_sum_to_one() {
        let shares = shares(&totals(&[(1, 3.0), (2, 5.0), (3, 11.0), (4, 0.5)])).unwrap();
        let sum: f64 = shares.values().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_total_has_no_shares() {
        assert!(shares(&totals(&[(1, 0.0), (2, 0.0)])).is_none());
        assert!(shares(&BTreeMap::<u32, f64>::new()).is_none());
    }

    #[test]
    fn test_cohort_share_is_not_squared() {
        let share = cohort_share(&totals(&[(4, 30.0), (5, 50.0), (6, 20.0)]), |&id| id >= 5).unwrap();
        assert!((share.share - 0.7).abs() < 1e-12);
        assert!((share.cohort_total - 70.0).abs() < 1e-12);
        assert!((share.total - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_cohort_share_with_empty_cohort() {
        let share = cohort_share(&totals(&[(1, 30.0), (2, 70.0)]), |&id| id >= 5).unwrap();
        assert_eq!(share.cohort_total.to_bits(), 0.0_f64.to_bits());
        assert_eq!(share.share.to_bits(), 0.0_f64.to_bits());
        assert!(share.share.is_sign_positive());
    }

    #[test]
    fn test_partition_totals_applies_window() {
        struct Row {
            region: u32,
            category: u32,
            period: Period,
            value: f64,
        }

        let row = |region, category, token: &str, value| Row {
            region,
            category,
            period: token.parse().unwrap(),
            value,
        };

        let rows = vec![row(1, 1, "2022-01", 100.0), row(1, 1, "2023-01", 2.0), row(1, 2, "2023-02", 3.0), row(2, 1, "2023-02", 4.0)];
        let nested = partition_totals(&rows, "2023-01".parse().ok(), |r| r.period, |r| r.region, |r| r.category, |r| r.value);

        assert_eq!(nested.len(), 2);
        assert!((nested[&1][&1] - 2.0).abs() < 1e-12);
        assert!((nested[&1][&2] - 3.0).abs() < 1e-12);
        assert!((nested[&2][&1] - 4.0).abs() < 1e-12);
    }
}
