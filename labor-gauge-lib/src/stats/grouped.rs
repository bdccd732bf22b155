use super::Welford;
use crate::schema::Period;
use std::collections::BTreeMap;

/// Count, mean, sum, and population standard deviation of one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStats {
    pub count: u64,
    pub sum: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&Welford> for GroupStats {
    fn from(acc: &Welford) -> Self {
        Self {
            count: acc.count(),
            sum: acc.sum(),
            mean: acc.mean(),
            std_dev: acc.population_std_dev(),
        }
    }
}

/// Groups rows by `key` and summarizes `measure` per group.
///
/// Only rows whose period is at or after `since` contribute. Groups are created on
/// first contribution, so no group is ever emitted with a zero count.
pub fn grouped_stats<'a, R: 'a, K: Ord>(
    rows: impl IntoIterator<Item = &'a R>,
    since: Option<Period>,
    period: impl Fn(&R) -> Period,
    key: impl Fn(&R) -> K,
    measure: impl Fn(&R) -> f64,
) -> BTreeMap<K, GroupStats> {
    let mut accumulators: BTreeMap<K, Welford> = BTreeMap::new();

    for row in rows {
        if since.is_some_and(|bound| period(row) < bound) {
            continue;
        }
        accumulators.entry(key(row)).or_default().push(measure(row));
    }

    accumulators.into_iter().map(|(k, acc)| (k, GroupStats::from(&acc))).collect()
}

/// Mean of `measure` per (`partition`, calendar year).
pub fn yearly_means<'a, R: 'a, P: Ord>(
    rows: impl IntoIterator<Item = &'a R>,
    since: Option<Period>,
    period: impl Fn(&R) -> Period,
    partition: impl Fn(&R) -> P,
    measure: impl Fn(&R) -> f64,
) -> BTreeMap<(P, i32), f64> {
    grouped_stats(rows, since, &period, |row| (partition(row), period(row).year()), measure)
        .into_iter()
        .map(|(key, stats)| (key, stats.mean))
        .collect()
}

/// Sum of `measure` per group over the rows at or after `since`.
pub fn grouped_sums<'a, R: 'a, K: Ord>(
    rows: impl IntoIterator<Item = &'a R>,
    since: Option<Period>,
    period: impl Fn(&R) -> Period,
    key: impl Fn(&R) -> K,
    measure: impl Fn(&R) -> f64,
) -> BTreeMap<K, f64> {
    let mut sums: BTreeMap<K, f64> = BTreeMap::new();

    for row in rows {
        if since.is_some_and(|bound| period(row) < bound) {
            continue;
        }
        *sums.entry(key(row)).or_default() += measure(row);
    }

    sums
}
