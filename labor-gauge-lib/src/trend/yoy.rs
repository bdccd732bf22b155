use std::collections::BTreeMap;

/// One partition's yearly value compared against the same partition one year earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct YoyPoint<P> {
    pub partition: P,
    pub year: i32,
    pub previous: f64,
    pub current: f64,
}

impl<P> YoyPoint<P> {
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.current - self.previous
    }

    /// Percentage growth over the prior year.
    ///
    /// Undefined (`None`) when the prior value is zero or when either value is not finite.
    #[must_use]
    pub fn growth_rate(&self) -> Option<f64> {
        if self.previous == 0.0 || !self.previous.is_finite() || !self.current.is_finite() {
            return None;
        }

        let rate = self.delta() / self.previous * 100.0;
        rate.is_finite().then_some(rate)
    }
}

/// Pairs every (partition, year) value with the value for the same partition in the prior year.
///
/// The series is walked in key order and each entry is compared with the entry before it,
/// a lag of one within the partition. Years whose predecessor is missing (the first year
/// of a partition, or a gap) produce no point.
#[must_use]
pub fn year_over_year<P: Ord + Clone>(yearly: &BTreeMap<(P, i32), f64>) -> Vec<YoyPoint<P>> {
    yearly
        .iter()
        .zip(yearly.iter().skip(1))
        .filter(|(((prev_partition, prev_year), _), ((partition, year), _))| {
            prev_partition == partition && prev_year.checked_add(1) == Some(*year)
        })
        .map(|((_, &previous), ((partition, year), &current))| YoyPoint {
            partition: partition.clone(),
            year: *year,
            previous,
            current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(entries: &[(&'static str, i32, f64)]) -> BTreeMap<(&'static str, i32), f64> {
        entries.iter().map(|&(p, y, v)| ((p, y), v)).collect()
    }

    #[test]
    fn test_growth_of_ten_percent_per_year() {
        let points = year_over_year(&series(&[("a", 2021, 100.0), ("a", 2022, 110.0), ("a", 2023, 121.0)]));
        assert_eq!(points.len(), 2);

        let rates: Vec<f64> = points.iter().filter_map(YoyPoint::growth_rate).collect();
        assert_eq!(rates.len(), 2);
        assert!(rates.iter().all(|r| (r - 10.0).abs() < 1e-9), "{rates:?}");
    }

    #[test]
    fn test_first_year_and_gaps_are_excluded() {
        let points = year_over_year(&series(&[("a", 2019, 1.0), ("a", 2021, 2.0), ("a", 2022, 3.0)]));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year, 2022);
    }

    #[test]
    fn test_partitions_never_pair_with_each_other() {
        let points = year_over_year(&series(&[("a", 2021, 1.0), ("b", 2022, 5.0)]));
        assert!(points.is_empty());
    }

    #[test]
    fn test_zero_prior_value_has_no_growth_rate_but_keeps_delta() {
        let point = YoyPoint {
            partition: (),
            year: 2022,
            previous: 0.0,
            current: 4.0,
        };
        assert!(point.growth_rate().is_none());
        assert!((point.delta() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_values_have_no_growth_rate() {
        let point = YoyPoint {
            partition: (),
            year: 2022,
            previous: f64::NAN,
            current: 4.0,
        };
        assert!(point.growth_rate().is_none());
    }
}
