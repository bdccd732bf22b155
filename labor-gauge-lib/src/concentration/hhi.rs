use std::collections::BTreeMap;

/// Herfindahl-Hirschman concentration of one partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concentration {
    /// Number of categories with a positive total
    pub categories: usize,

    /// Partition total
    pub total: f64,

    /// Sum of squared shares, in (0, 1]
    pub hhi: f64,
}

impl Concentration {
    /// `1 - HHI`, reported as diversification or balance depending on the breakdown.
    #[must_use]
    pub fn diversification(&self) -> f64 {
        1.0 - self.hhi
    }
}

/// Computes the HHI over a partition's category totals.
///
/// `None` when the partition total is not positive.
#[must_use]
pub fn concentration<C>(totals: &BTreeMap<C, f64>) -> Option<Concentration> {
    let total: f64 = totals.values().sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    let hhi: f64 = totals.values().map(|value| (value / total).powi(2)).sum();

    Some(Concentration {
        categories: totals.values().filter(|&&value| value > 0.0).count(),
        total,
        hhi: hhi.min(1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(values: &[f64]) -> BTreeMap<usize, f64> {
        values.iter().copied().enumerate().collect()
    }

    #[test]
    fn test_single_category_is_fully_concentrated() {
        let c = concentration(&totals(&[0.0, 42.0, 0.0])).unwrap();
        assert_eq!(c.categories, 1);
        assert!((c.hhi - 1.0).abs() < f64::EPSILON);
        assert!(c.diversification().abs() < f64::EPSILON);
    }

    #[test]
    fn test_even_split() {
        let c = concentration(&totals(&[25.0, 25.0, 25.0, 25.0])).unwrap();
        assert!((c.hhi - 0.25).abs() < 1e-12);
        assert!((c.diversification() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_hold_for_uneven_partitions() {
        for values in [&[1.0, 2.0, 3.0][..], &[1e-9, 1e9], &[7.0], &[0.5, 0.5, 1e6, 3.0]] {
            let c = concentration(&totals(values)).unwrap();
            assert!(c.hhi > 0.0 && c.hhi <= 1.0, "{values:?}: {}", c.hhi);
            let d = c.diversification();
            assert!((0.0..1.0).contains(&d), "{values:?}: {d}");
        }
    }

    #[test]
    fn test_zero_total_is_undefined() {
        assert!(concentration(&totals(&[0.0, 0.0])).is_none());
        assert!(concentration(&BTreeMap::<u8, f64>::new()).is_none());
    }
}
