/// One-pass accumulator for count, sum, mean, and population variance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Welford {
    count: u64,
    sum: f64,
    mean: f64,
    m2: f64,
}

impl Welford {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    #[expect(clippy::cast_precision_loss, reason = "group sizes stay far below 2^52")]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum
    }

    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance. A non-positive (or NaN) radicand is treated as zero variance.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "group sizes stay far below 2^52")]
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }

        let radicand = self.m2 / self.count as f64;
        if radicand > 0.0 { radicand } else { 0.0 }
    }

    #[must_use]
    pub fn population_std_dev(&self) -> f64 {
        self.population_variance().sqrt()
    }
}

impl Extend<f64> for Welford {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for Welford {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
