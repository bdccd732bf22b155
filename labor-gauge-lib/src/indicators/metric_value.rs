use crate::stats::round_to;
use compact_str::CompactString;

/// A single cell of a report row.
///
/// Floating-point values are rounded when constructed, so every output format
/// renders the same numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Percentage or percentage-point change, two decimals
    Rate(f64),

    /// Fraction of a whole, four decimals
    Proportion(f64),

    /// Persons, whole units
    Count(f64),

    UInt(u64),
    Text(CompactString),
}

impl MetricValue {
    #[must_use]
    pub fn rate(value: f64) -> Self {
        Self::Rate(round_to(value, 2))
    }

    #[must_use]
    pub fn proportion(value: f64) -> Self {
        Self::Proportion(round_to(value, 4))
    }

    #[must_use]
    pub fn count(value: f64) -> Self {
        Self::Count(round_to(value, 0))
    }

    #[must_use]
    pub fn text(value: impl Into<CompactString>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Rate(v) | Self::Proportion(v) | Self::Count(v) => Some(*v),
            Self::UInt(_) | Self::Text(_) => None,
        }
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_round() {
        assert_eq!(MetricValue::rate(3.14159), MetricValue::Rate(3.14));
        assert_eq!(MetricValue::proportion(0.123_456), MetricValue::Proportion(0.1235));
        assert_eq!(MetricValue::count(1234.6), MetricValue::Count(1235.0));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(MetricValue::rate(1.5).as_f64(), Some(1.5));
        assert_eq!(MetricValue::from(3_usize).as_f64(), None);
        assert_eq!(MetricValue::text("x").as_f64(), None);
    }
}
