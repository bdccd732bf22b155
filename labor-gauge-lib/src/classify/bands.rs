use crate::Result;
use compact_str::CompactString;
use ohno::bail;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A labeled lower bound (exclusive).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Band {
    pub above: f64,
    pub label: CompactString,
}

/// Ordered classification table with a fallback label.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawBands", into = "RawBands")]
pub struct Bands {
    bands: Vec<Band>,
    default: CompactString,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct RawBands {
    default: CompactString,
    #[serde(default)]
    bands: Vec<Band>,
}

impl Bands {
    /// Builds a classification table, sorting bands by descending threshold.
    ///
    /// # Errors
    ///
    /// Fails on non-finite thresholds, duplicate thresholds, or empty or duplicate labels.
    pub fn new(mut bands: Vec<Band>, default: impl Into<CompactString>) -> Result<Self> {
        let default = default.into();
        if default.trim().is_empty() {
            bail!("the default classification label must not be empty");
        }

        let mut labels = FxHashSet::default();
        let _ = labels.insert(default.clone());

        for band in &bands {
            if !band.above.is_finite() {
                bail!("classification threshold for '{}' must be finite, got {}", band.label, band.above);
            }
            if band.label.trim().is_empty() {
                bail!("classification labels must not be empty");
            }
            if !labels.insert(band.label.clone()) {
                bail!("duplicate classification label '{}'", band.label);
            }
        }

        bands.sort_by(|a, b| b.above.total_cmp(&a.above));

        for pair in bands.windows(2) {
            if let [higher, lower] = pair
                && higher.above.total_cmp(&lower.above).is_eq()
            {
                bail!("labels '{}' and '{}' share the threshold {}", higher.label, lower.label, higher.above);
            }
        }

        Ok(Self { bands, default })
    }

    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    #[must_use]
    pub fn default_label(&self) -> &str {
        &self.default
    }

    #[must_use]
    pub fn classify(&self, value: f64) -> &str {
        classify(value, &self.bands, &self.default)
    }
}

impl TryFrom<RawBands> for Bands {
    type Error = ohno::AppError;

    fn try_from(raw: RawBands) -> Result<Self> {
        Self::new(raw.bands, raw.default)
    }
}

impl From<Bands> for RawBands {
    fn from(bands: Bands) -> Self {
        Self {
            bands: bands.bands,
            default: bands.default,
        }
    }
}

/// Returns the label of the first band (in descending threshold order) whose threshold
/// `value` strictly exceeds, or `default_label` when none match.
///
/// A NaN value exceeds no threshold.
#[must_use]
pub fn classify<'a>(value: f64, bands: &'a [Band], default_label: &'a str) -> &'a str {
    bands
        .iter()
        .find(|band| value > band.above)
        .map_or(default_label, |band| band.label.as_str())
}
