use crate::Result;
use ohno::bail;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Thresholds, in percent, that split reconciliation records into quality bands.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Tolerance {
    /// Upper bound (exclusive) of the minor band
    #[serde(default = "default_minor_pct")]
    pub minor_pct: f64,

    /// Upper bound (exclusive) of the major band
    #[serde(default = "default_major_pct")]
    pub major_pct: f64,
}

const fn default_minor_pct() -> f64 {
    1.0
}

const fn default_major_pct() -> f64 {
    5.0
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            minor_pct: default_minor_pct(),
            major_pct: default_major_pct(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ToleranceBand {
    #[strum(to_string = "within minor tolerance")]
    Minor,

    #[strum(to_string = "within major tolerance")]
    Major,

    #[strum(to_string = "over major tolerance")]
    OverMajor,
}

impl Tolerance {
    #[must_use]
    pub fn band(&self, abs_pct: f64) -> ToleranceBand {
        if abs_pct < self.minor_pct {
            ToleranceBand::Minor
        } else if abs_pct < self.major_pct {
            ToleranceBand::Major
        } else {
            ToleranceBand::OverMajor
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.minor_pct.is_finite() || !self.major_pct.is_finite() {
            bail!("reconciliation tolerances must be finite");
        }

        if self.minor_pct <= 0.0 || self.minor_pct >= self.major_pct {
            bail!(
                "reconciliation tolerances must satisfy 0 < minor_pct < major_pct, got minor_pct = {} and major_pct = {}",
                self.minor_pct,
                self.major_pct
            );
        }

        Ok(())
    }
}
