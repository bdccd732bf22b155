use crate::Result;
use crate::classify::{Band, Bands};
use crate::reconcile::Tolerance;
use crate::schema::{AgeGroupId, EducationId, Period};
use crate::trend::TrendMetric;
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};

/// Settings for a year-over-year trend report.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TrendSettings {
    /// Ignore periods before this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<Period>,

    /// Groups with fewer year-over-year points are left out
    pub min_observations: u64,

    /// Summary value used for ranking and classification
    pub metric: TrendMetric,

    /// Maximum number of rows to report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    pub classification: Bands,
}

/// Settings for the volatility report.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VolatilitySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<Period>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    pub classification: Bands,
}

/// Settings for reports computed over a trailing window ending at the latest period.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSettings {
    pub trailing_months: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    pub classification: Bands,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SeniorShareSettings {
    pub trailing_months: u32,

    /// Age groups with this id or higher count as senior
    pub senior_cutoff: AgeGroupId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    pub classification: Bands,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSettings {
    pub trailing_months: u32,

    /// Education level counted as college-educated
    pub college_education_id: EducationId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Applied to the employment-to-population ratio
    pub classification: Bands,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReconciliationSettings {
    /// Maximum number of detail rows per comparison
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_limit: Option<usize>,

    #[serde(default)]
    pub tolerance: Tolerance,
}

impl TrendSettings {
    pub fn validate(&self, section: &str) -> Result<()> {
        if self.min_observations == 0 {
            bail!("[{section}] min_observations must be at least 1");
        }
        validate_limit(section, self.limit)
    }
}

impl VolatilitySettings {
    pub fn validate(&self, section: &str) -> Result<()> {
        validate_limit(section, self.limit)
    }
}

impl WindowSettings {
    pub fn validate(&self, section: &str) -> Result<()> {
        validate_window(section, self.trailing_months)?;
        validate_limit(section, self.limit)
    }
}

impl SeniorShareSettings {
    pub fn validate(&self, section: &str) -> Result<()> {
        validate_window(section, self.trailing_months)?;
        validate_limit(section, self.limit)
    }
}

impl ProfileSettings {
    pub fn validate(&self, section: &str) -> Result<()> {
        validate_window(section, self.trailing_months)?;
        validate_limit(section, self.limit)
    }
}

impl ReconciliationSettings {
    pub fn validate(&self, section: &str) -> Result<()> {
        self.tolerance.validate().into_app_err_with(|| format!("invalid [{section}] settings"))?;
        validate_limit(section, self.detail_limit)
    }
}

fn validate_window(section: &str, trailing_months: u32) -> Result<()> {
    if trailing_months == 0 {
        bail!("[{section}] trailing_months must be at least 1");
    }
    Ok(())
}

fn validate_limit(section: &str, limit: Option<usize>) -> Result<()> {
    if limit == Some(0) {
        bail!("[{section}] limit must be at least 1 when set");
    }
    Ok(())
}

/// Builds a band table from constant (threshold, label) pairs.
pub(crate) fn bands(table: &[(f64, &str)], default: &str) -> Bands {
    let bands = table.iter().map(|&(above, label)| Band { above, label: label.into() }).collect();
    Bands::new(bands, default).expect("built-in classification bands are well-formed")
}

pub(crate) fn growth_bands() -> Bands {
    bands(&[(5.0, "high growth"), (2.0, "growth"), (-2.0, "stable")], "declining")
}

pub(crate) fn default_industry_growth() -> TrendSettings {
    TrendSettings {
        since: None,
        min_observations: 10,
        metric: TrendMetric::Average,
        limit: Some(10),
        classification: growth_bands(),
    }
}

pub(crate) fn default_education_growth() -> TrendSettings {
    TrendSettings {
        since: None,
        min_observations: 10,
        metric: TrendMetric::Average,
        limit: None,
        classification: growth_bands(),
    }
}

pub(crate) fn default_insurance_growth() -> TrendSettings {
    TrendSettings {
        since: None,
        min_observations: 2,
        metric: TrendMetric::Average,
        limit: None,
        classification: bands(&[(5.0, "rapid expansion"), (0.0, "expanding")], "contracting"),
    }
}

pub(crate) fn default_unemployment_trend() -> TrendSettings {
    TrendSettings {
        since: None,
        min_observations: 2,
        metric: TrendMetric::Average,
        limit: None,
        classification: bands(&[(0.5, "worsening"), (-0.5, "stable")], "improving"),
    }
}

pub(crate) fn default_unemployment_volatility() -> VolatilitySettings {
    VolatilitySettings {
        since: None,
        limit: None,
        classification: bands(&[(1.0, "volatile"), (0.5, "moderate")], "stable"),
    }
}

pub(crate) fn default_industry_diversification() -> WindowSettings {
    WindowSettings {
        trailing_months: 12,
        limit: None,
        classification: bands(&[(0.85, "highly diversified"), (0.75, "diversified"), (0.6, "moderate")], "concentrated"),
    }
}

pub(crate) fn default_age_balance() -> WindowSettings {
    WindowSettings {
        trailing_months: 12,
        limit: None,
        classification: bands(&[(0.8, "balanced"), (0.7, "moderate")], "skewed"),
    }
}

pub(crate) fn default_senior_share() -> SeniorShareSettings {
    SeniorShareSettings {
        trailing_months: 12,
        senior_cutoff: AgeGroupId(5),
        limit: None,
        classification: bands(&[(0.4, "aged"), (0.3, "aging")], "young"),
    }
}

pub(crate) fn default_regional_profile() -> ProfileSettings {
    ProfileSettings {
        trailing_months: 12,
        college_education_id: EducationId(4),
        limit: None,
        classification: bands(&[(0.6, "high employment"), (0.5, "moderate employment")], "low employment"),
    }
}

pub(crate) fn default_reconciliation() -> ReconciliationSettings {
    ReconciliationSettings {
        detail_limit: None,
        tolerance: Tolerance::default(),
    }
}
