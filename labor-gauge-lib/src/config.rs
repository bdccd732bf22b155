use crate::Result;
use crate::indicators::settings::{
    ProfileSettings, ReconciliationSettings, SeniorShareSettings, TrendSettings, VolatilitySettings, WindowSettings,
    default_age_balance, default_education_growth, default_industry_diversification, default_industry_growth, default_insurance_growth,
    default_reconciliation, default_regional_profile, default_senior_share, default_unemployment_trend, default_unemployment_volatility,
};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Name of the configuration file looked up in the data directory
pub const CONFIG_FILE_NAME: &str = "gauge.toml";

/// Log target for configuration loading
const LOG_TARGET: &str = "    config";

/// Per-report settings. Omitted sections fall back to built-in defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_industry_growth")]
    pub industry_growth: TrendSettings,

    #[serde(default = "default_education_growth")]
    pub education_growth: TrendSettings,

    #[serde(default = "default_insurance_growth")]
    pub insurance_growth: TrendSettings,

    #[serde(default = "default_unemployment_trend")]
    pub unemployment_trend: TrendSettings,

    #[serde(default = "default_unemployment_volatility")]
    pub unemployment_volatility: VolatilitySettings,

    #[serde(default = "default_industry_diversification")]
    pub industry_diversification: WindowSettings,

    #[serde(default = "default_age_balance")]
    pub age_balance: WindowSettings,

    #[serde(default = "default_senior_share")]
    pub senior_share: SeniorShareSettings,

    #[serde(default = "default_regional_profile")]
    pub regional_profile: ProfileSettings,

    #[serde(default = "default_reconciliation")]
    pub reconciliation: ReconciliationSettings,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `gauge.toml` in `data_dir` is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a value is out of range
    pub fn load(data_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading labor-gauge configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = data_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading labor-gauge configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate().into_app_err_with(|| format!("validating configuration file '{final_path}'"))?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a window, limit, observation threshold, or tolerance is out of range
    pub fn validate(&self) -> Result<()> {
        self.industry_growth.validate("industry_growth")?;
        self.education_growth.validate("education_growth")?;
        self.insurance_growth.validate("insurance_growth")?;
        self.unemployment_trend.validate("unemployment_trend")?;
        self.unemployment_volatility.validate("unemployment_volatility")?;
        self.industry_diversification.validate("industry_diversification")?;
        self.age_balance.validate("age_balance")?;
        self.senior_share.validate("senior_share")?;
        self.regional_profile.validate("regional_profile")?;
        self.reconciliation.validate("reconciliation")
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
