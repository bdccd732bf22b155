use super::Host;
use super::common::{LogLevel, WarehouseArgs, init_logging, load_inputs};
use crate::Result;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::schema::Warehouse;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `gauge.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Also load the warehouse in this directory and check its integrity
    #[arg(long, short = 'd', value_name = "PATH")]
    pub data_dir: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Loads the configuration and, when a data directory is given, the warehouse.
fn validate_inner(args: &ValidateArgs) -> Result<Option<Warehouse>> {
    if let Some(data_dir) = &args.data_dir {
        let (warehouse, _) = load_inputs(&WarehouseArgs {
            data_dir: data_dir.clone(),
            config: args.config.clone(),
            log_level: args.log_level,
        })?;
        return Ok(Some(warehouse));
    }

    let _ = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    Ok(None)
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    init_logging(args.log_level);

    match validate_inner(args) {
        Ok(warehouse) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = &args.config {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let base = args.data_dir.as_deref().unwrap_or_else(|| Utf8Path::new("."));
                if base.join(CONFIG_FILE_NAME).is_file() {
                    let _ = writeln!(host.output(), "Config file: {}", base.join(CONFIG_FILE_NAME));
                } else {
                    let _ = writeln!(host.output(), "Using default configuration (no config file found)");
                }
            }

            if let (Some(data_dir), Some(warehouse)) = (&args.data_dir, warehouse) {
                let rows: usize = warehouse.summary().iter().map(|table| table.rows).sum();
                let _ = writeln!(host.output(), "Warehouse in '{data_dir}' is consistent ({rows} rows)");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::init::{InitArgs, init_config};
    use crate::commands::test_support::fixture_dir;
    use std::fs;

    fn args(config: Option<Utf8PathBuf>, data_dir: Option<Utf8PathBuf>) -> ValidateArgs {
        ValidateArgs {
            config,
            data_dir,
            log_level: LogLevel::None,
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_default_config_is_valid() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("gauge.toml")).unwrap();

        let mut init_host = TestHost::new();
        init_config(&mut init_host, &InitArgs {
            output: Some(config_path.clone()),
        })
        .unwrap();

        let mut host = TestHost::new();
        validate_config(&mut host, &args(Some(config_path), None)).unwrap();

        let output = host.output_str();
        assert!(output.contains("Configuration file is valid"), "{output}");
        assert!(output.contains("Config file:"), "{output}");
        assert_eq!(host.exit_code, None);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_tolerance_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("bad.toml")).unwrap();
        fs::write(&config_path, "[reconciliation.tolerance]\nminor_pct = 6.0\nmajor_pct = 5.0\n").unwrap();

        let mut host = TestHost::new();
        let result = validate_config(&mut host, &args(Some(config_path), None));

        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().contains("Validation failed"), "{}", host.error_str());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_toml_syntax_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("broken.toml")).unwrap();
        fs::write(&config_path, "[age_balance\ntrailing_months = 6\n").unwrap();

        let mut host = TestHost::new();
        assert!(validate_config(&mut host, &args(Some(config_path), None)).is_err());
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_valid_warehouse() {
        let (_tmp, data_dir) = fixture_dir();

        let mut host = TestHost::new();
        validate_config(&mut host, &args(None, Some(data_dir))).unwrap();

        let output = host.output_str();
        assert!(output.contains("Using default configuration"), "{output}");
        assert!(output.contains("is consistent (16 rows)"), "{output}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_orphaned_fact_row_fails() {
        let (_tmp, data_dir) = fixture_dir();
        fs::write(
            data_dir.join("population.csv"),
            "region_id,year_month,total_population\n99,2024-01,1000\n",
        )
        .unwrap();

        let mut host = TestHost::new();
        let err = validate_config(&mut host, &args(None, Some(data_dir))).unwrap_err();

        assert!(format!("{err:#}").contains("population.csv"), "{err:#}");
        assert_eq!(host.exit_code, Some(1));
    }
}
