//! Argument handling and report output shared between the `report` and `reconcile` commands.

use super::Host;
use crate::Result;
use crate::config::Config;
use crate::indicators::Report;
use crate::reports::{generate_console, generate_csv, generate_json, generate_xlsx};
use crate::schema::Warehouse;
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Where to find the warehouse and its configuration
#[derive(Args, Debug, Clone)]
pub struct WarehouseArgs {
    /// Directory holding the warehouse CSV files
    #[arg(long, short = 'd', default_value = ".", value_name = "PATH")]
    pub data_dir: Utf8PathBuf,

    /// Path to configuration file (default is `gauge.toml` in the data directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Report destinations
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Output reports to an Excel spreadsheet file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub excel: Option<Utf8PathBuf>,

    /// Output reports to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output reports to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output reports to the console.
    /// If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// Common arguments shared between the report and reconcile commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    #[command(flatten)]
    pub warehouse: WarehouseArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub struct Common<'a, H: Host> {
    pub warehouse: Warehouse,
    pub config: Config,
    host: &'a mut H,
    output: OutputArgs,
}

impl<H: Host> core::fmt::Debug for Common<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Common").field("output", &self.output).finish_non_exhaustive()
    }
}

impl<'a, H: Host> Common<'a, H> {
    /// Initialize logging, then load the configuration and the warehouse
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or any warehouse table cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        init_logging(args.warehouse.log_level);
        let (warehouse, config) = load_inputs(&args.warehouse)?;

        Ok(Self {
            warehouse,
            config,
            host,
            output: args.output.clone(),
        })
    }

    /// Render `reports` to every requested destination
    pub fn report(&mut self, reports: &[Report]) -> Result<()> {
        let generating_reports = self.output.excel.is_some() || self.output.csv.is_some() || self.output.json.is_some();

        if self.output.console || !generating_reports {
            let mut console_output = String::new();
            generate_console(reports, self.use_colors(), &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &self.output.excel {
            let mut file = fs::File::create(filename).into_app_err_with(|| format!("creating Excel report '{filename}'"))?;
            generate_xlsx(reports, &mut file)?;
        }

        if let Some(filename) = &self.output.csv {
            let mut csv_output = String::new();
            generate_csv(reports, &mut csv_output)?;
            fs::write(filename, csv_output).into_app_err_with(|| format!("writing CSV report '{filename}'"))?;
        }

        if let Some(filename) = &self.output.json {
            let mut json_output = String::new();
            generate_json(reports, &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report '{filename}'"))?;
        }

        Ok(())
    }

    fn use_colors(&self) -> bool {
        match self.output.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Load the configuration, then the warehouse it applies to
///
/// # Errors
///
/// Returns an error if the data directory is missing or either input fails to load
pub fn load_inputs(args: &WarehouseArgs) -> Result<(Warehouse, Config)> {
    if !args.data_dir.is_dir() {
        bail!("data directory '{}' does not exist", args.data_dir);
    }

    let config = Config::load(&args.data_dir, args.config.as_ref())?;
    let warehouse = Warehouse::open(&args.data_dir)?;
    Ok((warehouse, config))
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
